//! File input

use crate::error::{ConvertError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load a whole file as text
///
/// The file must be UTF-8, which is also how results are printed, so
/// output saved to a file loads back unchanged. Characters above 255
/// are rejected later by the text conversions.
pub fn load_data(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => ConvertError::invalid_input(format!(
            "File {} is not valid UTF-8 text",
            path.display()
        )),
        _ => ConvertError::io(path, e),
    })?;
    debug!(path = %path.display(), bytes = data.len(), "Loaded input file");
    Ok(data)
}
