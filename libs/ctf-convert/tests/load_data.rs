use ctf_convert::{ConvertError, Converter};
use std::io::Write;

#[test]
fn test_load_text_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "48656c6c6f").unwrap();

    let conv = Converter::new();
    let data = conv.load_data(file.path()).unwrap();
    assert_eq!(data, "48656c6c6f\n");
    assert_eq!(conv.hex_to_text(data.trim()).unwrap(), "Hello");
}

#[test]
fn test_load_utf8_file_decodes_characters() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("é\u{ff}".as_bytes()).unwrap();

    let conv = Converter::new();
    let data = conv.load_data(file.path()).unwrap();
    assert_eq!(conv.text_to_hex(&data).unwrap(), "e9ff");
}

#[test]
fn test_saved_output_loads_back() {
    let conv = Converter::new();
    let text = conv.hex_to_text("00ff80").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, &text).unwrap();

    let data = conv.load_data(&path).unwrap();
    assert_eq!(conv.text_to_hex(&data).unwrap(), "00ff80");
}

#[test]
fn test_non_utf8_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x41, 0xff, 0xfe]).unwrap();

    let err = Converter::new().load_data(file.path()).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn test_wide_characters_rejected_on_conversion() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("€".as_bytes()).unwrap();

    let conv = Converter::new();
    let data = conv.load_data(file.path()).unwrap();
    assert!(conv.text_to_hex(&data).unwrap_err().is_invalid_input());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = Converter::new().load_data(&missing).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
    assert!(!err.is_invalid_input());
    assert!(err.to_string().contains("missing.txt"));
}
