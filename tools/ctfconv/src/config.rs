//! CLI configuration
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. `ctfconv.toml` / `ctfconv.yaml` in the working directory, or the
//!    file passed with `--config`
//! 3. Environment variables prefixed `CTFCONV_` (`__` separates nested
//!    keys, e.g. `CTFCONV_OUTPUT__SEPARATOR=,`)
//!
//! Command-line flags are applied on top by the caller.

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "CTFCONV_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Separator between list elements in plain output
    pub separator: String,
    /// Print results as JSON
    pub json: bool,
    /// Colored error messages
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            json: false,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Build the figment for an explicit config file, choosing the format by extension
fn file_provider(path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }

    let figment = match extension {
        "toml" => Figment::new().merge(Toml::file(path)),
        "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
        "json" => Figment::new().merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}

/// Load configuration from defaults, files and environment
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig> {
    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));

    figment = match explicit {
        Some(path) => figment.merge(file_provider(path)?),
        None => figment
            .merge(Toml::file("ctfconv.toml"))
            .merge(Yaml::file("ctfconv.yaml")),
    };

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).unwrap();
            assert_eq!(config, CliConfig::default());
            assert_eq!(config.output.separator, " ");
            assert!(!config.output.json);
            assert!(config.output.color);
            assert_eq!(config.log.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_working_directory_toml_picked_up() {
        Jail::expect_with(|jail| {
            jail.create_file("ctfconv.toml", "[output]\nseparator = \";\"\n")?;

            let config = load_config(None).unwrap();
            assert_eq!(config.output.separator, ";");
            assert_eq!(config.log, LogConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_working_directory_yaml_picked_up() {
        Jail::expect_with(|jail| {
            jail.create_file("ctfconv.yaml", "log:\n  level: info\n")?;

            let config = load_config(None).unwrap();
            assert_eq!(config.log.level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[output]\nseparator = \",\"\njson = true\n")?;

            let config = load_config(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.output.separator, ",");
            assert!(config.output.json);
            // untouched keys keep defaults
            assert!(config.output.color);
            assert_eq!(config.log.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_replaces_working_directory_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ctfconv.toml", "[output]\nseparator = \";\"\n")?;
            jail.create_file("custom.yaml", "log:\n  level: debug\n")?;

            let config = load_config(Some(Path::new("custom.yaml"))).unwrap();
            assert_eq!(config.log.level, "debug");
            assert_eq!(config.output, OutputConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ctfconv.toml", "[output]\nseparator = \";\"\njson = true\n")?;
            jail.set_env("CTFCONV_OUTPUT__SEPARATOR", ",");
            jail.set_env("CTFCONV_LOG__LEVEL", "trace");

            let config = load_config(None).unwrap();
            assert_eq!(config.output.separator, ",");
            assert_eq!(config.log.level, "trace");
            // file value survives where env is silent
            assert!(config.output.json);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[output]\ncolor = true\n")?;
            jail.set_env("CTFCONV_OUTPUT__COLOR", "false");

            let config = load_config(Some(Path::new("custom.toml"))).unwrap();
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_env_value() {
        Jail::expect_with(|jail| {
            jail.set_env("CTFCONV_OUTPUT__JSON", "maybe");

            let err = load_config(None).unwrap_err();
            assert!(err.to_string().contains("Failed to load configuration"));
            Ok(())
        });
    }

    #[test]
    fn test_rejects_unknown_extension() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.ini", "separator=,")?;

            let err = load_config(Some(Path::new("custom.ini"))).unwrap_err();
            assert!(err.to_string().contains("Unsupported config file format"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|_jail| {
            let err = load_config(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(err.to_string().contains("not found"));
            Ok(())
        });
    }
}
