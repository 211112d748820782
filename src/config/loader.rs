use super::KitConfig;
use crate::error::{common, ErrorCode, ErrorExt, KitError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the per-user config file, if a home directory can be found
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "bdkit", "bdkit").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the per-user config file is used
/// when present and defaults otherwise. Environment overrides are applied last.
pub fn load(explicit: Option<&Path>) -> Result<KitConfig> {
    let mut config = match explicit {
        Some(path) => load_from_path(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_from_path(&path)?,
            None => {
                debug!("No config file found, using defaults");
                KitConfig::default()
            }
        },
    };

    config.merge_env_vars()?;
    config.validate()?;
    Ok(config)
}

/// Parse a TOML config file without applying overrides
pub fn load_from_path(path: &Path) -> Result<KitConfig> {
    if !path.exists() {
        return Err(common::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .to_config_error(format!("Failed to read {}", path.display()))?;
    let config: KitConfig = toml::from_str(&content).map_err(|e| {
        KitError::config_with_code(
            ErrorCode::CONFIG_INVALID_TOML,
            format!("Failed to parse {}", path.display()),
        )
        .with_source(e)
    })?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[birthdays]\nwindow_days = 10\n\n[phone]\ncountry_code = \"48\""
        )
        .unwrap();

        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.birthdays.window_days, 10);
        assert_eq!(config.phone.country_code, "48");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = load_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[birthdays\nwindow_days = ").unwrap();
        let err = load_from_path(file.path()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
    }
}
