//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::export::{ImageFormat, SizeClass};

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.limits.export_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.export_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.generate_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.generate_timeout_ms must be > 0".into(),
            ));
        }
        if ImageFormat::parse(&self.export.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "export.format must be one of png, jpeg, webp (got \"{}\")",
                self.export.format
            )));
        }
        if SizeClass::parse(&self.export.size).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "export.size must be one of original, large, medium, small (got \"{}\")",
                self.export.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.limits.export_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = Config::default();
        config.export.format = "bmp".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("export.format"));
    }

    #[test]
    fn test_unknown_size_rejected() {
        let mut config = Config::default();
        config.export.size = "gigantic".to_string();
        assert!(config.validate().is_err());
    }
}
