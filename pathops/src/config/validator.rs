//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathops::config::{Config, ConfigValidator};
/// use pathops::Regime;
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let relative = Config {
///     regime: Some(Regime::Posix),
///     working_dir: Some("srv".to_string()),
/// };
/// assert!(ConfigValidator::validate(&relative).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `working_dir` is empty, contains a
    /// NUL byte, or is not absolute under the configured regime.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref working_dir) = config.working_dir {
            Self::validate_working_dir(config, working_dir)?;
        }

        Ok(())
    }

    fn validate_working_dir(config: &Config, working_dir: &str) -> Result<()> {
        if working_dir.trim().is_empty() {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if working_dir.contains('\0') {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        let regime = config.resolved_regime();
        if !regime.isabs(working_dir) {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: format!("'{working_dir}' is not an absolute {regime} path"),
            });
        }

        Ok(())
    }
}
