//! Error types for the pathops library.
//!
//! The path algebra itself is total and never fails. Errors only arise in
//! the layers around it: parsing a regime name, loading and validating a
//! configuration, and resolving paths through a bound [`PathContext`].
//!
//! [`PathContext`]: crate::PathContext

use thiserror::Error;

/// Result type alias for operations that may fail with a pathops error.
///
/// # Examples
///
/// ```
/// use pathops::{Regime, Result};
///
/// fn parse_regime(name: &str) -> Result<Regime> {
///     name.parse()
/// }
///
/// assert!(parse_regime("posix").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathops library.
#[derive(Debug, Error)]
pub enum Error {
    /// A regime name was not recognized.
    #[error("unknown path regime '{value}': expected posix, windows or native")]
    UnknownRegime {
        /// The unrecognized name.
        value: String,
    },

    /// A configuration field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A relative path was resolved without a bound working directory.
    #[error("cannot resolve relative path '{path}': no working directory is bound")]
    MissingWorkingDir {
        /// The relative path that could not be resolved.
        path: String,
    },
}

impl Error {
    /// Check if the error came from loading or validating configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathops::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "working_dir".to_string(),
    ///     message: "must be absolute".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Configuration(_))
    }
}
