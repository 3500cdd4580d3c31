//! Configuration schema definitions.
//!
//! A configuration chooses the path regime and, optionally, the working
//! directory that relative paths are resolved against.

use serde::{Deserialize, Serialize};

use crate::regime::Regime;

/// Complete configuration structure.
///
/// Every field is optional so that partial documents can be layered. An
/// absent `regime` means the build target's native regime.
///
/// # Examples
///
/// ```
/// use pathops::config::Config;
/// use pathops::Regime;
///
/// let config: Config = serde_yaml::from_str("regime: windows\nworking_dir: 'c:\\work'").unwrap();
/// assert_eq!(config.regime, Some(Regime::Windows));
/// assert_eq!(config.working_dir.as_deref(), Some("c:\\work"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path syntax regime (`posix`, `windows`, or `native`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,

    /// Directory relative paths are made absolute against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl Config {
    /// The configured regime, falling back to the native one.
    #[must_use]
    pub fn resolved_regime(&self) -> Regime {
        self.regime.unwrap_or(Regime::NATIVE)
    }
}
