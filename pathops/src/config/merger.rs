//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathops::config::{Config, ConfigMerger};
/// use pathops::Regime;
///
/// let low = Config { regime: Some(Regime::Posix), ..Default::default() };
/// let high = Config { regime: Some(Regime::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.regime, Some(Regime::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given lowest precedence first.
    #[must_use]
    pub fn merge<I>(layers: I) -> Config
    where
        I: IntoIterator<Item = Config>,
    {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, &layer);
        }
        result
    }

    /// Merge `source` into `target`; a `Some` field in `source` overwrites.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.regime.is_some() {
            target.regime = source.regime;
        }

        if source.working_dir.is_some() {
            target.working_dir.clone_from(&source.working_dir);
        }
    }
}
