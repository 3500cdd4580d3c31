//! Layered configuration construction.

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::regime::Regime;

/// Builds a [`Config`] from layered sources.
///
/// Layers apply lowest precedence first:
///
/// 1. Built-in defaults (native regime, no working directory)
/// 2. YAML documents, in the order they were added
/// 3. Programmatic overrides
///
/// # Examples
///
/// ```
/// use pathops::config::ConfigBuilder;
/// use pathops::Regime;
///
/// let config = ConfigBuilder::new()
///     .with_yaml("regime: posix\nworking_dir: /srv")
///     .unwrap()
///     .with_working_dir("/home/user")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.regime, Some(Regime::Posix));
/// assert_eq!(config.working_dir.as_deref(), Some("/home/user"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    documents: Vec<Config>,
    overrides: Config,
    skip_validation: bool,
}

impl ConfigBuilder {
    /// Create a builder with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document and add it as a layer.
    ///
    /// A blank document adds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// text is not a valid configuration document.
    pub fn with_yaml(mut self, text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(self);
        }
        let document: Config = serde_yaml::from_str(text)?;
        self.documents.push(document);
        Ok(self)
    }

    /// Merge a programmatic override layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        ConfigMerger::merge_into(&mut self.overrides, &config);
        self
    }

    /// Override the regime.
    #[must_use]
    pub fn with_regime(mut self, regime: Regime) -> Self {
        self.overrides.regime = Some(regime);
        self
    }

    /// Override the working directory.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<String>) -> Self {
        self.overrides.working_dir = Some(working_dir.into());
        self
    }

    /// Build without validating the result.
    #[must_use]
    pub fn skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }

    /// Merge all layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if the merged
    /// configuration is invalid and validation was not skipped.
    pub fn build(self) -> Result<Config> {
        let layer_count = self.documents.len() + 1;
        let config = ConfigMerger::merge(self.documents.into_iter().chain([self.overrides]));

        if !self.skip_validation {
            ConfigValidator::validate(&config)?;
        }

        log::debug!(
            "built configuration from {layer_count} layers: regime={}, working_dir={:?}",
            config.resolved_regime(),
            config.working_dir
        );
        Ok(config)
    }
}
