//! A regime bound together with an optional working directory.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{DriveSplit, HeadTail, RootExt};
use crate::regime::Regime;

/// Path operations under a fixed regime, with an optional working directory
/// for resolving relative paths.
///
/// The context never asks the process for its current directory. If one is
/// needed, the caller binds it with [`PathContext::with_working_dir`].
///
/// # Examples
///
/// ```
/// use pathops::{PathContext, Regime};
///
/// let context = PathContext::new(Regime::Posix).with_working_dir("/home/user");
/// assert_eq!(context.resolve("docs/../notes.txt").unwrap(), "/home/user/notes.txt");
/// assert_eq!(context.join(["a", "b"]), "a/b");
///
/// let unbound = PathContext::new(Regime::Posix);
/// assert!(unbound.resolve("relative").is_err());
/// assert_eq!(unbound.resolve("/abs/./x").unwrap(), "/abs/x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    regime: Regime,
    working_dir: Option<String>,
}

impl PathContext {
    /// Create a context with no working directory.
    #[must_use]
    pub fn new(regime: Regime) -> Self {
        log::debug!("creating path context for {regime} regime");
        Self {
            regime,
            working_dir: None,
        }
    }

    /// Create a context for the build target's regime.
    #[must_use]
    pub fn native() -> Self {
        Self::new(Regime::NATIVE)
    }

    /// Bind the working directory used by [`resolve`](Self::resolve).
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<String>) -> Self {
        let working_dir = working_dir.into();
        log::debug!("binding working directory {working_dir:?}");
        self.working_dir = Some(working_dir);
        self
    }

    /// Create a context from a built configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let context = Self::new(config.resolved_regime());
        match config.working_dir {
            Some(ref working_dir) => context.with_working_dir(working_dir.as_str()),
            None => context,
        }
    }

    /// The bound regime.
    #[must_use]
    pub const fn regime(&self) -> Regime {
        self.regime
    }

    /// The bound working directory, if any.
    #[must_use]
    pub fn working_dir(&self) -> Option<&str> {
        self.working_dir.as_deref()
    }

    /// Make `path` absolute against the bound working directory and
    /// normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingWorkingDir`] if `path` is relative and no
    /// working directory is bound.
    pub fn resolve(&self, path: &str) -> Result<String> {
        let resolved = match self.working_dir.as_deref() {
            Some(cwd) => self.regime.abspath(path, cwd),
            None if self.regime.isabs(path) => self.regime.normpath(path),
            None => {
                return Err(Error::MissingWorkingDir {
                    path: path.to_string(),
                })
            }
        };
        log::trace!("resolved {path:?} to {resolved:?}");
        Ok(resolved)
    }

    /// See [`Regime::splitdrive`].
    #[must_use]
    pub fn splitdrive<'a>(&self, path: &'a str) -> DriveSplit<'a> {
        self.regime.splitdrive(path)
    }

    /// See [`Regime::isabs`].
    #[must_use]
    pub fn isabs(&self, path: &str) -> bool {
        self.regime.isabs(path)
    }

    /// See [`Regime::join`].
    pub fn join<I, S>(&self, components: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.regime.join(components)
    }

    /// See [`Regime::split`].
    #[must_use]
    pub fn split<'a>(&self, path: &'a str) -> HeadTail<'a> {
        self.regime.split(path)
    }

    /// See [`Regime::splitext`].
    #[must_use]
    pub fn splitext<'a>(&self, path: &'a str) -> RootExt<'a> {
        self.regime.splitext(path)
    }

    /// See [`Regime::basename`].
    #[must_use]
    pub fn basename<'a>(&self, path: &'a str) -> &'a str {
        self.regime.basename(path)
    }

    /// See [`Regime::dirname`].
    #[must_use]
    pub fn dirname<'a>(&self, path: &'a str) -> &'a str {
        self.regime.dirname(path)
    }

    /// See [`Regime::normpath`].
    #[must_use]
    pub fn normpath(&self, path: &str) -> String {
        self.regime.normpath(path)
    }

    /// See [`Regime::abspath`].
    #[must_use]
    pub fn abspath(&self, path: &str, cwd: &str) -> String {
        self.regime.abspath(path, cwd)
    }
}

impl Default for PathContext {
    fn default() -> Self {
        Self::native()
    }
}

impl From<Regime> for PathContext {
    fn from(regime: Regime) -> Self {
        Self::new(regime)
    }
}
