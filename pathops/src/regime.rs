//! Path syntax regimes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;
use crate::path::syntax::{Syntax, POSIX, WINDOWS};
use crate::path::{decompose, join, normalize, query};
use crate::path::{DriveSplit, HeadTail, RootExt};

/// The path syntax a call operates under.
///
/// Every path operation is available as a method here, so a regime can be
/// chosen at runtime and passed around like any other value.
///
/// # Examples
///
/// ```
/// use pathops::Regime;
///
/// assert_eq!(Regime::Posix.join(["a", "b"]), "a/b");
/// assert_eq!(Regime::Windows.join(["a", "b"]), "a\\b");
///
/// let regime: Regime = "nt".parse().unwrap();
/// assert_eq!(regime, Regime::Windows);
/// assert_eq!(regime.to_string(), "windows");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Single `/` separator, no drives.
    Posix,
    /// `\` separator, `/` accepted, `X:` drive prefixes.
    Windows,
}

impl Regime {
    /// The regime of the build target.
    pub const NATIVE: Self = if cfg!(windows) {
        Self::Windows
    } else {
        Self::Posix
    };

    /// Both regimes, Posix first.
    pub const ALL: [Self; 2] = [Self::Posix, Self::Windows];

    /// The regime of the build target.
    #[must_use]
    pub const fn native() -> Self {
        Self::NATIVE
    }

    /// The descriptor the path algorithms run against.
    #[must_use]
    pub const fn syntax(self) -> &'static Syntax {
        match self {
            Self::Posix => &POSIX,
            Self::Windows => &WINDOWS,
        }
    }

    /// The primary separator.
    #[must_use]
    pub const fn sep(self) -> &'static str {
        self.syntax().sep()
    }

    /// Split off a drive specification. See [`decompose::splitdrive`].
    #[must_use]
    pub fn splitdrive(self, path: &str) -> DriveSplit<'_> {
        decompose::splitdrive(self.syntax(), path)
    }

    /// Split before the final segment. See [`decompose::split`].
    #[must_use]
    pub fn split(self, path: &str) -> HeadTail<'_> {
        decompose::split(self.syntax(), path)
    }

    /// Split before the extension. See [`decompose::splitext`].
    #[must_use]
    pub fn splitext(self, path: &str) -> RootExt<'_> {
        decompose::splitext(self.syntax(), path)
    }

    /// The final segment. See [`decompose::basename`].
    #[must_use]
    pub fn basename(self, path: &str) -> &str {
        decompose::basename(self.syntax(), path)
    }

    /// Everything before the final segment. See [`decompose::dirname`].
    #[must_use]
    pub fn dirname(self, path: &str) -> &str {
        decompose::dirname(self.syntax(), path)
    }

    /// Join components. See [`join::join`].
    pub fn join<I, S>(self, components: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join::join(self.syntax(), components)
    }

    /// Normalize. See [`normalize::normpath`].
    #[must_use]
    pub fn normpath(self, path: &str) -> String {
        normalize::normpath(self.syntax(), path)
    }

    /// Test absoluteness. See [`query::isabs`].
    #[must_use]
    pub fn isabs(self, path: &str) -> bool {
        query::isabs(self.syntax(), path)
    }

    /// Absolutize against `cwd`. See [`query::abspath`].
    #[must_use]
    pub fn abspath(self, path: &str, cwd: &str) -> String {
        query::abspath(self.syntax(), path, cwd)
    }
}

impl Default for Regime {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Regime {
    type Err = Error;

    /// Parses `posix`/`unix`, `windows`/`nt` or `native` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "nt" => Ok(Self::Windows),
            "native" => Ok(Self::NATIVE),
            _ => Err(Error::UnknownRegime {
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Regime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}
