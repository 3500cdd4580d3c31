//! Regime descriptors.
//!
//! Every path algorithm is written once against a [`Syntax`], a small value
//! describing the separators, the drive marker and the leading-separator rule
//! of one regime. The two regimes are the [`POSIX`] and [`WINDOWS`] constants.

use textops::{ends_with, rfind, starts_with};

/// How `normpath` treats a run of separators at the start of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadingSeparators {
    /// Exactly two leading separators are kept; any other non-empty run
    /// collapses to one.
    AllowDouble,
    /// Without a drive the whole run is kept (it may name a UNC share);
    /// after a drive the run collapses to one.
    PreserveWithoutDrive,
}

/// Separator set, drive syntax and normalization rules of one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syntax {
    pub(crate) sep: &'static str,
    pub(crate) altsep: Option<&'static str>,
    pub(crate) drive_marker: Option<&'static str>,
    pub(crate) leading: LeadingSeparators,
}

/// POSIX paths: `/` only, no drives.
pub const POSIX: Syntax = Syntax {
    sep: "/",
    altsep: None,
    drive_marker: None,
    leading: LeadingSeparators::AllowDouble,
};

/// Windows paths: `\` primary, `/` accepted, `X:` drives.
pub const WINDOWS: Syntax = Syntax {
    sep: "\\",
    altsep: Some("/"),
    drive_marker: Some(":"),
    leading: LeadingSeparators::PreserveWithoutDrive,
};

impl Syntax {
    /// The separator inserted by `join` and emitted by `normpath`.
    #[must_use]
    pub const fn sep(&self) -> &'static str {
        self.sep
    }

    /// The alternate separator accepted on input, if any.
    #[must_use]
    pub const fn altsep(&self) -> Option<&'static str> {
        self.altsep
    }

    /// The character that marks a drive prefix, if drives exist.
    #[must_use]
    pub const fn drive_marker(&self) -> Option<&'static str> {
        self.drive_marker
    }

    /// The leading-separator rule applied by `normpath`.
    #[must_use]
    pub const fn leading(&self) -> LeadingSeparators {
        self.leading
    }

    pub(crate) fn starts_with_sep(&self, s: &str) -> bool {
        starts_with(s, self.sep) || self.altsep.is_some_and(|alt| starts_with(s, alt))
    }

    pub(crate) fn ends_with_sep(&self, s: &str) -> bool {
        ends_with(s, self.sep) || self.altsep.is_some_and(|alt| ends_with(s, alt))
    }

    pub(crate) fn ends_with_drive_marker(&self, s: &str) -> bool {
        self.drive_marker.is_some_and(|marker| ends_with(s, marker))
    }

    /// `s` without its trailing run of separators of either kind.
    pub(crate) fn trim_trailing_seps<'a>(&self, s: &'a str) -> &'a str {
        let mut rest = s;
        loop {
            if let Some(shorter) = rest.strip_suffix(self.sep) {
                rest = shorter;
            } else if let Some(shorter) = self.altsep.and_then(|alt| rest.strip_suffix(alt)) {
                rest = shorter;
            } else {
                return rest;
            }
        }
    }

    /// Offset of the rightmost separator of either kind.
    pub(crate) fn last_sep(&self, s: &str) -> Option<usize> {
        let primary = rfind(s, self.sep);
        let alternate = self.altsep.and_then(|alt| rfind(s, alt));
        primary.max(alternate)
    }
}
