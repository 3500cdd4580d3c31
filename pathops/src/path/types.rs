//! Two-part results of the decomposition operations.
//!
//! Each partition is its own type because each carries its own
//! reconstruction rule. All three borrow from the path they were cut from.

/// A path cut into its drive and the remainder.
///
/// `drive` followed by `rest` is always exactly the original path.
///
/// # Examples
///
/// ```
/// use pathops::{DriveSplit, Regime};
///
/// let parts = Regime::Windows.splitdrive("c:\\dir");
/// assert_eq!(parts, DriveSplit { drive: "c:", rest: "\\dir" });
/// assert_eq!(parts.into_pair(), ("c:", "\\dir"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DriveSplit<'a> {
    /// The drive specification, or empty.
    pub drive: &'a str,
    /// Everything after the drive.
    pub rest: &'a str,
}

/// A path cut before its final segment.
///
/// `tail` never contains a separator. Joining `head` and `tail` denotes the
/// same location as the original, though the strings may differ. Under
/// Windows syntax this needs the path's only `:` to be its drive marker; see
/// the [`path`](crate::path) module docs.
///
/// # Examples
///
/// ```
/// use pathops::Regime;
///
/// let parts = Regime::Posix.split("/usr/lib/");
/// assert_eq!(parts.head, "/usr/lib");
/// assert_eq!(parts.tail, "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeadTail<'a> {
    /// Everything up to the final segment, trailing separators removed.
    pub head: &'a str,
    /// The final segment.
    pub tail: &'a str,
}

/// A path cut before its extension.
///
/// `root` followed by `ext` is always exactly the original path; `ext` is
/// empty or starts with a dot.
///
/// # Examples
///
/// ```
/// use pathops::Regime;
///
/// let parts = Regime::Posix.splitext("archive.tar.gz");
/// assert_eq!(parts.into_pair(), ("archive.tar", ".gz"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RootExt<'a> {
    /// Everything before the extension.
    pub root: &'a str,
    /// The extension, including its dot, or empty.
    pub ext: &'a str,
}

impl<'a> DriveSplit<'a> {
    /// Return the parts as an ordered `(drive, rest)` pair.
    #[must_use]
    pub const fn into_pair(self) -> (&'a str, &'a str) {
        (self.drive, self.rest)
    }

    /// Whether a drive was found.
    #[must_use]
    pub fn has_drive(&self) -> bool {
        !self.drive.is_empty()
    }
}

impl<'a> HeadTail<'a> {
    /// Return the parts as an ordered `(head, tail)` pair.
    #[must_use]
    pub const fn into_pair(self) -> (&'a str, &'a str) {
        (self.head, self.tail)
    }
}

impl<'a> RootExt<'a> {
    /// Return the parts as an ordered `(root, ext)` pair.
    #[must_use]
    pub const fn into_pair(self) -> (&'a str, &'a str) {
        (self.root, self.ext)
    }

    /// Whether an extension was found.
    #[must_use]
    pub fn has_ext(&self) -> bool {
        !self.ext.is_empty()
    }
}

impl<'a> From<DriveSplit<'a>> for (&'a str, &'a str) {
    fn from(parts: DriveSplit<'a>) -> Self {
        parts.into_pair()
    }
}

impl<'a> From<HeadTail<'a>> for (&'a str, &'a str) {
    fn from(parts: HeadTail<'a>) -> Self {
        parts.into_pair()
    }
}

impl<'a> From<RootExt<'a>> for (&'a str, &'a str) {
    fn from(parts: RootExt<'a>) -> Self {
        parts.into_pair()
    }
}
