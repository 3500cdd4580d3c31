#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # textops
//!
//! Byte-indexed string primitives with clamped, negative-capable indices.
//!
//! Every function here is total: out-of-range indices are clamped instead of
//! panicking, and searches report "not found" as `None`.
//!
//! ## Index Rules
//!
//! - An `end` beyond the length of the string is clamped to the length.
//! - A negative index counts back from the end and is clamped at `0`.
//! - [`END`] stands for "through the end of the string".
//! - An offset that lands inside a multi-byte character is rounded down to
//!   the previous character boundary.
//!
//! ## Examples
//!
//! ```
//! use textops::{find, rfind, slice, split, strip, END};
//!
//! assert_eq!(slice("hello", 1, -1), "ell");
//! assert_eq!(slice("hello", -3, END), "llo");
//! assert_eq!(find("a/b/c", "/"), Some(1));
//! assert_eq!(rfind("a/b/c", "/"), Some(3));
//! assert_eq!(rfind("abc", "/"), None);
//! assert_eq!(split("a//b", "/", None), vec!["a", "", "b"]);
//! assert_eq!(strip("  padded\t", ""), "padded");
//! ```

mod bounds;
pub mod search;
pub mod slice;
pub mod split;
pub mod strip;
pub mod transform;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use bounds::END;
pub use search::{
    count, count_in, ends_with, ends_with_in, find, find_in, rfind, rfind_in, starts_with,
    starts_with_in,
};
pub use slice::{slice, slice_from};
pub use split::{join, split};
pub use strip::{lstrip, rstrip, strip};
pub use transform::{repeat, replace};
