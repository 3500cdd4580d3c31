#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathops
//!
//! A pure string algebra over file-system path names, with POSIX and
//! Windows syntax selectable at runtime.
//!
//! Nothing in this crate touches a filesystem or the process environment.
//! Paths are strings in and strings out.
//!
//! ## Core Types
//!
//! - [`Regime`]: the path syntax a call operates under
//! - [`DriveSplit`], [`HeadTail`] and [`RootExt`]: borrowed two-part partitions
//! - [`PathContext`]: a regime bound to an optional working directory
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathops::path::{posix, windows};
//! use pathops::Regime;
//!
//! assert_eq!(posix::normpath("/a/b/../c"), "/a/c");
//! assert_eq!(windows::splitdrive("c:\\x").into_pair(), ("c:", "\\x"));
//!
//! let regime: Regime = "windows".parse().unwrap();
//! assert_eq!(regime.join(["c:", "dir", "file.txt"]), "c:dir\\file.txt");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod path;
pub mod regime;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use context::PathContext;
pub use error::{Error, Result};
pub use path::{DriveSplit, HeadTail, RootExt, Syntax};
pub use regime::Regime;
