//! Configuration for path contexts.
//!
//! A configuration selects the path regime and an optional working
//! directory. It is assembled from layers:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`] and friends)
//! 2. YAML documents (via [`ConfigBuilder::with_yaml`])
//! 3. Built-in defaults
//!
//! Configuration is text-in only. Nothing here reads files or environment
//! variables; callers hand over the YAML they want applied.
//!
//! # Examples
//!
//! ```
//! use pathops::config::ConfigBuilder;
//! use pathops::{PathContext, Regime};
//!
//! let config = ConfigBuilder::new()
//!     .with_yaml("regime: windows\nworking_dir: 'c:\\work'")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let context = PathContext::from_config(&config);
//! assert_eq!(context.regime(), Regime::Windows);
//! assert_eq!(context.resolve("src/../lib").unwrap(), "c:\\work\\lib");
//! ```

pub mod builder;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
