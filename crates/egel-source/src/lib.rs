//! Source text and configuration for the Egel compiler front-end.
//!
//! This crate is the bottom layer of the front-end:
//! - `SourceFile` carries the name and text of one compilation unit
//! - `Report` pairs any miette diagnostic with that text for rendering
//! - `ResolverConfig` holds the knobs of the name-resolution passes,
//!   loadable from TOML

mod config;
mod diagnostic;
mod error;
mod file;

pub use config::{ResolverConfig, default_field_namespace, default_fresh_prefix};
pub use diagnostic::{EgelError, Report};
pub use error::ConfigError;
pub use file::SourceFile;

/// Separator placed between namespace segments in a canonical name.
pub const NAMESPACE_SEPARATOR: &str = "::";
