//! Site configuration for a personal blog.
//!
//! The configuration is a single immutable [`SiteConfig`] loaded once per
//! process, either from a TOML/JSON file or from the record shipped with the
//! crate. The remaining modules are small pure derivations over it: page
//! metadata, listing boundaries and scheduled publication.

pub mod config;
pub mod error;
pub mod meta;
pub mod paginate;
pub mod schedule;
pub mod types;
pub mod utils;

pub use config::{SiteConfig, install, site};
pub use error::ConfigError;
