//! Configuration module for Quotewalk
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is never required: [`Config::default`] describes the stock site.
//!
//! # Example
//!
//! ```no_run
//! use quotewalk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("quotewalk.toml")).unwrap();
//! println!("Writing to: {}", config.output.path.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, SelectorConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
