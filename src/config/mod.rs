//! Configuration loading and management for the office attendance engine.
//!
//! This module loads the engine settings and the bank holiday table from YAML
//! files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use office_attendance::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/england").unwrap();
//! println!("Region: {}", config.settings().region);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, Settings};
