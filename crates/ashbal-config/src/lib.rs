//! # Ashbal Config
//!
//! Typed, validated configuration for the Ashbal Karate site.
//!
//! Configuration is read from `ASHBAL_CONFIG_PATH` or a `config.yaml`,
//! `config.yml` or `config.toml` in the working directory, overlaid with
//! environment variables, validated with `validator`, and shared through a
//! lock-free [`ConfigCache`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod loader;
pub mod settings;
pub mod validation;

pub use cache::ConfigCache;
pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILES};
pub use settings::*;
