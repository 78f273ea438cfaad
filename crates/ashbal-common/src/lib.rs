//! # Ashbal Common
//!
//! Shared types, errors, and logging for the Ashbal Karate site.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace: the closed [`Language`] set, the [`Direction`] derived
//! from it, and the [`ContentDirection`] produced by script detection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{AshbalError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
