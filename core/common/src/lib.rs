//! Common utilities and types shared across the secretkeep crates.
//!
//! This module provides the error taxonomy used by every configuration
//! operation and the validated vault name type callers use before touching
//! the filesystem.

pub mod error;
pub mod types;

pub use error::{Error, Resource, Result};
pub use types::VaultName;
