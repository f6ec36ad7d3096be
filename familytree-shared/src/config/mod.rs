//! # Configuration
//!
//! Settings shared by the native front ends: where the API lives and how
//! verbose logging should be.

pub mod client;

pub use client::{ClientConfig, ConfigError};
