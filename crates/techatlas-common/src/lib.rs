//! techatlas-common — Shared error type used across all techatlas crates.

pub mod error;

pub use error::{AtlasError, Result};
