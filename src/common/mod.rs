//! Crate-wide error handling and configuration

/// Grid limits and convenience sizes
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
