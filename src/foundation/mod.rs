//! Shared building blocks: errors, numeric field parsing and configuration values.

/// Configuration newtypes and chart geometry.
pub mod core;
/// Error taxonomy and source locations.
pub mod error;
/// Integer field parsing with typed failure reasons.
pub mod number;
