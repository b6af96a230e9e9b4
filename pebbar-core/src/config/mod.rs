//! Configuration types
//!
//! Per-deployment settings, stored as postcard binary data when the `serde`
//! feature is enabled.

#[cfg(feature = "serde")]
pub mod storage;
pub mod types;

#[cfg(feature = "serde")]
pub use storage::*;
pub use types::*;
