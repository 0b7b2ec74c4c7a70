//! Core types shared by the utilities
//!
//! - `UtilError` - Error types

pub mod error;

pub use error::{UtilError, UtilResult};
