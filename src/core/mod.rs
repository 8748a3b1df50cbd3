//! Core types shared by the layout engine and the card helpers:
//! icon counts, the crate error type, and cache configuration.

pub mod config;
pub mod count;
pub mod error;

pub use config::CacheConfig;
pub use count::IconCount;
pub use error::{LayoutError, Result};
