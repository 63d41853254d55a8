//! Utility types for pathmatch.
//!
//! This module provides:
//! - [`Params`]: An insertion-ordered map of parameter names to captured values.

mod params;

pub use params::Params;
