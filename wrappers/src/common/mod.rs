//!
//! # Common Components
//!
//! This module provides common components and utilities used throughout the `rwmap` wrappers.
//! It re-exports items from `rwmap_core::common` and includes the `ende` module for
//! encoding and decoding whole maps.
//!

/// A module for encoding and decoding traits.
pub mod ende;
pub mod macros;

pub use rwmap_core::common::*;
