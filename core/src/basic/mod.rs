//!
//! # Basic Data Structures
//!
//! The generic locked map that the typed variants of `rwmap` are built on.
//! It is parameterized over its storage engine and its lock, and carries
//! every operation that does not depend on which engine is used.
//!

/// A module for the engine-generic, lock-guarded map implementation.
pub mod mapx_raw;
