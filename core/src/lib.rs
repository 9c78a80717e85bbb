//! # rwmap_core
//!
//! `rwmap_core` provides the low-level building blocks for `rwmap`: the storage
//! engines, the lock discipline and the engine-generic locked map. It is not
//! typically used directly by end-users, but forms the foundation of the
//! typed map variants in `rwmap`.

#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]
#![recursion_limit = "512"]

/// Storage engines, lock types and the `EmptyValue` trait.
///
/// This module provides the `Engine` trait for abstracting over the hashed and
/// the insertion-ordered backends, along with the raw lock types selecting
/// between thread-safe and single-threaded maps.
pub mod common;

/// Contains the engine-generic map.
///
/// This module provides `MapxRaw`, a map guarded by one reader/writer lock that
/// implements every read, write and compound operation on top of an `Engine`.
pub mod basic;

/// The engine-generic, lock-guarded map.
pub use basic::mapx_raw::MapxRaw;

/// Commonly used items, re-exported for convenience.
pub use common::{
    EmptyValue, Engine, HashEngine, ListEngine, LockMode, RawSync, RawUnsync,
};
