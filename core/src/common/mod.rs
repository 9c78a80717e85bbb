//!
//! # Common components
//!

pub mod empty;
pub mod engines;
pub mod lock;

pub use empty::EmptyValue;
pub use engines::{Engine, HashEngine, ListEngine};
pub use lock::{LockMode, RawSync, RawUnsync, RwLock, RwLockReadGuard, RwLockWriteGuard};
