//!
//! # Lock discipline
//!
//! Every map owns exactly one reader/writer lock. The raw lock is a type
//! parameter of the map, so choosing between real locking and no locking
//! at all happens once, when the map type is named:
//!
//! - [`RawSync`] (`parking_lot::RawRwLock`) for maps shared between threads,
//! - [`RawUnsync`] for maps that never leave the thread that created them.
//!

use parking_lot::lock_api::{GuardNoSend, RawRwLock};
use std::cell::Cell;

/// The thread-safe raw lock, used by default.
pub use parking_lot::RawRwLock as RawSync;

pub type RwLock<R, T> = parking_lot::lock_api::RwLock<R, T>;
pub type RwLockReadGuard<'a, R, T> = parking_lot::lock_api::RwLockReadGuard<'a, R, T>;
pub type RwLockWriteGuard<'a, R, T> = parking_lot::lock_api::RwLockWriteGuard<'a, R, T>;

/// A raw lock usable as the lock of a map.
pub trait LockMode: RawRwLock {
    /// `true` if concurrent callers are really serialized by this lock.
    const SAFE: bool;
}

impl LockMode for RawSync {
    const SAFE: bool = true;
}

impl LockMode for RawUnsync {
    const SAFE: bool = false;
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

const UNUSED: usize = 0;
const WRITING: usize = usize::MAX;

/// A borrow tracker standing in for a lock.
///
/// It is `!Sync`, so a map built on it can not be shared between threads,
/// and taking it costs a couple of plain memory accesses.
///
/// A conflicting acquisition panics instead of blocking: with only one thread
/// around, nobody could ever release the lock.
///
/// A map keeps its storage behind an `Arc` so that aliasing views can share
/// it, which makes a map on this lock `!Send` too. It has to be created on
/// the thread that uses it:
///
/// ```compile_fail
/// use rwmap_core::{HashEngine, MapxRaw, RawUnsync};
///
/// let m: MapxRaw<u8, u8, HashEngine<u8, u8>, RawUnsync> = MapxRaw::new();
/// std::thread::spawn(move || m.len());
/// ```
///
/// ```
/// use rwmap_core::{HashEngine, MapxRaw, RawUnsync};
///
/// let n = std::thread::spawn(|| {
///     let m: MapxRaw<u8, u8, HashEngine<u8, u8>, RawUnsync> = MapxRaw::new();
///     m.set(1, 1);
///     m.len()
/// });
/// assert_eq!(n.join().unwrap(), 1);
/// ```
pub struct RawUnsync {
    state: Cell<usize>,
}

unsafe impl RawRwLock for RawUnsync {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self {
        state: Cell::new(UNUSED),
    };

    type GuardMarker = GuardNoSend;

    fn lock_shared(&self) {
        if !self.try_lock_shared() {
            panic!("map is already exclusively locked on this thread");
        }
    }

    #[inline(always)]
    fn try_lock_shared(&self) -> bool {
        let n = self.state.get();
        // `WRITING - 1` readers would make the next one look like a writer
        if n >= WRITING - 1 {
            return false;
        }
        self.state.set(n + 1);
        true
    }

    #[inline(always)]
    unsafe fn unlock_shared(&self) {
        self.state.set(self.state.get() - 1);
    }

    fn lock_exclusive(&self) {
        if !self.try_lock_exclusive() {
            panic!("map is already locked on this thread");
        }
    }

    #[inline(always)]
    fn try_lock_exclusive(&self) -> bool {
        if UNUSED != self.state.get() {
            return false;
        }
        self.state.set(WRITING);
        true
    }

    #[inline(always)]
    unsafe fn unlock_exclusive(&self) {
        self.state.set(UNUSED);
    }
}
