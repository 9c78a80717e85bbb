//!
//! Typed maps built on `MapxRaw`.
//!
//! - [`mapx::Mapx`]: hash storage, unspecified order, [`mapx::Mapx::map`] aliases the storage
//! - [`mapx_list::MapxList`]: linked storage, insertion order
//!

pub mod mapx;
pub mod mapx_list;
