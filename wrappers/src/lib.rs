#![doc = include_str!("../README.md")]
#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]

pub mod basic;
pub mod common;

pub use basic::{
    mapx::{
        IntAnyMap, IntIntMap, IntStrMap, Mapx, MapxView, StrAnyMap, StrIntMap, StrStrMap,
        UnsyncMapx,
    },
    mapx_list::{ListMap, MapxList, StrAnyListMap, UnsyncMapxList},
};

pub use common::ende::{EnDe, RawBytes};

/// The dynamically typed value used by the `*AnyMap` aliases.
pub use serde_json::Value;

pub use rwmap_core::{self, *};

/// Dependencies reached by the expansion of [`define_map_wrapper!`].
#[doc(hidden)]
pub mod __private {
    pub use log;
    pub use ruc;
    pub use serde;
    pub use serde_json;
}
