//!
//! # Empty values
//!
//! What `filter_empty` considers "empty": numeric zero, an empty string,
//! `false`, `None`, and containers without elements.
//!

use serde_json::Value;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// Values that have a distinguished "empty" state.
pub trait EmptyValue {
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_for_num {
    ($zero: expr, $($ty: ty),+) => {
        $(
            impl EmptyValue for $ty {
                #[inline(always)]
                fn is_empty_value(&self) -> bool {
                    $zero == *self
                }
            }
        )+
    };
}

impl_for_num!(0, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_for_num!(0.0, f32, f64);
impl_for_num!('\0', char);

impl EmptyValue for bool {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl EmptyValue for () {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        true
    }
}

impl EmptyValue for str {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyValue for String {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Only `None` is empty, `Some(0)` is not.
impl<T> EmptyValue for Option<T> {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

impl<T> EmptyValue for [T] {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_for_container {
    ($([$($gen: ident),+] $ty: ty),+ $(,)?) => {
        $(
            impl<$($gen),+> EmptyValue for $ty {
                #[inline(always)]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_for_container!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
);

impl<T: EmptyValue + ?Sized> EmptyValue for &T {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for Box<T> {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for Rc<T> {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for Arc<T> {
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// The dynamically typed value used by the "any" map aliases.
impl EmptyValue for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map(|n| 0.0 == n).unwrap_or(false),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }
}
