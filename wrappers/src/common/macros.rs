/// Defines a typed map on top of `MapxRaw` with a given storage engine,
/// along with every operation that reads the same for all engines.
///
/// Variant-specific behavior (`map()`, serde, order-aware helpers) is left
/// to the module invoking the macro.
#[macro_export]
macro_rules! define_map_wrapper {
    (
        $(#[$struct_doc:meta])*
        $vis:vis struct $wrapper_name:ident {
            inner: $engine:ident,
        }
    ) => {
        $(#[$struct_doc])*
        $vis struct $wrapper_name<K, V, R = $crate::common::RawSync> {
            inner: $crate::MapxRaw<K, V, $engine<K, V>, R>,
        }

        impl<K, V, R> $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone,
            V: ::std::clone::Clone,
            R: $crate::common::LockMode,
        {
            #[inline(always)]
            pub fn new() -> Self {
                Self {
                    inner: $crate::MapxRaw::new(),
                }
            }

            #[inline(always)]
            pub fn with_capacity(cap: usize) -> Self {
                Self {
                    inner: $crate::MapxRaw::with_capacity(cap),
                }
            }

            /// Bulk-loads the entries of `data`, no factory is involved and
            /// nothing of `data` is aliased afterwards.
            #[inline(always)]
            pub fn from_map<I>(data: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
            {
                Self {
                    inner: $crate::MapxRaw::from_entries(data),
                }
            }

            /// `false` for maps built on `RawUnsync`.
            #[inline(always)]
            pub fn is_safe(&self) -> bool {
                self.inner.is_safe()
            }

            /// Returns a clone of the value, `None` if the key is absent.
            #[inline(always)]
            pub fn get(&self, key: &K) -> Option<V> {
                self.inner.get(key)
            }

            #[inline(always)]
            pub fn contains_key(&self, key: &K) -> bool {
                self.inner.contains_key(key)
            }

            #[inline(always)]
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            #[inline(always)]
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// Upserts a key-value pair.
            #[inline(always)]
            pub fn set(&self, key: K, value: V) {
                self.inner.set(key, value)
            }

            /// Upserts a batch of key-value pairs atomically.
            #[inline(always)]
            pub fn sets<I>(&self, entries: I)
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
            {
                self.inner.sets(entries)
            }

            /// Removes a key, returning its value if it was present.
            #[inline(always)]
            pub fn remove(&self, key: &K) -> Option<V> {
                self.inner.remove(key)
            }

            /// Removes a batch of keys atomically.
            #[inline(always)]
            pub fn removes<'a, I>(&self, keys: I)
            where
                I: ::std::iter::IntoIterator<Item = &'a K>,
                K: 'a,
            {
                self.inner.removes(keys)
            }

            #[inline(always)]
            pub fn pop(&self) -> Option<(K, V)> {
                self.inner.pop()
            }

            /// Removes up to `n` entries, all of them if `n` is 0.
            #[inline(always)]
            pub fn pops(&self, n: usize) -> Vec<(K, V)> {
                self.inner.pops(n)
            }

            /// A snapshot of the keys.
            #[inline(always)]
            pub fn keys(&self) -> Vec<K> {
                self.inner.keys()
            }

            /// A snapshot of the values, in the same order as [`Self::keys`]
            /// would return the keys.
            #[inline(always)]
            pub fn values(&self) -> Vec<V> {
                self.inner.values()
            }

            /// An independent copy of the content, never aliases the map.
            #[inline(always)]
            pub fn map_copy(&self) -> ::std::collections::HashMap<K, V> {
                self.inner.map_copy()
            }

            #[inline(always)]
            pub fn map_str_any(&self) -> ::std::collections::HashMap<String, V>
            where
                K: ::std::fmt::Display,
            {
                self.inner.map_str_any()
            }

            #[inline(always)]
            pub fn clear(&self) {
                self.inner.clear()
            }

            /// Swaps the whole content for `data`.
            #[inline(always)]
            pub fn replace<I>(&self, data: I)
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
            {
                self.inner.replace(data)
            }

            /// Visits the entries under the shared lock until `f` returns `false`.
            #[inline(always)]
            pub fn iterator<F>(&self, f: F)
            where
                F: FnMut(&K, &V) -> bool,
            {
                self.inner.iterator(f)
            }

            /// Runs `f` on the live storage under the exclusive lock.
            ///
            /// `f` must not call back into this map.
            #[inline(always)]
            pub fn lock_func<F, T>(&self, f: F) -> T
            where
                F: FnOnce(&mut $engine<K, V>) -> T,
            {
                self.inner.lock_func(f)
            }

            /// Runs `f` on the live storage under the shared lock.
            #[inline(always)]
            pub fn rlock_func<F, T>(&self, f: F) -> T
            where
                F: FnOnce(&$engine<K, V>) -> T,
            {
                self.inner.rlock_func(f)
            }

            #[inline(always)]
            pub fn get_or_set(&self, key: K, value: V) -> V {
                self.inner.get_or_set(key, value)
            }

            /// `f` runs unlocked and may use this map; racing callers may
            /// run it more than once.
            #[inline(always)]
            pub fn get_or_set_func<F>(&self, key: K, f: F) -> V
            where
                F: FnOnce() -> V,
            {
                self.inner.get_or_set_func(key, f)
            }

            /// `f` runs under the exclusive lock, at most once per absent key,
            /// and must not use this map.
            #[inline(always)]
            pub fn get_or_set_func_lock<F>(&self, key: K, f: F) -> V
            where
                F: FnOnce() -> V,
            {
                self.inner.get_or_set_func_lock(key, f)
            }

            #[inline(always)]
            pub fn set_if_not_exist(&self, key: K, value: V) -> bool {
                self.inner.set_if_not_exist(key, value)
            }

            #[inline(always)]
            pub fn set_if_not_exist_func<F>(&self, key: K, f: F) -> bool
            where
                F: FnOnce() -> V,
            {
                self.inner.set_if_not_exist_func(key, f)
            }

            #[inline(always)]
            pub fn set_if_not_exist_func_lock<F>(&self, key: K, f: F) -> bool
            where
                F: FnOnce() -> V,
            {
                self.inner.set_if_not_exist_func_lock(key, f)
            }

            /// Absorbs the entries of `other`, whose values win on equal keys.
            #[inline(always)]
            pub fn merge(&self, other: &Self) {
                self.inner.merge(&other.inner)
            }

            /// Swaps keys and values in place, equal values collapse into one entry.
            #[inline(always)]
            pub fn flip(&self)
            where
                K: ::std::convert::From<V>,
                V: ::std::convert::From<K>,
            {
                self.inner.flip()
            }

            /// Drops the entries holding zero, empty or `None` values.
            #[inline(always)]
            pub fn filter_empty(&self)
            where
                V: $crate::common::EmptyValue,
            {
                self.inner.filter_empty()
            }

            $crate::__with_serde_ende! {
                /// Decodes `bytes` and swaps the result in as the new content.
                ///
                /// Works on a freshly defaulted instance. On error the map is
                /// left untouched.
                pub fn decode_into(&self, bytes: &[u8]) -> $crate::__private::ruc::Result<()>
                where
                    Self: $crate::common::ende::EnDe,
                {
                    use $crate::__private::ruc::*;

                    let scratch = <Self as $crate::common::ende::EnDe>::decode(bytes)
                        .map_err(|e| {
                            $crate::__private::log::debug!(
                                "decode_into: rejected {} bytes",
                                bytes.len()
                            );
                            e
                        })
                        .c(d!())?;
                    let engine = scratch.inner.swap_engine(::std::default::Default::default());
                    self.inner.swap_engine(engine);
                    Ok(())
                }
            }
        }

        /// A deep copy, sharing no storage with the source.
        impl<K, V, R> ::std::clone::Clone for $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone,
            V: ::std::clone::Clone,
            R: $crate::common::LockMode,
        {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }
        }

        impl<K, V, R> ::std::default::Default for $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone,
            V: ::std::clone::Clone,
            R: $crate::common::LockMode,
        {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K, V, R> ::std::iter::FromIterator<(K, V)> for $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone,
            V: ::std::clone::Clone,
            R: $crate::common::LockMode,
        {
            fn from_iter<I: ::std::iter::IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self::from_map(iter)
            }
        }

        impl<K, V, R> ::std::convert::From<::std::collections::HashMap<K, V>>
            for $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone,
            V: ::std::clone::Clone,
            R: $crate::common::LockMode,
        {
            fn from(data: ::std::collections::HashMap<K, V>) -> Self {
                Self::from_map(data)
            }
        }

        impl<K, V, R> ::std::fmt::Debug for $wrapper_name<K, V, R>
        where
            K: ::std::cmp::Eq + ::std::hash::Hash + ::std::clone::Clone + ::std::fmt::Debug,
            V: ::std::fmt::Debug,
            R: $crate::common::LockMode,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.inner, f)
            }
        }

        $crate::__with_json_codec! {
            /// Renders the JSON form of the map.
            impl<K, V, R> ::std::fmt::Display for $wrapper_name<K, V, R>
            where
                Self: $crate::__private::serde::Serialize,
            {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    let s = $crate::__private::serde_json::to_string(self)
                        .map_err(|_| ::std::fmt::Error)?;
                    f.write_str(&s)
                }
            }
        }
    };
}

// Features are checked where the macros are defined, not where
// `define_map_wrapper!` is invoked.

#[doc(hidden)]
#[cfg(feature = "serde_ende")]
#[macro_export]
macro_rules! __with_serde_ende {
    ($($item:tt)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "serde_ende"))]
#[macro_export]
macro_rules! __with_serde_ende {
    ($($item:tt)*) => {};
}

#[doc(hidden)]
#[cfg(feature = "json_codec")]
#[macro_export]
macro_rules! __with_json_codec {
    ($($item:tt)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "json_codec"))]
#[macro_export]
macro_rules! __with_json_codec {
    ($($item:tt)*) => {};
}
