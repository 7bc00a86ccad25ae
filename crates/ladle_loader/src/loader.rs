// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The synchronous loader contract.

use crate::Result;

/// Computes values for a synchronous cache engine.
///
/// The engine calls [`load`](Self::load) when a key is missing and
/// [`reload`](Self::reload) when an entry is due for a refresh. Both calls
/// happen on engine-managed threads, so implementations must be `Send` and
/// `Sync`; the engine guarantees at most one in-flight load per missing key.
///
/// Failures are reported through [`Result`] and interpreted by the engine
/// (which decides about negative caching, retaining a stale value, and so
/// on). Loaders must not swallow them.
pub trait CacheLoader<K, V>: Send + Sync {
    /// Computes the value for a missing key.
    fn load(&self, key: &K) -> Result<V>;

    /// Recomputes the value for a key that is already cached.
    ///
    /// The default discards `old_value` and recomputes via
    /// [`load`](Self::load); see [`reload_via_load`].
    fn reload(&self, key: &K, old_value: V) -> Result<V> {
        reload_via_load(self, key, old_value)
    }
}

/// The contract's default reload policy: discard the old value and
/// recompute via [`CacheLoader::load`].
///
/// The provided [`CacheLoader::reload`] delegates here. Implementations
/// that override `reload` but still need the default for some calls should
/// delegate here too instead of restating the policy.
pub fn reload_via_load<K, V, L>(loader: &L, key: &K, old_value: V) -> Result<V>
where
    L: CacheLoader<K, V> + ?Sized,
{
    drop(old_value);
    loader.load(key)
}

impl<K, V, L> CacheLoader<K, V> for Box<L>
where
    L: CacheLoader<K, V> + ?Sized,
{
    fn load(&self, key: &K) -> Result<V> {
        (**self).load(key)
    }

    fn reload(&self, key: &K, old_value: V) -> Result<V> {
        (**self).reload(key, old_value)
    }
}
