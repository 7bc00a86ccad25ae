// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Adapter from caller-supplied functions to the synchronous loader contract.

use std::{fmt::Debug, marker::PhantomData};

use ladle_loader::{CacheLoader, Result, reload_via_load};

#[cfg(feature = "logs")]
use crate::telemetry;

/// Adapter that lets plain functions implement [`CacheLoader`].
///
/// Wraps a load function `Fn(&K) -> Result<V>` and, optionally, a reload
/// function `Fn(&K, V) -> Result<V>`. Every call forwards to the wrapped
/// function and every result passes through untouched; the adapter holds no
/// state of its own, so it can be shared freely across the engine's
/// threads. When no reload function is supplied, refreshes delegate to the
/// contract's default policy.
///
/// # Examples
///
/// ```
/// use ladle::{CacheLoader, LoaderAdapter};
///
/// let adapter = LoaderAdapter::new(|key: &u32| Ok(key * 2));
/// assert_eq!(adapter.load(&21)?, 42);
///
/// // Without a reload function, refreshes recompute via load.
/// assert_eq!(adapter.reload(&21, 99)?, 42);
///
/// // With one, refreshes can take the cached value into account.
/// let adapter = LoaderAdapter::new(|key: &u32| Ok(key * 2)).with_reload(|_key: &u32, old_value| Ok(old_value + 1));
/// assert_eq!(adapter.reload(&21, 42)?, 43);
/// # Ok::<(), ladle::Error>(())
/// ```
pub struct LoaderAdapter<K, V, L, R = fn(&K, V) -> Result<V>> {
    load: L,
    reload: Option<R>,
    _phantom: PhantomData<(K, V)>,
}

impl<K, V, L> LoaderAdapter<K, V, L>
where
    L: Fn(&K) -> Result<V>,
{
    /// Creates an adapter that loads through `load` and refreshes through
    /// the contract's default policy.
    pub fn new(load: L) -> Self {
        Self {
            load,
            reload: None,
            _phantom: PhantomData,
        }
    }
}

impl<K, V, L, R> LoaderAdapter<K, V, L, R>
where
    L: Fn(&K) -> Result<V>,
    R: Fn(&K, V) -> Result<V>,
{
    /// Creates an adapter from a load function and an optional reload
    /// function.
    ///
    /// Whether a reload function participates is decided here, once; the
    /// adapter never probes for one at call time beyond branching on the
    /// stored option.
    pub fn from_parts(load: L, reload: Option<R>) -> Self {
        Self {
            load,
            reload,
            _phantom: PhantomData,
        }
    }
}

impl<K, V, L, R> LoaderAdapter<K, V, L, R> {
    /// Returns an adapter that refreshes through `reload` instead of the
    /// contract's default policy.
    #[must_use]
    pub fn with_reload<R2>(self, reload: R2) -> LoaderAdapter<K, V, L, R2>
    where
        R2: Fn(&K, V) -> Result<V>,
    {
        LoaderAdapter {
            load: self.load,
            reload: Some(reload),
            _phantom: PhantomData,
        }
    }
}

impl<K, V, L, R> Debug for LoaderAdapter<K, V, L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderAdapter")
            .field("reload", &self.reload.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, V, L, R> CacheLoader<K, V> for LoaderAdapter<K, V, L, R>
where
    K: Send + Sync,
    V: Send + Sync,
    L: Fn(&K) -> Result<V> + Send + Sync,
    R: Fn(&K, V) -> Result<V> + Send + Sync,
{
    fn load(&self, key: &K) -> Result<V> {
        let result = (self.load)(key);
        #[cfg(feature = "logs")]
        telemetry::outcome(telemetry::Operation::Load, &result);
        result
    }

    fn reload(&self, key: &K, old_value: V) -> Result<V> {
        match &self.reload {
            Some(reload) => {
                let result = reload(key, old_value);
                #[cfg(feature = "logs")]
                telemetry::outcome(telemetry::Operation::Reload, &result);
                result
            }
            None => {
                #[cfg(feature = "logs")]
                telemetry::fallback(telemetry::Operation::Reload);
                reload_via_load(self, key, old_value)
            }
        }
    }
}
