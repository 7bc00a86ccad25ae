// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Adapter from caller-supplied functions to the asynchronous loader contract.

use std::{fmt::Debug, marker::PhantomData};

use anyspawn::Spawner;
use futures::future::BoxFuture;
use ladle_loader::{AsyncCacheLoader, Completion, Result, async_reload_via_load};

#[cfg(feature = "logs")]
use crate::telemetry;

/// Future returned by a caller-supplied asynchronous load or reload
/// function.
///
/// Host functions build whatever future their own code produces; boxing it
/// is the one concession the adapter asks for so the function's type can be
/// named. [`futures::FutureExt::boxed`] does the conversion.
pub type LoadFuture<V> = BoxFuture<'static, Result<V>>;

/// Adapter that lets future-returning functions implement
/// [`AsyncCacheLoader`].
///
/// Wraps a load function `Fn(&K) -> LoadFuture<V>` and, optionally, a
/// reload function `Fn(&K, V) -> LoadFuture<V>`. Each call invokes the
/// wrapped function and bridges its host future into the engine-native
/// [`Completion`], preserving the value, the failure, and the timing of the
/// original. The engine's spawner hint is accepted to satisfy the contract
/// but not forwarded: the wrapped function manages its own execution
/// context.
///
/// A function that panics before returning its future still yields a failed
/// `Completion` — the asynchronous contract reports failures through the
/// returned future, never on the call path.
///
/// # Examples
///
/// ```
/// use anyspawn::Spawner;
/// use futures::FutureExt;
/// use ladle::{AsyncCacheLoader, AsyncLoaderAdapter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> ladle::Result<()> {
/// let spawner = Spawner::new_tokio();
/// let adapter = AsyncLoaderAdapter::new(|key: &u32| {
///     let key = *key;
///     async move { Ok(key.to_string()) }.boxed()
/// });
///
/// assert_eq!(adapter.async_load(&5, &spawner).await?, "5");
///
/// // Without a reload function, refreshes recompute via async_load.
/// assert_eq!(adapter.async_reload(&7, "stale".to_string(), &spawner).await?, "7");
/// # Ok(())
/// # }
/// ```
pub struct AsyncLoaderAdapter<K, V, L, R = fn(&K, V) -> LoadFuture<V>> {
    load: L,
    reload: Option<R>,
    _phantom: PhantomData<(K, V)>,
}

impl<K, V, L> AsyncLoaderAdapter<K, V, L>
where
    L: Fn(&K) -> LoadFuture<V>,
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

impl<K, V, L, R> AsyncLoaderAdapter<K, V, L, R>
where
    L: Fn(&K) -> LoadFuture<V>,
    R: Fn(&K, V) -> LoadFuture<V>,
{
    /// Creates an adapter from a load function and an optional reload
    /// function.
    pub fn from_parts(load: L, reload: Option<R>) -> Self {
        Self {
            load,
            reload,
            _phantom: PhantomData,
        }
    }
}

impl<K, V, L, R> AsyncLoaderAdapter<K, V, L, R> {
    /// Returns an adapter that refreshes through `reload` instead of the
    /// contract's default policy.
    #[must_use]
    pub fn with_reload<R2>(self, reload: R2) -> AsyncLoaderAdapter<K, V, L, R2>
    where
        R2: Fn(&K, V) -> LoadFuture<V>,
    {
        AsyncLoaderAdapter {
            load: self.load,
            reload: Some(reload),
            _phantom: PhantomData,
        }
    }
}

impl<K, V, L, R> Debug for AsyncLoaderAdapter<K, V, L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncLoaderAdapter")
            .field("reload", &self.reload.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, V, L, R> AsyncCacheLoader<K, V> for AsyncLoaderAdapter<K, V, L, R>
where
    K: Send + Sync,
    V: Send + Sync + 'static,
    L: Fn(&K) -> LoadFuture<V> + Send + Sync,
    R: Fn(&K, V) -> LoadFuture<V> + Send + Sync,
{
    fn async_load(&self, key: &K, spawner: &Spawner) -> Completion<V> {
        // The wrapped function manages its own execution context.
        let _ = spawner;
        #[cfg(feature = "logs")]
        telemetry::invoked(telemetry::Operation::AsyncLoad);
        Completion::capture(|| (self.load)(key))
    }

    fn async_reload(&self, key: &K, old_value: V, spawner: &Spawner) -> Completion<V> {
        match &self.reload {
            Some(reload) => {
                #[cfg(feature = "logs")]
                telemetry::invoked(telemetry::Operation::AsyncReload);
                Completion::capture(|| reload(key, old_value))
            }
            None => {
                #[cfg(feature = "logs")]
                telemetry::fallback(telemetry::Operation::AsyncReload);
                async_reload_via_load(self, key, old_value, spawner)
            }
        }
    }
}
