// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The asynchronous loader contract.

use anyspawn::Spawner;

use crate::Completion;

/// Computes values for an asynchronous cache engine.
///
/// The engine calls [`async_load`](Self::async_load) when a key is missing
/// and [`async_reload`](Self::async_reload) when an entry is due for a
/// refresh. Both return the engine-native [`Completion`], which must always
/// be produced and must eventually complete — successfully or with a
/// failure — so the engine can release its bookkeeping for the key.
///
/// The `spawner` argument is an execution-context hint supplied by the
/// engine. Implementations that run their work elsewhere (for example, on a
/// runtime the wrapped code already owns) may ignore it.
pub trait AsyncCacheLoader<K, V>: Send + Sync {
    /// Starts computing the value for a missing key.
    fn async_load(&self, key: &K, spawner: &Spawner) -> Completion<V>;

    /// Starts recomputing the value for a key that is already cached.
    ///
    /// The default discards `old_value` and recomputes via
    /// [`async_load`](Self::async_load); see [`async_reload_via_load`].
    fn async_reload(&self, key: &K, old_value: V, spawner: &Spawner) -> Completion<V> {
        async_reload_via_load(self, key, old_value, spawner)
    }
}

/// The contract's default asynchronous reload policy: discard the old value
/// and recompute via [`AsyncCacheLoader::async_load`], passing the engine's
/// spawner hint through unchanged.
///
/// The provided [`AsyncCacheLoader::async_reload`] delegates here, as should
/// implementations that override `async_reload` but still need the default
/// for some calls.
pub fn async_reload_via_load<K, V, L>(loader: &L, key: &K, old_value: V, spawner: &Spawner) -> Completion<V>
where
    L: AsyncCacheLoader<K, V> + ?Sized,
{
    drop(old_value);
    loader.async_load(key, spawner)
}

impl<K, V, L> AsyncCacheLoader<K, V> for Box<L>
where
    L: AsyncCacheLoader<K, V> + ?Sized,
{
    fn async_load(&self, key: &K, spawner: &Spawner) -> Completion<V> {
        (**self).async_load(key, spawner)
    }

    fn async_reload(&self, key: &K, old_value: V, spawner: &Spawner) -> Completion<V> {
        (**self).async_reload(key, old_value, spawner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Stringify {
        loads: AtomicUsize,
    }

    impl AsyncCacheLoader<u32, String> for Stringify {
        fn async_load(&self, key: &u32, _spawner: &Spawner) -> Completion<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Completion::ready(key.to_string())
        }
    }

    fn inert_spawner() -> Spawner {
        Spawner::new_custom("test", |_work| {})
    }

    #[test]
    fn provided_async_reload_recomputes_via_async_load() {
        let loader = Stringify {
            loads: AtomicUsize::new(0),
        };
        let spawner = inert_spawner();

        let value = futures::executor::block_on(loader.async_reload(&5, "stale".to_string(), &spawner)).expect("value");

        assert_eq!(value, "5");
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn boxed_loader_forwards_both_methods() {
        let boxed: Box<dyn AsyncCacheLoader<u32, String>> = Box::new(Stringify {
            loads: AtomicUsize::new(0),
        });
        let spawner = inert_spawner();

        let loaded = futures::executor::block_on(boxed.async_load(&1, &spawner)).expect("value");
        assert_eq!(loaded, "1");

        let reloaded = futures::executor::block_on(boxed.async_reload(&2, "stale".to_string(), &spawner)).expect("value");
        assert_eq!(reloaded, "2");
    }
}
