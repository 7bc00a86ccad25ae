// Copyright (c) Microsoft Corporation.

//! Asynchronous Loader Example
//!
//! Demonstrates bridging future-returning closures into the engine-native
//! completion type. The spawner is the engine's execution hint; the adapter
//! accepts it but the closures manage their own execution context.

use anyspawn::Spawner;
use futures::FutureExt;
use ladle::{AsyncCacheLoader, AsyncLoaderAdapter};

#[tokio::main]
async fn main() -> ladle::Result<()> {
    let spawner = Spawner::new_tokio();

    let adapter = AsyncLoaderAdapter::new(|key: &u32| {
        let key = *key;
        async move { Ok(key.to_string()) }.boxed()
    });

    // The engine awaits the completion for a missing key.
    let value = adapter.async_load(&5, &spawner).await?;
    println!("loaded: {value}");

    // Without a reload function, a refresh recomputes via async_load.
    let refreshed = adapter.async_reload(&5, value, &spawner).await?;
    println!("refreshed: {refreshed}");

    Ok(())
}
