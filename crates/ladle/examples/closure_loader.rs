// Copyright (c) Microsoft Corporation.

//! Synchronous Loader Example
//!
//! Demonstrates driving a closure-backed loader the way a cache engine
//! would: load on a miss, reload on a refresh, with and without a
//! caller-supplied reload function.

use ladle::{CacheLoader, LoaderAdapter, Result};

fn main() -> Result<()> {
    // The engine calls `load` when a key is missing.
    let adapter = LoaderAdapter::new(|key: &u32| Ok(key * 2));
    let value = adapter.load(&21)?;
    println!("loaded: {value}");

    // Without a reload function, a refresh recomputes via load.
    let refreshed = adapter.reload(&21, value)?;
    println!("refreshed (default policy): {refreshed}");

    // With a reload function, a refresh can reuse the cached value.
    let adapter = adapter.with_reload(|_key: &u32, old_value| Ok(old_value + 1));
    let refreshed = adapter.reload(&21, 42)?;
    println!("refreshed (reload function): {refreshed}");

    Ok(())
}
