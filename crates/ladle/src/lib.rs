// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Adapters that let caller-supplied functions drive a cache engine's
//! loader contract.
//!
//! A cache engine asks for loaders shaped like [`CacheLoader`] and
//! [`AsyncCacheLoader`]; callers usually have plain functions instead: a
//! load function from key to value and, sometimes, a reload function from
//! key and cached value to replacement value. This crate carries the
//! translation and nothing else:
//!
//! - [`LoaderAdapter`] implements the synchronous contract over
//!   `Fn(&K) -> Result<V>` and an optional `Fn(&K, V) -> Result<V>`.
//! - [`AsyncLoaderAdapter`] implements the asynchronous contract over
//!   functions returning a [`LoadFuture`], bridging each host future into
//!   the engine-native [`Completion`].
//!
//! The adapters are stateless after construction, introduce no concurrency
//! of their own, and pass failures through unchanged. When the optional
//! reload function is absent, refreshes delegate to the contract's default
//! policy rather than restating it here.
//!
//! # Examples
//!
//! ## Synchronous loading
//!
//! ```
//! use ladle::{CacheLoader, LoaderAdapter};
//!
//! let adapter = LoaderAdapter::new(|key: &u32| Ok(key * 2));
//! assert_eq!(adapter.load(&21)?, 42);
//!
//! // Without a reload function, refreshes recompute via load.
//! assert_eq!(adapter.reload(&21, 99)?, 42);
//! # Ok::<(), ladle::Error>(())
//! ```
//!
//! ## Asynchronous loading
//!
//! ```
//! use anyspawn::Spawner;
//! use futures::FutureExt;
//! use ladle::{AsyncCacheLoader, AsyncLoaderAdapter};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ladle::Result<()> {
//! let spawner = Spawner::new_tokio();
//! let adapter = AsyncLoaderAdapter::new(|key: &u32| {
//!     let key = *key;
//!     async move { Ok(key.to_string()) }.boxed()
//! });
//!
//! let value = adapter.async_load(&5, &spawner).await?;
//! assert_eq!(value, "5");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `logs`: emit structured `tracing` events for adapter activity.

mod adapter;
mod async_adapter;
#[cfg(feature = "logs")]
mod telemetry;

#[doc(inline)]
pub use adapter::LoaderAdapter;
#[doc(inline)]
pub use async_adapter::{AsyncLoaderAdapter, LoadFuture};
#[doc(inline)]
pub use ladle_loader::{AsyncCacheLoader, CacheLoader, Completion, Error, Result, async_reload_via_load, reload_via_load};
