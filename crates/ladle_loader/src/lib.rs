// Copyright (c) Microsoft Corporation.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The loader contract cache engines drive to populate entries.
//!
//! This crate defines the two capability sets a cache engine calls into when
//! a key is missing or due for a refresh: [`CacheLoader`] for synchronous
//! engines and [`AsyncCacheLoader`] for asynchronous ones. The engine owns
//! everything else — storage, eviction, expiration, statistics — and treats
//! a loader purely as the producer of values.
//!
//! Both traits ship a provided `reload`: the contract's documented default
//! is to discard the old value and recompute via `load`. The default policy
//! is defined once, in [`reload_via_load`] and [`async_reload_via_load`], so
//! implementations that override `reload` can still delegate to it.
//!
//! # Implementing a Loader
//!
//! ```
//! use ladle_loader::{CacheLoader, Result};
//!
//! struct Doubler;
//!
//! impl CacheLoader<u32, u32> for Doubler {
//!     fn load(&self, key: &u32) -> Result<u32> {
//!         Ok(key * 2)
//!     }
//! }
//!
//! let loader = Doubler;
//! assert_eq!(loader.load(&21)?, 42);
//! // The provided reload recomputes via load.
//! assert_eq!(loader.reload(&21, 99)?, 42);
//! # Ok::<(), ladle_loader::Error>(())
//! ```

mod async_loader;
mod loader;
#[cfg(any(feature = "test-util", test))]
pub mod testing;

#[doc(inline)]
pub use async_loader::{AsyncCacheLoader, async_reload_via_load};
#[doc(inline)]
pub use ladle_bridge::{Completion, Error, Result};
#[doc(inline)]
pub use loader::{CacheLoader, reload_via_load};
