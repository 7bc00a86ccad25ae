// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Completion futures for cache loader contracts.
//!
//! A cache engine that drives an asynchronous loader needs a completion type
//! it can rely on: a future that is always returned, always finishes, and
//! reports every failure through its output rather than by unwinding into
//! the engine. Caller-supplied load functions, on the other hand, produce
//! whatever future their own code happens to build. This crate bridges the
//! two worlds:
//!
//! - [`Completion`] is the engine-native future. It resolves to
//!   [`Result<V>`] and is guaranteed to complete, even when the bridged
//!   work panics.
//! - [`Completion::from_future`] and [`Completion::capture`] convert a host
//!   future (or a future-producing closure) into a `Completion`, preserving
//!   the value, the failure, and the timing of the original. The conversion
//!   wraps; it never blocks and never polls eagerly.
//!
//! # Examples
//!
//! ```
//! use ladle_bridge::Completion;
//! # futures::executor::block_on(async {
//!
//! let completion = Completion::from_future(async { Ok(21 * 2) });
//! assert_eq!(completion.await?, 42);
//! # Ok::<(), ladle_bridge::Error>(())
//! # });
//! ```

mod completion;
pub mod error;

#[doc(inline)]
pub use completion::Completion;
#[doc(inline)]
pub use error::{Error, Result};
