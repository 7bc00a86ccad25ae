// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Recording utilities for loader tests.
//!
//! Loader implementations are usually built around caller-supplied
//! functions, which makes "was the function called, with what, and how
//! often" the interesting thing to assert. [`CallLog`] is a thread-safe
//! recorder a test keeps one handle to while moving clones into the
//! functions under test.

use std::sync::Arc;

use parking_lot::Mutex;

/// A recorded loader invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderCall<K, V> {
    /// `load`/`async_load` ran with the given key.
    Load(K),
    /// `reload`/`async_reload` ran with the given key and previously cached value.
    Reload {
        /// The key being refreshed.
        key: K,
        /// The value that was cached before the refresh.
        old_value: V,
    },
}

/// A thread-safe log of loader invocations.
///
/// Cloning produces another handle to the same log.
///
/// # Examples
///
/// ```
/// use ladle_loader::testing::{CallLog, LoaderCall};
///
/// let log: CallLog<u32, u32> = CallLog::new();
/// let recorder = log.clone();
///
/// let load = move |key: &u32| {
///     recorder.record(LoaderCall::Load(*key));
///     key * 2
/// };
///
/// assert_eq!(load(&21), 42);
/// assert_eq!(log.calls(), vec![LoaderCall::Load(21)]);
/// ```
pub struct CallLog<K, V> {
    calls: Arc<Mutex<Vec<LoaderCall<K, V>>>>,
}

impl<K, V> std::fmt::Debug for CallLog<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallLog").field("len", &self.calls.lock().len()).finish()
    }
}

impl<K, V> Clone for CallLog<K, V> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<K, V> Default for CallLog<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CallLog<K, V> {
    /// Creates a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a call to the log.
    pub fn record(&self, call: LoaderCall<K, V>) {
        self.calls.lock().push(call);
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Clears all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<K, V> CallLog<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Returns a clone of all recorded calls, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<LoaderCall<K, V>> {
        self.calls.lock().clone()
    }
}
