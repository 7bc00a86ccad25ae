// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The engine-native completion future and host-future bridging.

use std::{
    fmt::Debug,
    panic::{AssertUnwindSafe, catch_unwind},
    pin::Pin,
    task::{Context, Poll},
};

use futures::{FutureExt, future::BoxFuture};

use crate::{Error, Result};

pin_project_lite::pin_project! {
    /// The completion future a cache engine awaits for a load or reload.
    ///
    /// A `Completion` always finishes, either with the loaded value or with
    /// an [`Error`]. Failures are reported exclusively through the output:
    /// a panic raised by the bridged work is captured and converted into a
    /// failed completion instead of unwinding into the engine, which depends
    /// on the future completing to release its bookkeeping for the key.
    ///
    /// Dropping a `Completion` drops the bridged host future, so
    /// cancellation passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle_bridge::Completion;
    /// # futures::executor::block_on(async {
    ///
    /// let completion = Completion::ready(42);
    /// assert_eq!(completion.await?, 42);
    /// # Ok::<(), ladle_bridge::Error>(())
    /// # });
    /// ```
    pub struct Completion<V> {
        state: State<V>,
    }
}

enum State<V> {
    /// The outcome is already known; taken on first poll.
    Ready(Option<Result<V>>),
    /// A bridged host future still producing the outcome.
    Running(BoxFuture<'static, Result<V>>),
}

impl<V> Completion<V> {
    /// Creates a completion that immediately resolves with `value`.
    #[must_use]
    pub fn ready(value: V) -> Self {
        Self {
            state: State::Ready(Some(Ok(value))),
        }
    }

    /// Creates a completion that immediately resolves with `error`.
    #[must_use]
    pub fn failed(error: Error) -> Self {
        Self {
            state: State::Ready(Some(Err(error))),
        }
    }

    /// Bridges a host future into a completion.
    ///
    /// The completion resolves when `future` resolves, with the same value
    /// or error. Bridging registers nothing and blocks on nothing; the host
    /// future is simply wrapped and driven by whoever polls the completion.
    /// A panic raised while polling the host future resolves the completion
    /// with an error carrying the panic message.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle_bridge::Completion;
    /// # futures::executor::block_on(async {
    ///
    /// let completion = Completion::from_future(async { Ok("loaded".to_string()) });
    /// assert_eq!(completion.await?, "loaded");
    /// # Ok::<(), ladle_bridge::Error>(())
    /// # });
    /// ```
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<V>> + Send + 'static,
    {
        Self {
            state: State::Running(future.boxed()),
        }
    }

    /// Invokes a future-producing function and bridges its result.
    ///
    /// The engine's asynchronous contract expects failures encoded in the
    /// returned future, not raised on the call path. `capture` enforces
    /// that: a panic raised by `f` itself, before any future exists, yields
    /// an already-failed completion instead of unwinding into the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::future::Ready;
    ///
    /// use ladle_bridge::{Completion, Result};
    /// # futures::executor::block_on(async {
    ///
    /// let completion: Completion<u32> =
    ///     Completion::capture(|| -> Ready<Result<u32>> { panic!("refused to produce a future") });
    /// assert!(completion.await.is_err());
    /// # });
    /// ```
    pub fn capture<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(future) => Self::from_future(future),
            Err(payload) => Self::failed(Error::from_panic(payload)),
        }
    }
}

impl<V> Future for Completion<V> {
    type Output = Result<V>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.state {
            State::Ready(outcome) => Poll::Ready(outcome.take().expect("Completion polled after completion")),
            State::Running(future) => match catch_unwind(AssertUnwindSafe(|| future.as_mut().poll(cx))) {
                Ok(poll) => poll,
                Err(payload) => {
                    // The bridged future is poisoned; never poll it again.
                    *this.state = State::Ready(None);
                    Poll::Ready(Err(Error::from_panic(payload)))
                }
            },
        }
    }
}

impl<V> Debug for Completion<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Ready(_) => "ready",
            State::Running(_) => "running",
        };
        f.debug_struct("Completion").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: Future>(f: F) -> F::Output {
        futures::executor::block_on(f)
    }

    #[test]
    fn ready_resolves_with_value() {
        let completion = Completion::ready(42);
        assert_eq!(block_on(completion).expect("value"), 42);
    }

    #[test]
    fn failed_resolves_with_error() {
        let completion: Completion<u32> = Completion::failed(Error::from_message("nope"));
        let err = block_on(completion).expect_err("error");
        assert!(format!("{err}").contains("nope"));
    }

    #[test]
    fn from_future_passes_value_through() {
        let completion = Completion::from_future(async { Ok("value".to_string()) });
        assert_eq!(block_on(completion).expect("value"), "value");
    }

    #[test]
    fn from_future_passes_error_through() {
        let completion: Completion<u32> = Completion::from_future(async { Err(Error::from_message("load failed")) });
        let err = block_on(completion).expect_err("error");
        assert!(format!("{err}").contains("load failed"));
    }

    #[test]
    fn from_future_does_not_poll_eagerly() {
        let completion: Completion<u32> = Completion::from_future(futures::future::pending());
        assert!(completion.now_or_never().is_none());
    }

    #[test]
    fn capture_converts_construction_panic() {
        let completion: Completion<u32> =
            Completion::capture(|| -> std::future::Ready<Result<u32>> { panic!("no future for you") });
        let err = block_on(completion).expect_err("error");
        assert!(format!("{err}").contains("no future for you"));
    }

    #[test]
    fn poll_panic_becomes_failed_outcome() {
        async fn explode() -> Result<u32> {
            panic!("mid-poll")
        }

        let completion = Completion::from_future(explode());
        let err = block_on(completion).expect_err("error");
        assert!(format!("{err}").contains("mid-poll"));
    }

    #[test]
    fn debug_names_the_state() {
        let ready = Completion::ready(1);
        assert!(format!("{ready:?}").contains("ready"));

        let running: Completion<u32> = Completion::from_future(futures::future::pending());
        assert!(format!("{running:?}").contains("running"));
    }
}
