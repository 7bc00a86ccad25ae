// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for `Completion` bridging behavior.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use futures::FutureExt;
use ladle_bridge::{Completion, Error};
use ohno::ErrorExt;

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

#[test]
fn bridged_failure_keeps_original_error_type() {
    let completion: Completion<String> = Completion::from_future(async {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing upstream");
        Err(Error::from_message(io))
    });

    let err = block_on(completion).expect_err("load fails");
    let io = err.find_source::<std::io::Error>().expect("io error reachable");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn dropping_a_completion_drops_the_host_future() {
    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    let dropped = Arc::new(AtomicBool::new(false));
    let flag = DropFlag(Arc::clone(&dropped));

    let completion: Completion<u32> = Completion::from_future(async move {
        let _flag = flag;
        futures::future::pending::<()>().await;
        Ok(0)
    });

    drop(completion);
    assert!(dropped.load(Ordering::SeqCst), "cancellation must pass through to the host future");
}

#[tokio::test]
async fn completes_exactly_when_the_host_future_completes() {
    let (tx, rx) = futures::channel::oneshot::channel::<u32>();
    let mut completion = Completion::from_future(async move { rx.await.map_err(|_| Error::from_message("sender dropped")) });

    // Still pending while the host side has not produced a value.
    assert!((&mut completion).now_or_never().is_none());

    tx.send(7).expect("receiver is alive");
    assert_eq!(completion.await.expect("value"), 7);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn completions_resolve_independently_across_tasks() {
    let mut handles = Vec::new();
    for n in 0_u32..16 {
        handles.push(tokio::spawn(async move {
            let completion = Completion::from_future(async move { Ok(n * 2) });
            completion.await.expect("value")
        }));
    }

    for (n, handle) in (0_u32..).zip(handles) {
        assert_eq!(handle.await.expect("task"), n * 2);
    }
}
