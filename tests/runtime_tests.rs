#![cfg(feature = "runtime")]
//! Tests for the tokio integration of `PendingOption`.
//!
//! Test coverage:
//! - spawn: eager execution on the runtime, panics and cancellation
//! - from_join_handle: adapting spawned tasks
//! - timeout: deadlines that elapse and deadlines that don't

use pending_option::{OptionKind, PendingOption, Rejection};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[rstest]
#[tokio::test]
async fn spawn_runs_before_await() {
    let started = Arc::new(AtomicBool::new(false));
    let flag = started.clone();
    let spawned = PendingOption::from_future(async move {
        flag.store(true, Ordering::SeqCst);
        Some(1)
    })
    .spawn();

    tokio::task::yield_now().await;
    assert!(started.load(Ordering::SeqCst));
    assert_eq!(spawned.await, Some(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn spawned_chain_settles_on_worker_threads() {
    let result = PendingOption::some(20)
        .map_async(|n| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            n + 1
        })
        .spawn()
        .and_then(|n| Some(n * 2))
        .await;

    assert_eq!(result, Some(42));
}

#[rstest]
#[tokio::test]
async fn panicking_task_settles_none() {
    let handle = tokio::spawn(async {
        tokio::task::yield_now().await;
        if true {
            panic!("task exploded");
        }
        Some(1)
    });

    let pending = PendingOption::from_join_handle(handle);
    assert_eq!(pending.kind().await, OptionKind::None);
}

#[rstest]
#[tokio::test]
async fn aborted_task_reports_cancellation() {
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let handle = tokio::spawn(std::future::pending::<Option<i32>>());
    handle.abort();

    let result = PendingOption::from_join_handle(handle)
        .on_rejection(move |rejection| *sink.lock().unwrap() = Some(rejection.clone()))
        .await;

    assert_eq!(result, None);
    assert_eq!(*seen.lock().unwrap(), Some(Rejection::Cancelled));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn timeout_elapses_to_none() {
    let never = PendingOption::<i32>::from_future(std::future::pending());
    assert_eq!(never.timeout(Duration::from_secs(30)).await, None);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn timeout_keeps_fast_settlement() {
    let fast = PendingOption::from_future(async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Some("fast")
    });
    assert_eq!(fast.timeout(Duration::from_secs(1)).await, Some("fast"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn timeout_then_fallback() {
    let result = PendingOption::<&str>::from_future(std::future::pending())
        .timeout(Duration::from_millis(100))
        .or_else(|| Some("fallback"))
        .await;
    assert_eq!(result, Some("fallback"));
}

#[rstest]
fn timeout_outside_runtime_keeps_settlement() {
    let bounded = PendingOption::some(1).timeout(Duration::from_secs(60));
    assert_eq!(futures::executor::block_on(bounded), Some(1));
}

#[rstest]
fn timeout_outside_runtime_keeps_deferred_settlement() {
    let bounded =
        PendingOption::from_future(async { Some("late") }).timeout(Duration::from_millis(1));
    assert_eq!(futures::executor::block_on(bounded), Some("late"));
}

#[rstest]
fn timeout_without_time_driver_keeps_settlement() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let bounded = PendingOption::some(1).timeout(Duration::from_secs(60));
    assert_eq!(runtime.block_on(bounded), Some(1));
}
