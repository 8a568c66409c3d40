//! Tokio integration (feature `runtime`).
//!
//! - [`PendingOption::spawn`] drives the settlement on the ambient runtime
//! - [`PendingOption::from_join_handle`] adapts an already spawned task
//! - [`PendingOption::timeout`] bounds the settlement with a deadline
//!
//! Task cancellation, task panics and elapsed deadlines are rejections and
//! settle to `None` like any other failure. A missing runtime is not: `spawn`
//! and `timeout` fall back to settling in the awaiting task.

use std::pin::Pin;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, Either};
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Sleep;

use super::{PendingOption, settlement};
use crate::error::Rejection;

impl<T: Send + 'static> PendingOption<T> {
    /// Starts settling this `PendingOption` on the current tokio runtime.
    ///
    /// The work begins immediately rather than when the result is awaited.
    /// Outside a runtime the option is returned unchanged and settles lazily
    /// in the awaiting task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let spawned = PendingOption::from_future(async { Some(10) }).spawn();
    ///     assert_eq!(spawned.await, Some(10));
    /// }
    /// ```
    pub fn spawn(self) -> Self {
        match Handle::try_current() {
            Ok(handle) => {
                tracing::trace!("spawning pending option onto the current runtime");
                Self::from_join_handle(handle.spawn(self))
            }
            Err(error) => {
                tracing::trace!(%error, "no tokio runtime; pending option stays lazy");
                self
            }
        }
    }

    /// Adapts a tokio task that produces an `Option`.
    ///
    /// A cancelled or panicked task settles to `None`.
    pub fn from_join_handle(handle: JoinHandle<Option<T>>) -> Self {
        Self::from_settlement(handle.map(|joined| joined.map_err(rejection_from_join)))
    }

    /// Settles to `None` if this `PendingOption` has not settled within
    /// `duration`.
    ///
    /// The deadline needs a tokio runtime with the time driver enabled. Without
    /// one the deadline is not applied and the source settles unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    /// use std::time::Duration;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let never = PendingOption::<i32>::from_future(std::future::pending());
    ///     assert_eq!(never.timeout(Duration::from_millis(5)).await, None);
    /// }
    /// ```
    pub fn timeout(self, duration: Duration) -> Self {
        Self::from_settlement(async move {
            let Some(sleep) = arm_deadline(duration).await else {
                return self.settle().await;
            };
            match future::select(Box::pin(self.settle()), sleep).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => Err(Rejection::TimedOut { duration }),
            }
        })
    }
}

/// Creates and registers a tokio sleep, or `None` when no timer is available.
async fn arm_deadline(duration: Duration) -> Option<Pin<Box<Sleep>>> {
    if let Err(error) = Handle::try_current() {
        tracing::trace!(%error, "no tokio runtime; deadline not applied");
        return None;
    }

    // A missing time driver panics on creation or on first poll of the sleep.
    let armed = settlement::catch(async move {
        let mut sleep = Box::pin(tokio::time::sleep(duration));
        let _ = futures::poll!(sleep.as_mut());
        sleep
    })
    .await;

    match armed {
        Ok(sleep) => Some(sleep),
        Err(rejection) => {
            tracing::trace!(%rejection, "tokio timers disabled; deadline not applied");
            None
        }
    }
}

fn rejection_from_join(error: JoinError) -> Rejection {
    if error.is_panic() {
        Rejection::from_panic(&*error.into_panic())
    } else {
        Rejection::Cancelled
    }
}
