//! Settlement normalization.
//!
//! Every value that flows through a [`PendingOption`] is first reduced to a
//! [`Settlement`]: either a concrete `Option` or a [`Rejection`]. Rejections
//! are collapsed to `None` at the boundary of every combinator, so callers only
//! ever observe `Some` or `None`.
//!
//! Failures come from two places:
//!
//! - synchronous callbacks that panic, caught with [`std::panic::catch_unwind`]
//! - futures that panic while polled, caught with [`FutureExt::catch_unwind`]
//!
//! Error values (`Err(e)`) are turned into rejections by the conversion traits
//! in [`super::convert`].

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use super::PendingOption;
use super::convert::IntoPendingOption;
use crate::error::Rejection;

/// The outcome of driving a deferred computation to completion.
pub(crate) type Settlement<T> = Result<Option<T>, Rejection>;

/// Reduces a settlement to an `Option`, logging the rejection it discards.
pub(crate) fn collapse<T>(settlement: Settlement<T>) -> Option<T> {
    match settlement {
        Ok(option) => option,
        Err(Rejection::AlreadyConsumed) => {
            tracing::warn!("pending option polled after it settled; settling to None");
            None
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "pending option rejected; settling to None");
            None
        }
    }
}

/// Runs a synchronous callback, turning a panic into a [`Rejection`].
pub(crate) fn guard<F, R>(callback: F) -> Result<R, Rejection>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(callback))
        .map_err(|payload| Rejection::from_panic(&*payload))
}

/// Runs a callback whose result is normalized into a [`PendingOption`].
///
/// A panicking callback yields a rejected `PendingOption` instead of unwinding
/// into the caller.
pub(crate) fn invoke<F, R>(callback: F) -> PendingOption<R::Value>
where
    F: FnOnce() -> R,
    R: IntoPendingOption,
    R::Value: Send + 'static,
{
    match guard(callback) {
        Ok(next) => next.into_pending_option(),
        Err(rejection) => PendingOption::rejected(rejection),
    }
}

/// Drives `future`, turning a panic raised while polling into a [`Rejection`].
pub(crate) fn catch<F>(future: F) -> impl Future<Output = Result<F::Output, Rejection>>
where
    F: Future,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .map(|outcome| outcome.map_err(|payload| Rejection::from_panic(&*payload)))
}

/// Keeps `value` when the verdict is `true`, delegating to `Option::filter`.
pub(crate) fn retain<T>(value: T, verdict: Result<bool, Rejection>) -> Option<T> {
    match verdict {
        Ok(keep) => Some(value).filter(|_| keep),
        Err(rejection) => collapse(Err(rejection)),
    }
}
