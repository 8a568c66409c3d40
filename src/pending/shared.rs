//! `SharedPendingOption` - one settlement, many readers.
//!
//! A `PendingOption` is a future and is consumed when awaited. To observe the
//! same settlement from several places, convert it with
//! [`PendingOption::share`]. The source is driven at most once; every handle
//! (and every [`to_pending`](SharedPendingOption::to_pending) copy) receives
//! its own `Option` produced by `Option::clone`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::Shared;

use super::PendingOption;

/// A cloneable handle over the single settlement of a [`PendingOption`].
///
/// # Examples
///
/// ```rust
/// use pending_option::PendingOption;
///
/// # futures::executor::block_on(async {
/// let shared = PendingOption::from_future(async { Some(vec![1, 2, 3]) }).share();
/// let first = shared.to_pending().map(|values| values.len());
/// let second = shared.clone();
///
/// assert_eq!(first.await, Some(3));
/// assert_eq!(second.await, Some(vec![1, 2, 3]));
/// # });
/// ```
#[must_use = "pending options do nothing unless you `.await` or poll them"]
pub struct SharedPendingOption<T> {
    inner: Shared<PendingOption<T>>,
}

static_assertions::assert_impl_all!(SharedPendingOption<String>: Send, Sync, Clone, Unpin);

impl<T: Send + 'static> PendingOption<T> {
    /// Converts this `PendingOption` into a cloneable, shared handle.
    pub fn share(self) -> SharedPendingOption<T>
    where
        T: Clone,
    {
        SharedPendingOption {
            inner: FutureExt::shared(self),
        }
    }
}

impl<T> SharedPendingOption<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Returns a new `PendingOption` that settles to a copy of the shared
    /// settlement.
    ///
    /// The source is not re-run: if it has already settled, the copy is made
    /// from the stored option.
    pub fn to_pending(&self) -> PendingOption<T> {
        PendingOption::from_future(self.inner.clone())
    }

    /// Returns the settled option without polling, or `None` while the
    /// source is still pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let shared = PendingOption::some(9).share();
    /// assert_eq!(shared.peek(), None);
    ///
    /// assert_eq!(shared.clone().await, Some(9));
    /// assert_eq!(shared.peek(), Some(Some(9)));
    /// # });
    /// ```
    pub fn peek(&self) -> Option<Option<T>> {
        self.inner.peek().cloned()
    }

    /// Returns `true` once the source has settled.
    pub fn is_settled(&self) -> bool {
        self.inner.peek().is_some()
    }
}

impl<T> Clone for SharedPendingOption<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> Future for SharedPendingOption<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl<T> fmt::Debug for SharedPendingOption<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SharedPendingOption")
            .finish_non_exhaustive()
    }
}
