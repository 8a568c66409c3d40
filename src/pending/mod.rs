//! `PendingOption` - an asynchronous `Option` that always settles.
//!
//! A [`PendingOption<T>`] wraps a deferred computation that will eventually
//! produce an `Option<T>`. It exposes the combinator surface of `Option`
//! (`and_then`, `map`, `filter`, `or`, ...) lifted over the in-flight
//! computation, and it is itself a [`Future`] whose output is `Option<T>`.
//!
//! # Never Rejects
//!
//! A `PendingOption` has no failure channel. Whatever goes wrong while the
//! value is being produced or chained, whether a panicking callback, an `Err`
//! returned by a fallible producer, a cancelled task or an elapsed deadline,
//! collapses deterministically to `None`:
//!
//! ```rust
//! use pending_option::PendingOption;
//!
//! # futures::executor::block_on(async {
//! let source = PendingOption::<i32>::from_fallible(async { Err("connection reset") });
//! assert_eq!(source.await, None);
//!
//! let chained = PendingOption::some(1).map(|_: i32| -> i32 { panic!("bug") });
//! assert_eq!(chained.await, None);
//! # });
//! ```
//!
//! # Uniform Callbacks
//!
//! Option-producing callbacks may return an `Option`, a `PendingOption`, a
//! `SharedPendingOption` or a `Result<Option<_>, _>`; see
//! [`IntoPendingOption`]. Value-producing callbacks come in `map` /
//! `map_async` / `try_map` / `try_map_async` flavours.
//!
//! ```rust
//! use pending_option::{PendingOption, pending_option};
//!
//! # futures::executor::block_on(async {
//! let doubled = pending_option(Some(11)).and_then(|value| Some(value * 2));
//! assert_eq!(doubled.await, Some(22));
//!
//! let fetched = pending_option(Some(3))
//!     .and_then(|id| PendingOption::from_future(async move { Some(id * 100) }));
//! assert_eq!(fetched.await, Some(300));
//! # });
//! ```
//!
//! # Laziness and Short-Circuiting
//!
//! Combinators build a new `PendingOption` without running anything. The
//! callbacks run when the result is awaited, and a `None` never invokes a
//! callback nor polls an `other` argument.

mod combinators;
mod convert;
#[cfg(feature = "runtime")]
mod runtime;
mod settlement;
mod shared;
mod terminal;

pub use convert::{IntoPendingOption, IntoVerdict};
pub use shared::SharedPendingOption;

use std::fmt;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use crate::error::Rejection;
use settlement::Settlement;

// =============================================================================
// PendingOption Struct Definition
// =============================================================================

pin_project! {
    /// An asynchronous `Option` that always settles to `Some` or `None`.
    ///
    /// # Type Parameters
    ///
    /// - `T`: The type of the value the settled option may hold.
    ///
    /// # impl `Future`
    ///
    /// `PendingOption<T>` implements `Future<Output = Option<T>>`:
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(42).await, Some(42));
    /// # });
    /// ```
    ///
    /// # Monad Laws
    ///
    /// 1. **Left Identity**: `PendingOption::some(a).and_then(f) == f(a)`
    /// 2. **Right Identity**: `m.and_then(Some) == m`
    /// 3. **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
    #[must_use = "pending options do nothing unless you `.await` or poll them"]
    pub struct PendingOption<T> {
        #[pin]
        state: PendingState<T>,
    }
}

pin_project! {
    /// Internal state machine for `PendingOption`.
    ///
    /// - `Deferred` -> `Settled { settlement: None }` once the future completes
    /// - `Settled { settlement: Some(_) }` -> `Settled { settlement: None }` on first poll
    #[project = PendingStateProj]
    enum PendingState<T> {
        /// A settlement that is already known.
        Settled {
            settlement: Option<Settlement<T>>,
        },
        /// A deferred computation that has not completed yet.
        Deferred {
            #[pin]
            future: BoxFuture<'static, Settlement<T>>,
        },
    }
}

static_assertions::assert_impl_all!(PendingOption<String>: Send, Unpin, Future);

// =============================================================================
// Future Implementation
// =============================================================================

impl<T> Future for PendingOption<T> {
    type Output = Option<T>;

    /// Polls the deferred computation and collapses its settlement.
    ///
    /// Polling again after the option settled yields `None`. To observe one
    /// settlement more than once, use [`PendingOption::share`].
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let outcome = match this.state.as_mut().project() {
            PendingStateProj::Settled { settlement } => settlement
                .take()
                .unwrap_or(Err(Rejection::AlreadyConsumed)),
            PendingStateProj::Deferred { future } => match future.poll(context) {
                Poll::Ready(outcome) => outcome,
                Poll::Pending => return Poll::Pending,
            },
        };

        this.state.set(PendingState::Settled { settlement: None });
        Poll::Ready(settlement::collapse(outcome))
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static> PendingOption<T> {
    /// Creates a `PendingOption` that is already settled to `option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::new(Some(1)).await, Some(1));
    /// assert_eq!(PendingOption::<i32>::new(None).await, None);
    /// # });
    /// ```
    pub fn new(option: Option<T>) -> Self {
        Self::from_state(PendingState::Settled {
            settlement: Some(Ok(option)),
        })
    }

    /// Creates a `PendingOption` settled to `Some(value)`.
    pub fn some(value: T) -> Self {
        Self::new(Some(value))
    }

    /// Creates a `PendingOption` settled to `None`.
    pub fn none() -> Self {
        Self::new(None)
    }

    /// Wraps a future that produces an `Option`.
    ///
    /// The future is not polled until the `PendingOption` is. If polling it
    /// panics, the `PendingOption` settles to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let pending = PendingOption::from_future(async { Some("ready") });
    /// assert_eq!(pending.await, Some("ready"));
    /// # });
    /// ```
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self::from_settlement(future.map(Ok))
    }

    /// Wraps a future that may fail while producing an `Option`.
    ///
    /// An `Err` output is a rejection: the `PendingOption` settles to `None`
    /// and the error is logged at `debug` level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let found = PendingOption::from_fallible(async { Ok::<_, String>(Some(5)) });
    /// assert_eq!(found.await, Some(5));
    ///
    /// let failed = PendingOption::<i32>::from_fallible(async { Err("timeout") });
    /// assert_eq!(failed.await, None);
    /// # });
    /// ```
    pub fn from_fallible<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<Option<T>, E>> + Send + 'static,
        E: Display,
    {
        Self::from_settlement(future.map(|outcome| outcome.map_err(Rejection::failed)))
    }

    /// Creates a `PendingOption` from a thunk that runs on first poll.
    ///
    /// The thunk may return anything that converts into a `PendingOption`.
    /// A panicking thunk settles to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let pending = PendingOption::defer(|| Some(7));
    /// assert_eq!(pending.await, Some(7));
    /// # });
    /// ```
    pub fn defer<F, R>(thunk: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoPendingOption<Value = T>,
    {
        Self::from_settlement(async move { settlement::invoke(thunk).settle().await })
    }

    /// Creates a `PendingOption` that has already been rejected.
    pub(crate) fn rejected(rejection: Rejection) -> Self {
        Self::from_state(PendingState::Settled {
            settlement: Some(Err(rejection)),
        })
    }

    /// Wraps a future producing a raw settlement; panics become rejections.
    pub(crate) fn from_settlement<F>(future: F) -> Self
    where
        F: Future<Output = Settlement<T>> + Send + 'static,
    {
        let future = settlement::catch(future).map(|outcome| outcome.and_then(|settled| settled));
        Self::from_state(PendingState::Deferred {
            future: future.boxed(),
        })
    }

    /// Wraps a combinator body. Combinators collapse their own failures, so
    /// the result of a chain never rejects.
    pub(crate) fn chain<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self::from_settlement(future.map(Ok))
    }

    /// Drives the computation and returns its raw settlement.
    pub(crate) async fn settle(self) -> Settlement<T> {
        match self.state {
            PendingState::Settled { settlement } => {
                settlement.unwrap_or(Err(Rejection::AlreadyConsumed))
            }
            PendingState::Deferred { future } => future.await,
        }
    }
}

impl<T> PendingOption<T> {
    const fn from_state(state: PendingState<T>) -> Self {
        Self { state }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Send + 'static> From<Option<T>> for PendingOption<T> {
    fn from(option: Option<T>) -> Self {
        Self::new(option)
    }
}

impl<T: Send + 'static> Default for PendingOption<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for PendingOption<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            PendingState::Settled {
                settlement: Some(_),
            } => "Settled",
            PendingState::Settled { settlement: None } => "Consumed",
            PendingState::Deferred { .. } => "Deferred",
        };
        formatter
            .debug_struct("PendingOption")
            .field("state", &state)
            .finish()
    }
}

/// Converts any [`IntoPendingOption`] source into a [`PendingOption`].
///
/// # Examples
///
/// ```rust
/// use pending_option::pending_option;
///
/// # futures::executor::block_on(async {
/// assert_eq!(pending_option(Some(5)).ok_or_else(|| "e").await, Ok(5));
/// assert_eq!(pending_option(None::<i32>).ok_or_else(|| "e").await, Err("e"));
/// # });
/// ```
pub fn pending_option<S: IntoPendingOption>(source: S) -> PendingOption<S::Value> {
    source.into_pending_option()
}
