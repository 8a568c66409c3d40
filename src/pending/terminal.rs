//! Terminal combinators.
//!
//! These consume a `PendingOption` and produce a future of something other
//! than an option: a `Result`, a plain value or a flag. They settle the source
//! (collapsing a rejection to `None`) and then pass through to the
//! corresponding `Option` method. Branch callbacks are not guarded; a panic in
//! one propagates to the awaiting task.

use std::future::Future;

use super::PendingOption;
use super::settlement::{self, Settlement};
use crate::error::Rejection;
use crate::option::OptionKind;

impl<T: Send + 'static> PendingOption<T> {
    /// Settles and dispatches to `on_some` or `on_none`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let message = PendingOption::some(3)
    ///     .fold(|count| format!("{count} items"), || "empty".to_string())
    ///     .await;
    /// assert_eq!(message, "3 items");
    /// # });
    /// ```
    pub async fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.await {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Settles into `Ok(value)`, or `Err(error)` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(1).ok_or("missing").await, Ok(1));
    /// assert_eq!(PendingOption::<i32>::none().ok_or("missing").await, Err("missing"));
    /// # });
    /// ```
    pub async fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.await.ok_or(error)
    }

    /// Settles into `Ok(value)`, or `Err(callback())` for `None`.
    ///
    /// The callback is not invoked when the option is `Some`.
    pub async fn ok_or_else<E, F>(self, callback: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.await.ok_or_else(callback)
    }

    /// Settles into `Ok(value)`, or `Err` of the awaited `callback()` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let missing = PendingOption::<u32>::none()
    ///     .ok_or_else_async(|| async { "user not found".to_string() })
    ///     .await;
    /// assert_eq!(missing, Err("user not found".to_string()));
    /// # });
    /// ```
    pub async fn ok_or_else_async<E, F, Fut>(self, callback: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        match self.await {
            Some(value) => Ok(value),
            None => Err(callback().await),
        }
    }

    /// Settles and reports whether the option is `Some`.
    pub async fn is_some(self) -> bool {
        self.await.is_some()
    }

    /// Settles and reports whether the option is `None`.
    pub async fn is_none(self) -> bool {
        self.await.is_none()
    }

    /// Settles and returns the variant tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::{OptionKind, PendingOption};
    ///
    /// # futures::executor::block_on(async {
    /// let rejected = PendingOption::<i32>::from_fallible(async { Err("boom") });
    /// assert_eq!(rejected.kind().await, OptionKind::None);
    /// # });
    /// ```
    pub async fn kind(self) -> OptionKind {
        OptionKind::of(&self.await)
    }

    /// Settles and returns the value or `default`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Settles and returns the value or the result of `callback`.
    pub async fn unwrap_or_else<F>(self, callback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(callback)
    }

    /// Settles and returns the value or `T::default()`.
    pub async fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.await.unwrap_or_default()
    }

    /// Settles and applies `callback` to the value, or returns `default`.
    pub async fn map_or<U, F>(self, default: U, callback: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(default, callback)
    }

    /// Calls `hook` if the source rejects, before the rejection collapses.
    ///
    /// Only the source's own failure is observed: a failing producer, a
    /// cancelled task or an elapsed deadline. Callbacks of combinators applied
    /// earlier in the chain collapse their failures themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    /// use std::sync::{Arc, Mutex};
    ///
    /// # futures::executor::block_on(async {
    /// let seen = Arc::new(Mutex::new(None));
    /// let sink = seen.clone();
    /// let result = PendingOption::<i32>::from_fallible(async { Err("refused") })
    ///     .on_rejection(move |rejection| *sink.lock().unwrap() = Some(rejection.to_string()))
    ///     .await;
    ///
    /// assert_eq!(result, None);
    /// assert_eq!(seen.lock().unwrap().as_deref(), Some("computation failed: refused"));
    /// # });
    /// ```
    pub fn on_rejection<F>(self, hook: F) -> Self
    where
        F: FnOnce(&Rejection) + Send + 'static,
    {
        Self::from_settlement(async move {
            let outcome: Settlement<T> = self.settle().await;
            if let Err(rejection) = &outcome
                && settlement::guard(|| hook(rejection)).is_err()
            {
                tracing::debug!("rejection hook panicked");
            }
            outcome
        })
    }
}
