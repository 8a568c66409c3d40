//! Value-returning combinators.
//!
//! Each combinator consumes the source `PendingOption`, settles it (collapsing
//! a rejection to `None`), and then either short-circuits on `None` or runs the
//! callback / settles the `other` argument. The result is a new
//! `PendingOption` that never rejects.

use std::fmt::Display;
use std::future::Future;

use futures::{FutureExt, TryFutureExt};

use super::convert::{IntoPendingOption, IntoVerdict};
use super::settlement::{self, collapse, guard, invoke, retain};
use super::PendingOption;

impl<T: Send + 'static> PendingOption<T> {
    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Returns `other` if `self` settles to `Some`, otherwise `None`.
    ///
    /// `other` is not polled before `self` settles, and never polled at all
    /// when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(1).and(Some("b")).await, Some("b"));
    /// assert_eq!(PendingOption::<i32>::none().and(Some("b")).await, None);
    /// # });
    /// ```
    pub fn and<O>(self, other: O) -> PendingOption<O::Value>
    where
        O: IntoPendingOption,
        O::Value: Send + 'static,
    {
        let other = other.into_pending_option();
        PendingOption::chain(async move {
            match self.await {
                Some(_) => other.await,
                None => None,
            }
        })
    }

    /// Chains a computation that may itself be absent, deferred or failing.
    ///
    /// The callback runs at most once, only when `self` settles to `Some`. A
    /// panicking callback, an `Err` result or a rejected deferred result
    /// settles to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let result = PendingOption::some(11).and_then(|value| Some(value * 2));
    /// assert_eq!(result.await, Some(22));
    ///
    /// let failed = PendingOption::some(11).and_then(|_| Err::<Option<i32>, _>("no such key"));
    /// assert_eq!(failed.await, None);
    /// # });
    /// ```
    pub fn and_then<F, R>(self, callback: F) -> PendingOption<R::Value>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoPendingOption,
        R::Value: Send + 'static,
    {
        PendingOption::chain(async move {
            let Some(value) = self.await else {
                return None;
            };
            invoke(move || callback(value)).await
        })
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// The predicate may answer `bool` or `Result<bool, E>`; an `Err` or a
    /// panic drops the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(4).filter(|n| n % 2 == 0).await, Some(4));
    /// assert_eq!(PendingOption::some(3).filter(|n| n % 2 == 0).await, None);
    /// # });
    /// ```
    pub fn filter<P, V>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> V + Send + 'static,
        V: IntoVerdict,
    {
        Self::chain(async move {
            let Some(value) = self.await else {
                return None;
            };
            let verdict = guard(|| predicate(&value)).and_then(IntoVerdict::into_verdict);
            retain(value, verdict)
        })
    }

    /// Keeps the value only if the asynchronous `predicate` accepts it.
    ///
    /// The future returned by the predicate may not borrow the value; clone
    /// what it needs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let allowed = PendingOption::some("admin")
    ///     .filter_async(|name| {
    ///         let name = name.to_string();
    ///         async move { name == "admin" }
    ///     });
    /// assert_eq!(allowed.await, Some("admin"));
    /// # });
    /// ```
    pub fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoVerdict,
    {
        Self::chain(async move {
            let Some(value) = self.await else {
                return None;
            };
            let verdict = match guard(|| predicate(&value)) {
                Ok(pending) => settlement::catch(pending)
                    .await
                    .and_then(IntoVerdict::into_verdict),
                Err(rejection) => Err(rejection),
            };
            retain(value, verdict)
        })
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the value with a synchronous function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(1).map(|n| n + 1).await, Some(2));
    /// assert_eq!(PendingOption::<i32>::none().map(|n| n + 1).await, None);
    /// # });
    /// ```
    pub fn map<U, F>(self, callback: F) -> PendingOption<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        self.and_then(move |value| Some(callback(value)))
    }

    /// Transforms the value with an asynchronous function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let length = PendingOption::some("four").map_async(|text| async move { text.len() });
    /// assert_eq!(length.await, Some(4));
    /// # });
    /// ```
    pub fn map_async<U, F, Fut>(self, callback: F) -> PendingOption<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.and_then(move |value| PendingOption::from_future(callback(value).map(Some)))
    }

    /// Transforms the value with a fallible function; an `Err` settles to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some("12").try_map(|text| text.parse::<u8>()).await, Some(12));
    /// assert_eq!(PendingOption::some("x").try_map(|text| text.parse::<u8>()).await, None);
    /// # });
    /// ```
    pub fn try_map<U, E, F>(self, callback: F) -> PendingOption<U>
    where
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
        U: Send + 'static,
        E: Display,
    {
        self.and_then(move |value| callback(value).map(Some))
    }

    /// Transforms the value with a fallible asynchronous function; an `Err`
    /// settles to `None`.
    pub fn try_map_async<U, E, F, Fut>(self, callback: F) -> PendingOption<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Display,
    {
        self.and_then(move |value| PendingOption::from_fallible(callback(value).map_ok(Some)))
    }

    /// Calls `callback` with a reference to the value, passing it through.
    ///
    /// The returned `PendingOption` is lazy: the callback runs when it is
    /// awaited, not when `inspect` is called. A panicking callback settles to
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let inspected = PendingOption::some(5).inspect(|value| println!("got {value}"));
    /// assert_eq!(inspected.await, Some(5));
    /// # });
    /// ```
    pub fn inspect<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::chain(async move {
            let option = self.await;
            collapse(guard(move || option.inspect(callback)))
        })
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if it settles to `Some`, otherwise `other`.
    ///
    /// When `self` is `Some`, `other` is still settled first and a rejected
    /// `other` settles the result to `None`; this mirrors a promise chain that
    /// awaits both operands before choosing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(1).or(Some(2)).await, Some(1));
    /// assert_eq!(PendingOption::none().or(Some(2)).await, Some(2));
    ///
    /// let rejected: Result<Option<i32>, &str> = Err("backend down");
    /// assert_eq!(PendingOption::some(1).or(rejected).await, None);
    /// # });
    /// ```
    pub fn or<O>(self, other: O) -> Self
    where
        O: IntoPendingOption<Value = T>,
    {
        let other = other.into_pending_option();
        Self::chain(async move {
            match self.await {
                Some(value) => match other.settle().await {
                    Ok(alternative) => Some(value).or(alternative),
                    Err(rejection) => collapse(Err(rejection)),
                },
                None => other.await,
            }
        })
    }

    /// Returns `self` if it settles to `Some`, otherwise the result of
    /// `callback`.
    ///
    /// The callback is never invoked for a `Some`. Its result follows the same
    /// normalization as [`and_then`](Self::and_then).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let fallback = PendingOption::none().or_else(|| Some("cached"));
    /// assert_eq!(fallback.await, Some("cached"));
    /// # });
    /// ```
    pub fn or_else<F, R>(self, callback: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoPendingOption<Value = T>,
    {
        Self::chain(async move {
            match self.await {
                Some(value) => Some(value),
                None => invoke(callback).await,
            }
        })
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    ///
    /// A rejected `other` settles to `None`.
    pub fn xor<O>(self, other: O) -> Self
    where
        O: IntoPendingOption<Value = T>,
    {
        let other = other.into_pending_option();
        Self::chain(async move {
            let own = self.await;
            match other.settle().await {
                Ok(alternative) => own.xor(alternative),
                Err(rejection) => collapse(Err(rejection)),
            }
        })
    }

    /// Pairs the value with the value of `other`.
    ///
    /// `other` is never polled when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(1).zip(Some('a')).await, Some((1, 'a')));
    /// # });
    /// ```
    pub fn zip<O>(self, other: O) -> PendingOption<(T, O::Value)>
    where
        O: IntoPendingOption,
        O::Value: Send + 'static,
    {
        let other = other.into_pending_option();
        PendingOption::chain(async move {
            let Some(value) = self.await else {
                return None;
            };
            Some(value).zip(other.await)
        })
    }
}

impl<T> PendingOption<T>
where
    T: IntoPendingOption + Send + 'static,
    T::Value: Send + 'static,
{
    /// Removes one level of nesting.
    ///
    /// The inner value may be an `Option`, a `PendingOption`, or anything else
    /// that converts into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pending_option::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(PendingOption::some(Some(3)).flatten().await, Some(3));
    ///
    /// let nested = PendingOption::some(PendingOption::from_future(async { Some(4) }));
    /// assert_eq!(nested.flatten().await, Some(4));
    /// # });
    /// ```
    pub fn flatten(self) -> PendingOption<T::Value> {
        self.and_then(std::convert::identity)
    }
}
