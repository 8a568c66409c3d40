//! Callback result normalization.
//!
//! Callbacks handed to [`PendingOption`] combinators may answer synchronously
//! or asynchronously, and may succeed or fail. The traits in this module fold
//! all of those shapes into one: a [`PendingOption`] (for option-producing
//! callbacks) or a verdict (for predicates).
//!
//! | callback returns | becomes |
//! |------------------|---------|
//! | `Option<T>` | a settled `PendingOption<T>` |
//! | `PendingOption<T>` | itself |
//! | `SharedPendingOption<T>` | a copy of its shared settlement |
//! | `Result<Option<T>, E>` | settled on `Ok`, rejected on `Err` |
//!
//! Arbitrary futures are adapted with [`PendingOption::from_future`] or
//! [`PendingOption::from_fallible`].

use std::fmt::Display;

use super::PendingOption;
use super::shared::SharedPendingOption;
use crate::error::Rejection;

/// Conversion into a [`PendingOption`].
///
/// This is the bound on every callback result and every "other" argument of
/// the [`PendingOption`] combinators.
///
/// # Examples
///
/// ```rust
/// use pending_option::{IntoPendingOption, PendingOption};
///
/// # futures::executor::block_on(async {
/// assert_eq!(Some(1).into_pending_option().await, Some(1));
///
/// let failed: Result<Option<i32>, &str> = Err("unreachable host");
/// assert_eq!(failed.into_pending_option().await, None);
/// # });
/// ```
pub trait IntoPendingOption {
    /// The type of the value the resulting option may hold.
    type Value;

    /// Converts `self` into a [`PendingOption`].
    fn into_pending_option(self) -> PendingOption<Self::Value>;
}

impl<T: Send + 'static> IntoPendingOption for Option<T> {
    type Value = T;

    fn into_pending_option(self) -> PendingOption<T> {
        PendingOption::new(self)
    }
}

impl<T> IntoPendingOption for PendingOption<T> {
    type Value = T;

    #[inline]
    fn into_pending_option(self) -> Self {
        self
    }
}

impl<T, E> IntoPendingOption for Result<Option<T>, E>
where
    T: Send + 'static,
    E: Display,
{
    type Value = T;

    fn into_pending_option(self) -> PendingOption<T> {
        match self {
            Ok(option) => PendingOption::new(option),
            Err(error) => PendingOption::rejected(Rejection::failed(error)),
        }
    }
}

impl<T> IntoPendingOption for SharedPendingOption<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Value = T;

    fn into_pending_option(self) -> PendingOption<T> {
        self.to_pending()
    }
}

/// Conversion of a predicate's answer into a keep/drop decision.
///
/// Implemented for `bool` and for `Result<bool, E>`; an `Err` is a rejection
/// and drops the value like `false` does.
pub trait IntoVerdict {
    /// Converts `self` into a verdict, or the reason no verdict was reached.
    fn into_verdict(self) -> Result<bool, Rejection>;
}

impl IntoVerdict for bool {
    #[inline]
    fn into_verdict(self) -> Result<bool, Rejection> {
        Ok(self)
    }
}

impl<E: Display> IntoVerdict for Result<bool, E> {
    fn into_verdict(self) -> Result<bool, Rejection> {
        self.map_err(Rejection::failed)
    }
}
