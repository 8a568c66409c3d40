//! Failure taxonomy for deferred computations.
//!
//! A [`Rejection`] describes why the computation behind a
//! [`PendingOption`](crate::pending::PendingOption) failed to produce an
//! `Option`. Rejections never leave the crate through a combinator: every one
//! of them is collapsed to `None` when it is settled. They are only observable
//! through the diagnostic hook
//! [`PendingOption::on_rejection`](crate::pending::PendingOption::on_rejection)
//! and the `tracing` events emitted on collapse.

use std::any::Any;
use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

/// Represents the reason a deferred computation did not settle to an `Option`.
///
/// # Examples
///
/// ```rust
/// use pending_option::Rejection;
///
/// let rejection = Rejection::failed("connection reset");
/// assert_eq!(format!("{rejection}"), "computation failed: connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The producer or a callback panicked.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The rendered panic payload.
        message: String,
    },
    /// The producer or a callback returned an error value.
    #[error("computation failed: {message}")]
    Failed {
        /// The rendered error.
        message: String,
    },
    /// The task driving the computation was cancelled before it finished.
    #[error("computation was cancelled")]
    Cancelled,
    /// The computation did not finish within its deadline.
    #[error("computation timed out after {duration:?}")]
    TimedOut {
        /// The deadline that was exceeded.
        duration: Duration,
    },
    /// The source was polled again after it had already settled.
    #[error("computation was already consumed")]
    AlreadyConsumed,
}

impl Rejection {
    /// Creates a [`Rejection::Failed`] from any displayable error.
    pub fn failed<E: Display>(error: E) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }

    /// Creates a [`Rejection::Panicked`] from a panic payload.
    ///
    /// Payloads raised with `panic!("...")` are `&'static str` or `String`;
    /// any other payload type is rendered as a placeholder.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Panicked { message }
    }

    /// Returns `true` if this rejection was caused by a panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}
