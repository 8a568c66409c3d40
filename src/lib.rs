//! # pending-option
//!
//! An asynchronous `Option` that always settles.
//!
//! ## Overview
//!
//! [`PendingOption<T>`] wraps a computation that will eventually produce an
//! `Option<T>` and lifts the `Option` combinator surface over it:
//!
//! - **Sequencing**: `and`, `and_then`, `flatten`, `zip`
//! - **Mapping**: `map`, `map_async`, `try_map`, `try_map_async`, `inspect`
//! - **Filtering**: `filter`, `filter_async`
//! - **Alternatives**: `or`, `or_else`, `xor`
//! - **Terminals**: `fold`, `ok_or`, `ok_or_else`, `unwrap_or`, `is_some`, ...
//! - **Sharing**: [`SharedPendingOption`] for one settlement observed many times
//!
//! A `PendingOption` never fails. Panics, `Err` results, cancelled tasks and
//! elapsed deadlines are all collapsed to `None`, so chains need no error
//! handling at each step.
//!
//! ## Feature Flags
//!
//! - `runtime` (default): tokio integration (`spawn`, `from_join_handle`, `timeout`)
//! - `serde`: `Serialize`/`Deserialize` for [`OptionKind`]
//!
//! ## Example
//!
//! ```rust
//! use pending_option::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let user_name = pending_option(Some(7))
//!     .and_then(|id| PendingOption::from_future(async move { Some(format!("user-{id}")) }))
//!     .filter(|name| name.starts_with("user"))
//!     .ok_or("unknown user")
//!     .await;
//!
//! assert_eq!(user_name, Ok("user-7".to_string()));
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use pending_option::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Rejection;
    pub use crate::option::OptionKind;
    pub use crate::pending::{
        IntoPendingOption, IntoVerdict, PendingOption, SharedPendingOption, pending_option,
    };
}

pub mod error;
pub mod option;
pub mod pending;

pub use error::Rejection;
pub use option::OptionKind;
pub use pending::{
    IntoPendingOption, IntoVerdict, PendingOption, SharedPendingOption, pending_option,
};
