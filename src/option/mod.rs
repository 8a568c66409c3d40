//! Synchronous `Option` support.
//!
//! The crate uses the standard library's `Option` and `Result` as its
//! synchronous collaborators. This module only adds [`OptionKind`], the
//! detached variant tag used for introspection.

mod kind;

pub use kind::OptionKind;
