//! The discriminant of an `Option`.

use std::fmt;

/// The variant tag of an `Option`, detached from its value.
///
/// `OptionKind` lets callers (and tests) ask which variant an option is in
/// without touching the stored value. It is also what
/// [`PendingOption::kind`](crate::pending::PendingOption::kind) settles to.
///
/// # Examples
///
/// ```rust
/// use pending_option::OptionKind;
///
/// assert_eq!(OptionKind::of(&Some(3)), OptionKind::Some);
/// assert_eq!(OptionKind::of(&None::<i32>), OptionKind::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// The option holds a value.
    Some,
    /// The option is empty.
    None,
}

impl OptionKind {
    /// Returns the variant tag of `option`.
    #[inline]
    pub const fn of<T>(option: &Option<T>) -> Self {
        match option {
            Some(_) => Self::Some,
            None => Self::None,
        }
    }

    /// Returns `true` for [`OptionKind::Some`].
    #[inline]
    pub const fn is_some(self) -> bool {
        matches!(self, Self::Some)
    }

    /// Returns `true` for [`OptionKind::None`].
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl<T> From<&Option<T>> for OptionKind {
    fn from(option: &Option<T>) -> Self {
        Self::of(option)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => write!(formatter, "Some"),
            Self::None => write!(formatter, "None"),
        }
    }
}
