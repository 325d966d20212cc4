//! Optional value container
//!
//! Provides a two-state container for a value that may be absent, with
//! combinators for transforming it without explicit presence checks.

use thiserror::Error;

/// Error for accessing the value of an absent container.
///
/// Returned by [`Maybe::try_get`]; its message is also the panic payload of
/// [`Maybe::must_get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no such element")]
pub struct EmptyValueAccess;

/// A container for an optional value of type `T`.
///
/// A `Maybe` is in exactly one of two states: `Present`, owning one value,
/// or `Absent`, owning nothing. Every transformation consumes the receiver
/// and returns a new `Maybe` or a plain value; nothing mutates in place.
/// The container itself is a plain enum with no indirection, so it moves
/// and copies like any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    /// Builds a `Present` holding `value`.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Builds an `Absent`.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Builds a `Maybe` from a value and a presence flag: `Present(value)`
    /// when `ok` is true, `Absent` otherwise.
    pub fn from_pair(value: T, ok: bool) -> Self {
        if ok { Self::Present(value) } else { Self::Absent }
    }

    /// Returns true when a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true when no value is present.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Number of contained values: 1 when present, 0 when absent.
    ///
    /// Mirrors a single-element-or-empty collection, which keeps `Maybe`
    /// uniform with true collections in aggregation code.
    pub fn size(&self) -> usize {
        if self.is_present() { 1 } else { 0 }
    }

    /// Borrowing view of the same state, `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns the value, panicking with "no such element" when absent.
    ///
    /// This is the one operation on `Maybe` that can abort the caller.
    /// Callers that cannot prove presence should use [`Maybe::try_get`],
    /// [`Maybe::get`] or [`Maybe::or_else`] instead.
    pub fn must_get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", EmptyValueAccess),
        }
    }

    /// Returns the value, or [`EmptyValueAccess`] when absent.
    pub fn try_get(self) -> Result<T, EmptyValueAccess> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueAccess),
        }
    }

    /// Returns the value, or `fallback` unchanged when absent.
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Runs `on_value` with the value when present; absent is a no-op.
    ///
    /// The closure runs synchronously, at most once.
    pub fn for_each(self, on_value: impl FnOnce(T)) {
        if let Self::Present(value) = self {
            on_value(value);
        }
    }

    /// Runs `on_value` with the value when present, `on_none` when absent.
    ///
    /// Exactly one of the two closures runs, exactly once. Its `(value, ok)`
    /// result becomes the new `Maybe` by the [`Maybe::from_pair`] rule, so
    /// either branch can itself signal absence.
    pub fn match_with(
        self,
        on_value: impl FnOnce(T) -> (T, bool),
        on_none: impl FnOnce() -> (T, bool),
    ) -> Self {
        let (value, ok) = match self {
            Self::Present(value) => on_value(value),
            Self::Absent => on_none(),
        };
        Self::from_pair(value, ok)
    }

    /// Runs `mapper` on the value when present and converts its
    /// `(value, ok)` result by the [`Maybe::from_pair`] rule. Absent stays
    /// absent and `mapper` is never invoked.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> (U, bool)) -> Maybe<U> {
        match self {
            Self::Present(value) => {
                let (mapped, ok) = mapper(value);
                Maybe::from_pair(mapped, ok)
            }
            Self::Absent => Maybe::Absent,
        }
    }

    /// Runs `mapper` when absent and converts its `(value, ok)` result by
    /// the [`Maybe::from_pair`] rule. Present passes through unchanged and
    /// `mapper` is never invoked.
    pub fn map_none(self, mapper: impl FnOnce() -> (T, bool)) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => {
                let (value, ok) = mapper();
                Self::from_pair(value, ok)
            }
        }
    }

    /// Runs `mapper` on the value when present and returns its result with
    /// no extra wrapping. Absent stays absent and `mapper` is never
    /// invoked.
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Present(value) => mapper(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value and `true` when present, or `T::default()` and
    /// `false` when absent. Never fails.
    pub fn get(self) -> (T, bool) {
        match self {
            Self::Present(value) => (value, true),
            Self::Absent => (T::default(), false),
        }
    }

    /// Returns the value when present, or `T::default()` when absent.
    ///
    /// Cannot distinguish "was absent" from "was present and equal to the
    /// default"; callers who need that distinction should use
    /// [`Maybe::get`].
    pub fn or_empty(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T: Default + PartialEq> Maybe<T> {
    /// Builds a `Maybe` by treating `T`'s default as absence: `Absent` when
    /// `value == T::default()`, `Present(value)` otherwise.
    ///
    /// Lossy convenience: an explicit zero and a never-set value both come
    /// out `Absent`. Prefer [`Maybe::present`], [`Maybe::absent`] or
    /// [`Maybe::from_pair`] when a presence flag is available.
    pub fn from_zeroable(value: T) -> Self {
        if value == T::default() {
            Self::Absent
        } else {
            Self::Present(value)
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<(T, bool)> for Maybe<T> {
    fn from((value, ok): (T, bool)) -> Self {
        Self::from_pair(value, ok)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Iterates over one item when present, none when absent.
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
