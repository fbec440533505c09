use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error produced when a payload is demanded from an absent value.
///
/// Only [`Maybe::try_unwrap`] returns it; every other "no value" case is
/// represented structurally by [`Maybe::None`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("value is none")]
pub struct InvalidState;

/// cbindgen:derive-tagged-enum-destructor
#[repr(C, u8)]
#[derive(Debug, Eq, PartialEq)]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> From<std::option::Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            Some(val) => Maybe::Some(val),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for std::option::Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(val) => Some(val),
            Maybe::None => None,
        }
    }
}

impl<T> Maybe<T> {
    /////////////////////////////////////////////////////////////////////////
    // Construction and queries
    /////////////////////////////////////////////////////////////////////////

    /// Wraps `value` in the present variant.
    ///
    /// Any value is accepted, including another `Maybe`, so options nest.
    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The absent variant.
    #[inline]
    pub const fn none() -> Self {
        Maybe::None
    }

    /// Returns `true` if a payload is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).is_some(), true);
    /// assert_eq!(Maybe::<u32>::none().is_some(), false);
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(*self, Maybe::Some(_))
    }

    /// Returns `true` if no payload is present. Exactly complementary to
    /// [`is_some`](Maybe::is_some).
    #[must_use]
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`, leaving the original in
    /// place.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match *self {
            Maybe::Some(ref x) => Maybe::Some(x),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match *self {
            Maybe::Some(ref mut x) => Maybe::Some(x),
            Maybe::None => Maybe::None,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Extracting the payload
    /////////////////////////////////////////////////////////////////////////

    /// Moves the payload out, panicking with `value is none` when there is
    /// none. Callers are expected to have checked presence first or to use
    /// one of the non-failing accessors below.
    ///
    /// # Panics
    ///
    /// Panics if the value is [`Maybe::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use crust_maybe::Maybe;
    ///
    /// Maybe::<&str>::none().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(val) => val,
            Maybe::None => panic!("value is none"),
        }
    }

    /// Fallible counterpart of [`unwrap`](Maybe::unwrap) for callers that
    /// propagate with `?` instead of terminating.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, InvalidState> {
        match self {
            Maybe::Some(val) => Ok(val),
            Maybe::None => Err(InvalidState),
        }
    }

    /// Moves the payload out, or returns `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => default,
        }
    }

    /// Moves the payload out, or computes a fallback from `f`. The closure
    /// runs only on the absent branch.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => f(),
        }
    }

    /// Moves the payload out, or returns `T::default()` when absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => Default::default(),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Transforming the payload
    /////////////////////////////////////////////////////////////////////////

    /// Applies `f` to the payload, producing `Maybe<U>`. An absent value
    /// stays absent and `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// let greeting = Maybe::some(String::from("Hello"));
    /// assert_eq!(greeting.map(|s| s.len()), Maybe::some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(x) => Maybe::Some(f(x)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies `f` to the payload, or returns `default` when absent.
    /// `default` is evaluated at the call site either way; use
    /// [`map_or_else`](Maybe::map_or_else) when it is expensive.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(t) => f(t),
            Maybe::None => default,
        }
    }

    /// Applies `f` to the payload, or invokes the `default` thunk when
    /// absent. The thunk runs only on the absent branch.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(t) => f(t),
            Maybe::None => default(),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Combining two values, eager and lazy
    /////////////////////////////////////////////////////////////////////////

    /// Returns `other` if a payload is present (the payload itself is
    /// discarded, only presence matters), otherwise stays absent.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    /// Feeds the payload through `f`, which may itself report absence, so
    /// fallible steps chain without nested unwrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// let halve = |n: u32| {
    ///     if n % 2 == 0 {
    ///         Maybe::some(n / 2)
    ///     } else {
    ///         Maybe::none()
    ///     }
    /// };
    ///
    /// assert_eq!(Maybe::some(8).and_then(halve).and_then(halve), Maybe::some(2));
    /// assert_eq!(Maybe::some(7).and_then(halve).and_then(halve), Maybe::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(x) => f(x),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the payload when `predicate` accepts it, otherwise absent.
    /// The predicate is never invoked on an absent input.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Maybe::Some(x) = self {
            if predicate(&x) {
                return Maybe::Some(x);
            }
        }
        Maybe::None
    }

    /// Returns `self` if a payload is present, otherwise `other` (which
    /// may itself be absent).
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => other,
        }
    }

    /// Returns `self` if a payload is present, otherwise the result of
    /// `f`. The closure runs only on the absent branch.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => f(),
        }
    }

    /// Returns whichever side holds a payload when exactly one does.
    /// Two payloads count as absence, not an arbitrary pick.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).xor(Maybe::none()), Maybe::some(2));
    /// assert_eq!(Maybe::some(2).xor(Maybe::some(2)), Maybe::none());
    /// ```
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Maybe::Some(a), Maybe::None) => Maybe::Some(a),
            (Maybe::None, Maybe::Some(b)) => Maybe::Some(b),
            _ => Maybe::None,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Structural operations
    /////////////////////////////////////////////////////////////////////////

    /// Swaps the payload for `value`, discarding the old one. The
    /// replacement is only installed over an existing payload; an absent
    /// input stays absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).replace(5), Maybe::some(5));
    /// assert_eq!(Maybe::<u32>::none().replace(5), Maybe::none());
    /// ```
    #[inline]
    pub fn replace(self, value: T) -> Maybe<T> {
        match self {
            Maybe::Some(_) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Pairs two payloads, `self`'s first. Either side being absent makes
    /// the result absent.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Combines two payloads with `f` instead of pairing them.
    pub fn zip_with<U, F, R>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(f(a, b)),
            _ => Maybe::None,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Crossing the std boundary
    /////////////////////////////////////////////////////////////////////////

    /// Hops to the std representation.
    #[inline]
    pub fn into_std(self) -> std::option::Option<T> {
        self.into()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting: `Some(inner)` yields `inner`, absent
    /// stays absent. Deeper `Some(Some(..))` chains unwind by chaining
    /// calls, one level each.
    ///
    /// # Examples
    ///
    /// ```
    /// use crust_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(6)).flatten(), Maybe::some(6));
    /// assert_eq!(Maybe::some(Maybe::<u32>::none()).flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}

impl<T, U> Maybe<(T, U)> {
    /// Splits a paired payload into a pair of options; absence splits into
    /// absence on both sides.
    #[inline]
    pub fn unzip(self) -> (Maybe<T>, Maybe<U>) {
        match self {
            Maybe::Some((a, b)) => (Maybe::Some(a), Maybe::Some(b)),
            Maybe::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<T> Clone for Maybe<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Maybe::Some(x) => Maybe::Some(x.clone()),
            Maybe::None => Maybe::None,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Maybe::Some(to), Maybe::Some(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().into_std().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let r = std::option::Option::<T>::deserialize(deserializer)?;
        Ok(r.into())
    }
}
