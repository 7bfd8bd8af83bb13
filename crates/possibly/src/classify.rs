//! Smart constructor: the single path that turns raw values into [`Maybe`].

use crate::maybe::Maybe;
use crate::truthy::Truthy;

/// Conversion into a classified [`Maybe`].
///
/// - a `Maybe` passes through unchanged;
/// - `None` is absent and `Some(v)` classifies `v`;
/// - any other [`Truthy`] value is present iff it is truthy.
pub trait IntoMaybe {
    type Value;

    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T: Truthy> IntoMaybe for T {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> { Maybe::from_truthy(self) }
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> { self }
}

impl<T: IntoMaybe> IntoMaybe for Option<T> {
    type Value = T::Value;

    #[inline]
    fn into_maybe(self) -> Maybe<T::Value> {
        match self {
            Some(v) => v.into_maybe(),
            None => Maybe::Absent,
        }
    }
}

/// Wrap `value` in a [`Maybe`], classifying it by truthiness.
///
/// ```
/// use possibly::{maybe, Maybe};
///
/// assert!(maybe("I'm a value").is_some());
/// assert!(maybe("").is_none());
/// assert!(maybe(None::<i32>).is_none());
/// assert_eq!(maybe(maybe(3)), maybe(3));
/// assert_eq!(maybe(Some(Maybe::Present(1))), Maybe::Present(1));
/// ```
#[inline]
pub fn maybe<V: IntoMaybe>(value: V) -> Maybe<V::Value> { value.into_maybe() }
