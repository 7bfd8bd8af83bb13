//! The two-variant optional value and the operations every variant supports.

use core::fmt;

use crate::classify::IntoMaybe;
use crate::error::{Error, Result};
use crate::length::Length;
use crate::truthy::Truthy;

/// A value that is either present or absent.
///
/// `Absent` is declared first so the derived ordering puts it below every
/// `Present`; two present values compare by what they wrap.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Absent,
    Present(T),
}

impl<T> Maybe<T> {
    #[inline]
    pub const fn absent() -> Self { Maybe::Absent }

    /// Classify a raw value by its truthiness.
    pub fn from_truthy(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() { Maybe::Present(value) } else { Maybe::Absent }
    }

    #[inline]
    pub const fn is_present(&self) -> bool { matches!(self, Maybe::Present(_)) }

    #[inline]
    pub const fn is_absent(&self) -> bool { matches!(self, Maybe::Absent) }

    #[inline]
    pub const fn is_some(&self) -> bool { self.is_present() }

    #[inline]
    pub const fn is_none(&self) -> bool { self.is_absent() }

    /// A present value is always truthy, whatever the wrapped value would say.
    #[inline]
    pub const fn is_truthy(&self) -> bool { self.is_present() }

    /// Take the wrapped value, failing with [`Error::EmptyValue`] when absent.
    pub fn get_or_fail(self) -> Result<T> {
        match self {
            Maybe::Present(v) => Ok(v),
            Maybe::Absent => Err(Error::EmptyValue),
        }
    }

    /// Take the wrapped value or a literal fallback.
    pub fn get_or(self, default: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default,
        }
    }

    /// Take the wrapped value or produce a fallback. `f` only runs when absent.
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => f(),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Whether this is present and wraps something equal to `x`.
    pub fn contains<U>(&self, x: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Maybe::Present(v) => v == x,
            Maybe::Absent => false,
        }
    }

    /// Select a member of the wrapped value and classify it again.
    ///
    /// The selector may return a plain value, an `Option` or another `Maybe`;
    /// an absent receiver never calls it.
    ///
    /// ```
    /// use possibly::{maybe, Truthy};
    ///
    /// struct Person { name: String, phone: Option<String> }
    ///
    /// impl Truthy for Person {
    ///     fn is_truthy(&self) -> bool { true }
    /// }
    ///
    /// let p = Person { name: "eran".into(), phone: None };
    /// assert_eq!(maybe(&p).field(|p| p.name.as_str()).get_or_fail().unwrap(), "eran");
    /// assert_eq!(maybe(&p).field(|p| p.phone.as_deref()).get_or("no phone"), "no phone");
    /// ```
    pub fn field<F, R>(self, f: F) -> Maybe<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoMaybe,
    {
        match self {
            Maybe::Present(v) => f(v).into_maybe(),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// The wrapped value viewed as a one-element sequence.
    pub fn iter(&self) -> core::option::IntoIter<&T> { self.as_ref().into_option().into_iter() }

    /// Length of the wrapped value; zero when absent.
    pub fn len(&self) -> Result<usize>
    where
        T: Length,
    {
        match self {
            Maybe::Present(v) => v.length().ok_or(Error::Unsized { kind: v.kind() }),
            Maybe::Absent => Ok(0),
        }
    }
}

impl<T: Clone> Maybe<&T> {
    pub fn cloned(self) -> Maybe<T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v.clone()),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self { Maybe::Absent }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(m: Maybe<T>) -> Self { m.into_option() }
}

// Both representations delegate to the wrapped value; absence prints as `None`.

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => fmt::Debug::fmt(v, f),
            Maybe::Absent => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => fmt::Display::fmt(v, f),
            Maybe::Absent => f.write_str("None"),
        }
    }
}

impl<T: IntoIterator> IntoIterator for Maybe<T> {
    type Item = T::Item;
    type IntoIter = core::iter::Flatten<core::option::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter().flatten() }
}

impl<'a, T> IntoIterator for &'a Maybe<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = core::iter::Flatten<core::option::IntoIter<&'a T>>;

    fn into_iter(self) -> Self::IntoIter { self.as_ref().into_option().into_iter().flatten() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn absent_orders_below_present() {
        assert!(Maybe::<i32>::Absent < Maybe::Present(i32::MIN));
        assert!(Maybe::Present(2) > Maybe::Present(1));
        assert_eq!(Maybe::<u8>::Absent, Maybe::Absent);
        assert_eq!(
            [Maybe::Present(3), Maybe::Absent, Maybe::Present(1)].iter().max(),
            Some(&Maybe::Present(3))
        );
    }

    #[test]
    fn get_or_else_is_lazy_when_present() {
        let v = Maybe::Present(5).get_or_else(|| panic!("fallback evaluated"));
        assert_eq!(v, 5);
        assert_eq!(Maybe::Absent.get_or_else(|| 7), 7);
    }

    #[test]
    fn get_or_fail_reports_empty_value() {
        let err = Maybe::<String>::Absent.get_or_fail().unwrap_err();
        assert!(matches!(err, Error::EmptyValue));
        assert_eq!(err.to_string(), "No such element");
    }

    #[test]
    fn representation_delegates() {
        assert_eq!(format!("{}", Maybe::Present("x")), "x");
        assert_eq!(format!("{:?}", Maybe::Present("x")), "\"x\"");
        assert_eq!(format!("{}", Maybe::<u8>::Absent), "None");
        assert_eq!(format!("{:?}", Maybe::<u8>::Absent), "None");
    }

    #[test]
    fn present_is_truthy_even_for_falsy_payload() {
        let m = Maybe::Present(0);
        assert!(m.is_truthy());
        assert!(!Maybe::<i32>::Absent.is_truthy());
    }

    #[test]
    fn iteration_follows_wrapped_value() {
        let m = Maybe::Present(vec![1, 2, 3]);
        assert_eq!((&m).into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(m.iter().count(), 1);
        assert_eq!(m.into_iter().sum::<i32>(), 6);
        assert_eq!(Maybe::<Vec<i32>>::Absent.into_iter().count(), 0);
    }

    #[test]
    fn len_of_absent_is_zero() {
        assert_eq!(Maybe::<Vec<u8>>::Absent.len().unwrap(), 0);
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        assert_eq!(Maybe::Present(map).len().unwrap(), 1);
    }

    #[test]
    fn contains_compares_raw_values() {
        assert!(Maybe::Present(String::from("a")).contains("a"));
        assert!(!Maybe::<String>::Absent.contains("a"));
    }
}
