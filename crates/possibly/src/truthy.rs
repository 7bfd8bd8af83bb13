//! Truthiness table used by the smart constructor to tell empty values apart.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Values that can be classified as present (truthy) or empty (falsy).
///
/// Falsy means: zero, `false`, the empty string, an empty collection, or `()`.
/// Implement this for custom types to let [`maybe`](crate::maybe) classify them.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    #[inline]
    fn is_falsy(&self) -> bool { !self.is_truthy() }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool { *self }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool { false }
}

// A char is a one-character string, never empty.
impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool { true }
}

macro_rules! truthy_int {
    ($($t:ty),* $(,)?) => {
        $(impl Truthy for $t {
            #[inline]
            fn is_truthy(&self) -> bool { *self != 0 }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! truthy_float {
    ($($t:ty),* $(,)?) => {
        $(impl Truthy for $t {
            // NaN != 0.0, so NaN is truthy.
            #[inline]
            fn is_truthy(&self) -> bool { *self != 0.0 }
        })*
    };
}

truthy_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl Truthy for Cow<'_, str> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool { N != 0 }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

// Pointer-like wrappers are as truthy as what they point to.

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    #[inline]
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
