//! Length of wrapped values.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values with a notion of length.
///
/// `length` returns `None` when a particular value has no length (a JSON
/// number, say). Strings count characters, not bytes.
pub trait Length {
    fn length(&self) -> Option<usize>;

    /// Short name used in error messages.
    fn kind(&self) -> &'static str { core::any::type_name::<Self>() }
}

impl Length for str {
    fn length(&self) -> Option<usize> { Some(self.chars().count()) }
    fn kind(&self) -> &'static str { "str" }
}

impl Length for String {
    fn length(&self) -> Option<usize> { self.as_str().length() }
    fn kind(&self) -> &'static str { "str" }
}

impl<T> Length for [T] {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> Option<usize> { Some(N) }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> Option<usize> { Some(self.len()) }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> Option<usize> { (**self).length() }
    fn kind(&self) -> &'static str { (**self).kind() }
}

impl<T: Length + ?Sized> Length for &mut T {
    fn length(&self) -> Option<usize> { (**self).length() }
    fn kind(&self) -> &'static str { (**self).kind() }
}

impl<T: Length + ?Sized> Length for Box<T> {
    fn length(&self) -> Option<usize> { (**self).length() }
    fn kind(&self) -> &'static str { (**self).kind() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_count_chars() {
        assert_eq!("héllo".length(), Some(5));
        assert_eq!(String::from("ab").length(), Some(2));
    }

    #[test]
    fn references_forward() {
        let v = vec![1, 2];
        assert_eq!((&v).length(), Some(2));
        assert_eq!(Box::new([0u8; 3]).length(), Some(3));
    }
}
