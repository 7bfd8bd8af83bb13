//! Indexed access: get-with-null-default reads and forwarding writes.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::classify::IntoMaybe;
use crate::error::{Error, Result};
use crate::maybe::Maybe;

/// Key-based read that yields `None` for a missing key instead of failing.
///
/// Implemented on references so the output can borrow from the container
/// for as long as the container lives, not just for the current call.
pub trait Lookup<K> {
    type Output;

    fn lookup(self, key: K) -> Option<Self::Output>;
}

impl<'a, 'q, K, V, Q, S> Lookup<&'q Q> for &'a HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = &'a V;

    fn lookup(self, key: &'q Q) -> Option<&'a V> { self.get(key) }
}

impl<'a, 'q, K, V, Q> Lookup<&'q Q> for &'a BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = &'a V;

    fn lookup(self, key: &'q Q) -> Option<&'a V> { self.get(key) }
}

impl<'a, T> Lookup<usize> for &'a [T] {
    type Output = &'a T;

    fn lookup(self, index: usize) -> Option<&'a T> { self.get(index) }
}

impl<'a, T, const N: usize> Lookup<usize> for &'a [T; N] {
    type Output = &'a T;

    fn lookup(self, index: usize) -> Option<&'a T> { self.get(index) }
}

impl<'a, T> Lookup<usize> for &'a Vec<T> {
    type Output = &'a T;

    fn lookup(self, index: usize) -> Option<&'a T> { self.get(index) }
}

impl<'a, T> Lookup<usize> for &'a VecDeque<T> {
    type Output = &'a T;

    fn lookup(self, index: usize) -> Option<&'a T> { self.get(index) }
}

// Reading through a borrowed borrow keeps the inner lifetime, which is what
// lets `m.get(a).get(b)` outlive the intermediate `Maybe`.
impl<'a, 'b, T: ?Sized, K> Lookup<K> for &'a &'b T
where
    &'b T: Lookup<K>,
{
    type Output = <&'b T as Lookup<K>>::Output;

    fn lookup(self, key: K) -> Option<Self::Output> { (*self).lookup(key) }
}

impl<'a, 'b, T: ?Sized, K> Lookup<K> for &'a &'b mut T
where
    &'a T: Lookup<K>,
{
    type Output = <&'a T as Lookup<K>>::Output;

    fn lookup(self, key: K) -> Option<Self::Output> { (&**self).lookup(key) }
}

impl<'a, T: ?Sized, K> Lookup<K> for &'a Box<T>
where
    &'a T: Lookup<K>,
{
    type Output = <&'a T as Lookup<K>>::Output;

    fn lookup(self, key: K) -> Option<Self::Output> { (&**self).lookup(key) }
}

/// Key-based writes. Unlike [`Lookup`], failures are reported.
pub trait Entries<K> {
    type Item;

    /// Assign `value` at `key`.
    fn put(&mut self, key: K, value: Self::Item) -> Result<()>;

    /// Delete the entry at `key`; a missing key is an error.
    fn delete(&mut self, key: K) -> Result<()>;
}

impl<K, V, S> Entries<K> for HashMap<K, V, S>
where
    K: Hash + Eq + Debug,
    S: BuildHasher,
{
    type Item = V;

    fn put(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: K) -> Result<()> {
        match self.remove(&key) {
            Some(_) => Ok(()),
            None => Err(Error::KeyNotFound { key: format!("{:?}", key) }),
        }
    }
}

impl<K, V> Entries<K> for BTreeMap<K, V>
where
    K: Ord + Debug,
{
    type Item = V;

    fn put(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: K) -> Result<()> {
        match self.remove(&key) {
            Some(_) => Ok(()),
            None => Err(Error::KeyNotFound { key: format!("{:?}", key) }),
        }
    }
}

impl<T> Entries<usize> for Vec<T> {
    type Item = T;

    fn put(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange { index, len: self.len() });
        }
        self.remove(index);
        Ok(())
    }
}

impl<T> Entries<usize> for VecDeque<T> {
    type Item = T;

    fn put(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        self.remove(index).map(drop).ok_or(Error::IndexOutOfRange { index, len })
    }
}

impl<T: Entries<K> + ?Sized, K> Entries<K> for &mut T {
    type Item = T::Item;

    fn put(&mut self, key: K, value: T::Item) -> Result<()> { (**self).put(key, value) }

    fn delete(&mut self, key: K) -> Result<()> { (**self).delete(key) }
}

impl<T: Entries<K> + ?Sized, K> Entries<K> for Box<T> {
    type Item = T::Item;

    fn put(&mut self, key: K, value: T::Item) -> Result<()> { (**self).put(key, value) }

    fn delete(&mut self, key: K) -> Result<()> { (**self).delete(key) }
}

impl<T> Maybe<T> {
    /// Look `key` up in the wrapped container and classify the result.
    ///
    /// A missing key, or an absent receiver, yields `Absent`.
    pub fn get<'a, K, O>(&'a self, key: K) -> Maybe<O::Value>
    where
        &'a T: Lookup<K, Output = O>,
        O: IntoMaybe,
    {
        match self {
            Maybe::Present(v) => Lookup::lookup(v, key).into_maybe(),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Assign into the wrapped container. A no-op when absent.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        T: Entries<K>,
        V: Into<T::Item>,
    {
        match self {
            Maybe::Present(v) => v.put(key, value.into()),
            Maybe::Absent => {
                tracing::trace!("ignoring item assignment on absent value");
                Ok(())
            }
        }
    }

    /// Delete from the wrapped container. A no-op when absent.
    pub fn remove<K>(&mut self, key: K) -> Result<()>
    where
        T: Entries<K>,
    {
        match self {
            Maybe::Present(v) => v.delete(key),
            Maybe::Absent => {
                tracing::trace!("ignoring item deletion on absent value");
                Ok(())
            }
        }
    }
}
