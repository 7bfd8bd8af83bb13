//! `serde_json::Value` as the dynamic host value.
//!
//! JSON documents are the natural target for read-chains: nested objects and
//! arrays where any level may be missing, `null`, or empty.

use serde_json::{map, Value};

use crate::error::{Error, Result};
use crate::length::Length;
use crate::lookup::{Entries, Lookup};
use crate::maybe::Maybe;
use crate::truthy::Truthy;

/// Name of a value's JSON type, for error messages.
pub fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}

impl Length for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => s.as_str().length(),
            Value::Array(a) => Some(a.len()),
            Value::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str { kind_of(self) }
}

impl<'a, 'q> Lookup<&'q str> for &'a Value {
    type Output = &'a Value;

    fn lookup(self, key: &'q str) -> Option<&'a Value> {
        match self {
            Value::Object(o) => o.get(key),
            _ => None,
        }
    }
}

impl<'a, 'q> Lookup<&'q String> for &'a Value {
    type Output = &'a Value;

    fn lookup(self, key: &'q String) -> Option<&'a Value> { self.lookup(key.as_str()) }
}

impl<'a> Lookup<usize> for &'a Value {
    type Output = &'a Value;

    fn lookup(self, index: usize) -> Option<&'a Value> {
        match self {
            Value::Array(a) => a.get(index),
            _ => None,
        }
    }
}

impl<'q> Entries<&'q str> for Value {
    type Item = Value;

    fn put(&mut self, key: &'q str, value: Value) -> Result<()> {
        match self {
            Value::Object(o) => {
                o.insert(key.to_owned(), value);
                Ok(())
            }
            Value::Array(_) => Err(Error::InvalidKey { kind: "array" }),
            other => Err(Error::NotAContainer { kind: kind_of(other) }),
        }
    }

    fn delete(&mut self, key: &'q str) -> Result<()> {
        match self {
            Value::Object(o) => match o.remove(key) {
                Some(_) => Ok(()),
                None => Err(Error::KeyNotFound { key: key.to_owned() }),
            },
            Value::Array(_) => Err(Error::InvalidKey { kind: "array" }),
            other => Err(Error::NotAContainer { kind: kind_of(other) }),
        }
    }
}

impl Entries<usize> for Value {
    type Item = Value;

    fn put(&mut self, index: usize, value: Value) -> Result<()> {
        match self {
            Value::Array(a) => a.put(index, value),
            Value::Object(_) => Err(Error::InvalidKey { kind: "object" }),
            other => Err(Error::NotAContainer { kind: kind_of(other) }),
        }
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        match self {
            Value::Array(a) => a.delete(index),
            Value::Object(_) => Err(Error::InvalidKey { kind: "object" }),
            other => Err(Error::NotAContainer { kind: kind_of(other) }),
        }
    }
}

/// Iterator over the items of a dynamic value.
///
/// Arrays yield their elements, objects their values, and anything else is
/// yielded once.
pub enum Items<'a> {
    Array(core::slice::Iter<'a, Value>),
    Object(map::Values<'a>),
    Once(core::option::IntoIter<&'a Value>),
}

impl<'a> Items<'a> {
    fn new(v: Option<&'a Value>) -> Self {
        match v {
            Some(Value::Array(a)) => Items::Array(a.iter()),
            Some(Value::Object(o)) => Items::Object(o.values()),
            other => Items::Once(other.into_iter()),
        }
    }
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        match self {
            Items::Array(it) => it.next(),
            Items::Object(it) => it.next(),
            Items::Once(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Items::Array(it) => it.size_hint(),
            Items::Object(it) => it.size_hint(),
            Items::Once(it) => it.size_hint(),
        }
    }
}

impl Maybe<Value> {
    pub fn items(&self) -> Items<'_> { Items::new(self.as_ref().into_option()) }
}

impl<'a> Maybe<&'a Value> {
    pub fn items(self) -> Items<'a> { Items::new(self.into_option()) }
}
