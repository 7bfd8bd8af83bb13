//! Named attribute access.
//!
//! Attribute values travel as `serde_json::Value`, so a read-chain can step
//! from a struct into whatever its fields hold. Types opt in either with the
//! [`attributes!`](crate::attributes) macro, which generates per-field
//! accessors, or by wrapping the value in [`Reflect`], which reads fields
//! through its `Serialize` impl.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::classify::maybe;
use crate::error::{Error, Result};
use crate::maybe::Maybe;
use crate::truthy::Truthy;

/// Read access to named attributes.
pub trait Attributes {
    /// The attribute `name`, or [`Error::UnknownAttribute`] when there is none.
    fn attr(&self, name: &str) -> Result<Value>;

    /// Names of the attributes this value exposes.
    fn attr_names(&self) -> Vec<String>;
}

/// Write access to named attributes.
pub trait AttributesMut: Attributes {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()>;
}

impl Attributes for Value {
    fn attr(&self, name: &str) -> Result<Value> {
        match self {
            Value::Object(o) => o.get(name).cloned().ok_or_else(|| unknown(name)),
            _ => Err(unknown(name)),
        }
    }

    fn attr_names(&self) -> Vec<String> {
        match self {
            Value::Object(o) => o.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

impl AttributesMut for Value {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> {
        match self {
            Value::Object(o) => {
                o.insert(name.to_owned(), value);
                Ok(())
            }
            _ => Err(unknown(name)),
        }
    }
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attr(&self, name: &str) -> Result<Value> { (**self).attr(name) }
    fn attr_names(&self) -> Vec<String> { (**self).attr_names() }
}

impl<T: Attributes + ?Sized> Attributes for &mut T {
    fn attr(&self, name: &str) -> Result<Value> { (**self).attr(name) }
    fn attr_names(&self) -> Vec<String> { (**self).attr_names() }
}

impl<T: AttributesMut + ?Sized> AttributesMut for &mut T {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> { (**self).set_attr(name, value) }
}

impl<T: Attributes + ?Sized> Attributes for Box<T> {
    fn attr(&self, name: &str) -> Result<Value> { (**self).attr(name) }
    fn attr_names(&self) -> Vec<String> { (**self).attr_names() }
}

impl<T: AttributesMut + ?Sized> AttributesMut for Box<T> {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> { (**self).set_attr(name, value) }
}

fn unknown(name: &str) -> Error { Error::UnknownAttribute { name: name.to_owned() } }

/// Exposes the serialized fields of any `Serialize` value as attributes.
///
/// Writes round-trip the whole value through JSON, so only fields the value
/// already serializes can be assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reflect<T>(pub T);

impl<T> Reflect<T> {
    pub fn into_inner(self) -> T { self.0 }
}

// Objects are truthy regardless of their contents.
impl<T> Truthy for Reflect<T> {
    fn is_truthy(&self) -> bool { true }
}

impl<T: Serialize> Attributes for Reflect<T> {
    fn attr(&self, name: &str) -> Result<Value> {
        match serde_json::to_value(&self.0)? {
            Value::Object(mut o) => o.remove(name).ok_or_else(|| unknown(name)),
            _ => Err(unknown(name)),
        }
    }

    fn attr_names(&self) -> Vec<String> {
        serde_json::to_value(&self.0).map(|v| v.attr_names()).unwrap_or_default()
    }
}

impl<T: Serialize + DeserializeOwned> AttributesMut for Reflect<T> {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> {
        let mut doc = serde_json::to_value(&self.0)?;
        match &mut doc {
            Value::Object(o) if o.contains_key(name) => {
                o.insert(name.to_owned(), value);
            }
            _ => return Err(unknown(name)),
        }
        self.0 = serde_json::from_value(doc)?;
        Ok(())
    }
}

/// Implement [`Attributes`] and [`AttributesMut`] for a struct with named
/// fields. Every listed field must be `Serialize + DeserializeOwned`.
///
/// ```
/// use possibly::{attributes, maybe, Truthy};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Person { name: String, phone: Option<String> }
///
/// attributes!(Person { name, phone });
///
/// impl Truthy for Person {
///     fn is_truthy(&self) -> bool { true }
/// }
///
/// let eran = maybe(Person { name: "eran".into(), phone: None });
/// assert_eq!(eran.attr("name").get_or_fail().unwrap(), "eran");
/// assert!(eran.attr("phone").is_absent());
/// assert!(eran.attr("phone_number").is_absent());
/// ```
#[macro_export]
macro_rules! attributes {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Attributes for $ty {
            fn attr(&self, name: &str) -> $crate::Result<$crate::serde_json::Value> {
                $(
                    if name == stringify!($field) {
                        return Ok($crate::serde_json::to_value(&self.$field)?);
                    }
                )*
                Err($crate::Error::UnknownAttribute { name: name.to_owned() })
            }

            fn attr_names(&self) -> Vec<String> {
                vec![$(stringify!($field).to_owned()),*]
            }
        }

        impl $crate::AttributesMut for $ty {
            fn set_attr(&mut self, name: &str, value: $crate::serde_json::Value) -> $crate::Result<()> {
                $(
                    if name == stringify!($field) {
                        self.$field = $crate::serde_json::from_value(value)?;
                        return Ok(());
                    }
                )*
                let _ = value;
                Err($crate::Error::UnknownAttribute { name: name.to_owned() })
            }
        }
    };
}

impl<T: Attributes> Maybe<T> {
    /// Read the attribute `name` and classify it.
    ///
    /// Never fails: a missing attribute, or any failure while reading it,
    /// yields `Absent`.
    pub fn attr(&self, name: &str) -> Maybe<Value> {
        self.try_attr(name).unwrap_or_else(|err| {
            tracing::debug!(attr = name, error = %err, "attribute read degraded to absent");
            Maybe::Absent
        })
    }

    /// Like [`attr`](Self::attr), but only a missing attribute becomes
    /// `Absent`; conversion failures are returned.
    pub fn try_attr(&self, name: &str) -> Result<Maybe<Value>> {
        match self {
            Maybe::Present(v) => match v.attr(name) {
                Ok(found) => Ok(maybe(found)),
                Err(err) if err.is_miss() => Ok(Maybe::Absent),
                Err(err) => Err(err),
            },
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }

    pub fn attr_names(&self) -> Vec<String> {
        match self {
            Maybe::Present(v) => v.attr_names(),
            Maybe::Absent => Vec::new(),
        }
    }
}

impl<T: AttributesMut> Maybe<T> {
    /// Assign the attribute `name` on the wrapped value. A no-op when absent.
    pub fn set_attr<V: Serialize>(&mut self, name: &str, value: V) -> Result<()> {
        match self {
            Maybe::Present(v) => v.set_attr(name, serde_json::to_value(value)?),
            Maybe::Absent => {
                tracing::trace!(attr = name, "ignoring attribute assignment on absent value");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Address {
        street: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
        address: Option<Address>,
    }

    crate::attributes!(Person { name, age, address });

    impl Truthy for Person {
        fn is_truthy(&self) -> bool { true }
    }

    fn eran() -> Person { Person { name: "eran".into(), age: 0, address: None } }

    #[test]
    fn reads_known_attributes() {
        let p = maybe(eran());
        assert_eq!(p.attr("name").get_or_fail().unwrap(), json!("eran"));
        assert_eq!(p.attr_names(), vec!["name", "age", "address"]);
    }

    #[test]
    fn missing_or_empty_attributes_are_absent() {
        let p = maybe(eran());
        assert!(p.attr("phone").is_absent());
        assert!(p.attr("age").is_absent());
        assert!(p.attr("address").attr("street").is_absent());
        assert_eq!(p.attr("phone").get_or(json!("no phone")), json!("no phone"));
    }

    #[test]
    fn nested_attribute_chain() {
        let mut person = eran();
        person.address = Some(Address { street: "Main".into() });
        let p = maybe(&person);
        assert_eq!(p.attr("address").attr("street").get_or_fail().unwrap(), "Main");
        assert_eq!(p.attr("address").get("street").get_or_fail().unwrap(), "Main");
    }

    #[test]
    fn writes_forward_and_failures_propagate() {
        let mut p = maybe(eran());
        p.set_attr("age", 41).unwrap();
        assert_eq!(p.attr("age").get_or_fail().unwrap(), json!(41));

        assert!(matches!(p.set_attr("phone", "555"), Err(Error::UnknownAttribute { .. })));
        assert!(matches!(p.set_attr("age", "old"), Err(Error::Conversion(_))));
        assert_eq!(p.as_ref().field(|p| p.age).get_or_fail().unwrap(), 41);
    }

    #[test]
    fn absent_attribute_writes_are_noops() {
        let mut p: Maybe<Person> = Maybe::Absent;
        p.set_attr("name", "x").unwrap();
        assert!(p.attr("name").is_absent());
        assert!(p.attr_names().is_empty());
    }

    #[test]
    fn reflect_reads_serialized_fields() {
        let mut r = maybe(Reflect(eran()));
        assert_eq!(r.attr("name").get_or_fail().unwrap(), "eran");
        assert!(r.attr("nope").is_absent());

        r.set_attr("name", "noa").unwrap();
        assert!(matches!(r.set_attr("nope", 1), Err(Error::UnknownAttribute { .. })));
        assert_eq!(r.get_or_fail().unwrap().into_inner().name, "noa");
    }

    #[test]
    fn try_attr_surfaces_conversion_failures() {
        struct Broken;

        impl Attributes for Broken {
            fn attr(&self, _name: &str) -> Result<Value> {
                Err(serde_json::from_str::<Value>("{").unwrap_err().into())
            }
            fn attr_names(&self) -> Vec<String> { Vec::new() }
        }

        let b = Maybe::Present(Broken);
        assert!(matches!(b.try_attr("x"), Err(Error::Conversion(_))));
        assert!(b.attr("x").is_absent());
    }

    #[test]
    fn json_object_attributes() {
        let mut m = maybe(json!({"name": "X"}));
        assert_eq!(m.attr("name").get_or_fail().unwrap(), "X");
        m.set_attr("city", "Y").unwrap();
        assert_eq!(m.get("city").get_or_fail().unwrap(), "Y");

        let mut scalar = maybe(json!(1));
        assert!(scalar.set_attr("a", 1).is_err());
    }
}
