//! possibly: optional values that are either `Present` or `Absent`.
//!
//! A raw value enters through [`maybe`], which classifies it by truthiness:
//! `None`, zero, `false`, empty strings and empty collections become
//! [`Maybe::Absent`], everything else becomes [`Maybe::Present`]. Reads on a
//! present value (indexing with [`Maybe::get`], attributes with
//! [`Maybe::attr`], fields with [`Maybe::field`]) are forwarded to the wrapped
//! value and classified again, so a chain of reads never fails part-way; it
//! simply ends in `Absent`.
//!
//! ```
//! use possibly::{maybe, Error};
//!
//! assert!(maybe("I'm a value").is_some());
//! assert!(maybe(None::<&str>).is_none());
//!
//! assert_eq!(maybe("I'm a value").get_or_fail().unwrap(), "I'm a value");
//! assert_eq!(maybe("I'm a value").get_or_else(|| "No value"), "I'm a value");
//! assert!(matches!(maybe(None::<&str>).get_or_fail(), Err(Error::EmptyValue)));
//! assert_eq!(maybe(None::<&str>).get_or_else(|| "value"), "value");
//! assert_eq!(maybe(None::<&str>).get_or("value"), "value");
//! ```
//!
//! Nested dictionaries, without worrying about missing levels:
//!
//! ```
//! use possibly::maybe;
//! use serde_json::json;
//!
//! let nested = maybe(json!({
//!     "store": {
//!         "name": "MyStore",
//!         "departments": { "sales": { "head_count": "10" } }
//!     }
//! }));
//!
//! let zero = json!("0");
//! assert_eq!(nested.get("store").get("name").get_or_fail().unwrap(), "MyStore");
//! assert!(nested.get("store").get("address").is_none());
//! assert_eq!(
//!     nested.get("store").get("address").get("street").get_or(&json!("No Address Specified")),
//!     "No Address Specified"
//! );
//! assert_eq!(
//!     nested.get("store").get("departments").get("sales").get("head_count").get_or(&zero),
//!     "10"
//! );
//! assert_eq!(
//!     nested.get("store").get("departments").get("marketing").get("head_count").get_or(&zero),
//!     "0"
//! );
//! ```
//!
//! Attributes of a struct:
//!
//! ```
//! use possibly::{maybe, Reflect};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person { name: String }
//!
//! let eran = maybe(Reflect(Person { name: "eran".into() }));
//! assert_eq!(eran.attr("name").get_or_fail().unwrap(), "eran");
//! assert!(eran.attr("phone_number").is_none());
//! assert_eq!(
//!     eran.attr("phone_number").get_or("no phone number".into()),
//!     "no phone number"
//! );
//! ```

mod classify;
mod error;
mod length;
mod lookup;
mod maybe;
mod truthy;

#[cfg(feature = "json")]
mod attr;
#[cfg(feature = "json")]
pub mod json;

pub use crate::classify::{maybe, IntoMaybe};
pub use crate::error::{Error, Result};
pub use crate::length::Length;
pub use crate::lookup::{Entries, Lookup};
pub use crate::maybe::Maybe;
pub use crate::truthy::Truthy;

#[cfg(feature = "json")]
pub use crate::attr::{Attributes, AttributesMut, Reflect};

#[cfg(feature = "json")]
#[doc(hidden)]
pub use serde_json;
