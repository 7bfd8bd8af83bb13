//! The documented examples, one function each.

use anyhow::{ensure, Result};
use possibly::{attributes, maybe, Error, Maybe, Truthy};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const ALL: &[(&str, fn() -> Result<()>)] = &[
    ("testing for value", testing_for_value),
    ("simplifying if statements", simplifying_if_statements),
    ("object attributes", object_attributes),
    ("nested dictionaries", nested_dictionaries),
    ("ordering", ordering),
    ("writes", writes),
];

#[derive(Serialize, Deserialize)]
struct Person {
    name: String,
    phone_number: Option<String>,
}

attributes!(Person { name, phone_number });

impl Truthy for Person {
    fn is_truthy(&self) -> bool { true }
}

fn nested_dict() -> Maybe<Value> {
    maybe(json!({
        "store": {
            "name": "MyStore",
            "departments": {
                "sales": { "head_count": "10" }
            }
        }
    }))
}

fn testing_for_value() -> Result<()> {
    ensure!(maybe("I'm a value").is_some());
    ensure!(!maybe("I'm a value").is_none());
    ensure!(!maybe(None::<&str>).is_some());
    ensure!(maybe(None::<&str>).is_none());
    ensure!(maybe(json!({"a": 1})).is_some());
    Ok(())
}

fn simplifying_if_statements() -> Result<()> {
    ensure!(maybe("I'm a value").get_or_fail()? == "I'm a value");
    ensure!(maybe("I'm a value").get_or_else(|| "No value") == "I'm a value");
    ensure!(matches!(maybe(None::<&str>).get_or_fail(), Err(Error::EmptyValue)));
    ensure!(maybe(None::<&str>).get_or_else(|| "value") == "value");
    ensure!(maybe(None::<&str>).get_or("value") == "value");
    ensure!(maybe(None::<&str>).get_or("fallback") == "fallback");
    Ok(())
}

fn object_attributes() -> Result<()> {
    let eran = maybe(Person { name: "eran".into(), phone_number: None });
    ensure!(eran.attr("name").get_or_fail()? == "eran");
    ensure!(eran.attr("phone_number").is_none());
    ensure!(eran.attr("phone_number").get_or("no phone number".into()) == "no phone number");
    ensure!(eran.attr("phone").get_or("no phone".into()) == "no phone");
    Ok(())
}

fn nested_dictionaries() -> Result<()> {
    let nested = nested_dict();
    let store = nested.get("store");
    let zero = json!("0");
    let no_address = json!("No Address Specified");

    ensure!(store.get("name").get_or_fail()? == "MyStore");
    ensure!(store.get("address").is_none());
    ensure!(store.get("address").get("street").get_or(&no_address) == "No Address Specified");
    ensure!(store.get("departments").get("sales").get("head_count").get_or(&zero) == "10");
    ensure!(store.get("departments").get("marketing").get("head_count").get_or(&zero) == "0");
    Ok(())
}

fn ordering() -> Result<()> {
    ensure!(Maybe::Absent < maybe(1));
    ensure!(maybe(1) < maybe(2));
    ensure!(maybe(0) == maybe(None::<i32>));
    Ok(())
}

fn writes() -> Result<()> {
    let mut nested = nested_dict();
    nested.insert("owner", "eran")?;
    ensure!(nested.get("owner").get_or_fail()? == "eran");

    let mut nothing: Maybe<Value> = Maybe::Absent;
    nothing.insert("owner", "eran")?;
    nothing.remove("owner")?;
    ensure!(nothing.is_none());

    let mut scalar = maybe(json!(5));
    ensure!(scalar.insert("owner", "eran").is_err());
    Ok(())
}
