use std::collections::HashMap;

use possibly::{attributes, maybe, Error, Maybe, Reflect, Truthy};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
struct Person {
    name: String,
    phone: Option<String>,
}

attributes!(Person { name, phone });

impl Truthy for Person {
    fn is_truthy(&self) -> bool { true }
}

#[test]
fn mapping_is_present() {
    let mut d = HashMap::new();
    d.insert("a", 1);
    assert!(maybe(d).is_some());
    assert!(maybe(json!({"a": 1})).is_some());
}

#[test]
fn absent_get_or_fail_errors() {
    let err = maybe(None::<i32>).get_or_fail().unwrap_err();
    assert!(matches!(err, Error::EmptyValue));
}

#[test]
fn absent_get_or_returns_fallback() {
    assert_eq!(maybe(None::<&str>).get_or("fallback"), "fallback");
}

#[test]
fn nested_store_lookup() {
    let d = maybe(json!({"store": {"name": "X"}}));
    assert_eq!(d.get("store").get("name").get_or_fail().unwrap(), "X");
    let none = json!("none");
    assert_eq!(d.get("store").get("address").get("street").get_or(&none), "none");
}

#[test]
fn person_attributes() {
    let p = Person { name: "eran".into(), phone: None };
    let m = maybe(p);
    assert_eq!(m.attr("name").get_or_fail().unwrap(), "eran");
    assert_eq!(m.attr("phone").get_or("no phone".into()), "no phone");
    assert!(m.attr("email").is_absent());
}

#[test]
fn person_fields_by_selector() {
    let p = Person { name: "eran".into(), phone: None };
    assert_eq!(maybe(&p).field(|p| p.name.as_str()).get_or_fail().unwrap(), "eran");
    assert_eq!(maybe(&p).field(|p| p.phone.as_deref()).get_or("no phone"), "no phone");
}

#[test]
fn reflected_struct_behaves_like_generated_one() {
    let p = Person { name: "eran".into(), phone: Some(String::new()) };
    let m = maybe(Reflect(&p));
    assert_eq!(m.attr("name").get_or_fail().unwrap(), "eran");
    assert!(m.attr("phone").is_absent());
}

#[test]
fn writes_through_a_read_chain_target() {
    let mut doc = json!({"store": {"name": "X"}});
    {
        let mut store = maybe(doc.get_mut("store"));
        store.insert("city", "Y").unwrap();
        store.remove("name").unwrap();
    }
    assert_eq!(doc, json!({"store": {"city": "Y"}}));

    let mut nothing = maybe(doc.get_mut("missing"));
    nothing.insert("k", 1).unwrap();
    nothing.remove("k").unwrap();
    assert!(nothing.is_absent());
}

#[test]
fn chain_over_absent_stays_absent() {
    let m: Maybe<serde_json::Value> = Maybe::Absent;
    assert!(m.get("a").get(0).is_absent());
    assert!(m.attr("a").attr("b").is_absent());
    assert_eq!(m.len().unwrap(), 0);
    assert_eq!(m.to_string(), "None");
}
