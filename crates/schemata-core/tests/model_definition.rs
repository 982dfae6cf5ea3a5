use pretty_assertions::assert_eq;
use schemata_core::schema::{Model, PropertyType};
use serde_json::json;
use std_util::prelude::*;

#[test]
fn load_full_definition() {
    let model = assert_ok!(Model::from_json(&json!({
        "name": "purchase_order",
        "metadata": { "collection": "po" },
        "properties": {
            "order_id": { "type": "integer", "primaryKey": true },
            "placed_at": { "type": "date", "nullable": true },
            "notes": {},
        },
    })));

    assert_eq!(model.name(), "purchaseOrder");
    assert_eq!(model.metadata().get("collection"), Some(&json!("po")));
    assert_eq!(model.property_names(), ["orderId", "placedAt", "notes"]);

    let placed_at = model.property("placed_at").unwrap();
    assert_eq!(placed_at.ty(), PropertyType::Date);
    assert!(placed_at.is_nullable());
    assert!(!placed_at.is_primary_key());

    assert_eq!(model.property("notes").unwrap().ty(), PropertyType::Any);
    assert_eq!(model.primary_key().len(), 1);
}

#[test]
fn missing_name() {
    let err = assert_err!(Model::from_json(&json!({ "properties": {} })));
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "`name` is a required field");

    let err = assert_err!(Model::from_json(&json!({ "name": null })));
    assert_eq!(err.to_string(), "`name` is a required field");
}

#[test]
fn name_not_a_string() {
    for name in [json!(42), json!(true), json!(["order"]), json!({ "n": 1 })] {
        let err = assert_err!(Model::from_json(&json!({ "name": name })));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "`name` must be a string");
    }
}

#[test]
fn property_not_an_object() {
    let err = assert_err!(Model::from_json(&json!({
        "name": "order",
        "properties": { "order_id": "integer" },
    })));

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "model `order`: `property` must be a property descriptor"
    );
}

#[test]
fn colliding_property_names() {
    let err = assert_err!(Model::from_json(&json!({
        "name": "user",
        "properties": {
            "first_name": { "type": "string" },
            "FirstName": { "type": "string" },
        },
    })));

    assert!(err.is_duplicate_property());
}

#[test]
fn unknown_property_option() {
    let err = assert_err!(Model::from_json(&json!({
        "name": "user",
        "properties": { "email": { "unique": true } },
    })));

    let msg = err.to_string();
    assert!(msg.starts_with("model `user`: property `email`: "), "{msg}");
    assert!(msg.contains("unique"), "{msg}");
}

#[test]
fn metadata_must_be_an_object() {
    let err = assert_err!(Model::from_json(&json!({
        "name": "user",
        "metadata": [1, 2],
    })));

    assert!(!err.is_validation());
    assert_eq!(err.to_string(), "model `user`: `metadata` must be an object");
}

#[test]
fn no_properties() {
    let model = assert_ok!(Model::from_json(&json!({ "name": "Empty" })));
    assert_eq!(model.name(), "empty");
    assert_empty!(model.property_names());
}
