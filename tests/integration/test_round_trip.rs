//! Flatten/resolve agreement on realistic documents

use crate::fixtures::{nested_record, product_record};
use datashape::{Record, Value, flatten, get_own_property, resolve_path};

#[test]
fn test_every_flattened_key_resolves_in_flat_map() {
    for record in [nested_record(), product_record()] {
        let flat = flatten(&record);
        assert!(!flat.is_empty());

        for (path, value) in flat.iter() {
            assert_eq!(get_own_property(&flat, path), Some(value), "{path}");
        }
    }
}

#[test]
fn test_every_flattened_key_resolves_in_source() {
    let record = product_record();
    let flat = flatten(&record);

    for (path, value) in flat.iter() {
        assert_eq!(resolve_path(&record, path), Some(value), "{path}");
    }
}

#[test]
fn test_flattening_twice_is_stable() {
    let flat = flatten(&product_record());
    assert_eq!(flatten(&flat), flat);
}

#[test]
fn test_product_document_leaves() {
    let flat = flatten(&product_record());

    assert_eq!(flat.get("price.currency"), Some(&Value::from("EUR")));
    assert_eq!(flat.get("meta.discontinued"), Some(&Value::Bool(false)));
    assert_eq!(flat.get("meta.replacement"), Some(&Value::Null));
    assert_eq!(
        flat.get("meta.tags"),
        Some(&Value::Array(vec!["outdoor".into(), "running".into()]))
    );
    assert_eq!(flat.len(), 9);
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = Record::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, datashape::Error::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}
