//! Policy document vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crdadaptor_core::codec::{load_document, serialize};
use crdadaptor_core::PolicyModel;


const FILES: [&str; 8] = [
    "basic.json",
    "empty.json",
    "blank_lines.json",
    "whitespace_comments.json",
    "malformed.json",
    "multi_type.json",
    "empty_fields.json",
    "field_whitespace.json",
];

#[test]
fn load_vectors() {
    for f in FILES {
        let v = vector_loader::load(f);
        let mut model = PolicyModel::new();
        let summary = load_document(&v.document, &mut model);

        assert_eq!(model, v.expected_model(), "vector={}", v.description);
        assert_eq!(summary.skipped, v.expect_skipped, "vector={}", v.description);
        assert_eq!(summary.loaded, model.len(), "vector={}", v.description);
    }
}

#[test]
fn serialize_vectors() {
    for f in FILES {
        let v = vector_loader::load(f);
        let Some(expected) = v.expect_serialized.as_deref() else { continue };

        let doc = serialize(&v.expected_model());
        assert_eq!(doc, expected, "vector={}", v.description);
    }
}

#[test]
fn serialized_vectors_reload_to_same_model() {
    for f in FILES {
        let v = vector_loader::load(f);
        let original = v.expected_model();

        let mut back = PolicyModel::new();
        let summary = load_document(&serialize(&original), &mut back);

        assert_eq!(summary.skipped, 0, "vector={}", v.description);
        assert_eq!(back, original, "vector={}", v.description);
    }
}
