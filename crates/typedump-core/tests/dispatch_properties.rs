//! Dispatch property-based tests
//!
//! Properties of the default serializer set that must hold for arbitrary
//! inputs: identity on primitives, sequence shape, null stripping and key
//! transformation at every depth.

use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::borrow::Cow;
use typedump_core::{Dump, DumpOptions, Registry, Shape};

type Record = IndexMap<String, Option<i32>>;

fn dump(value: &dyn Dump, options: &DumpOptions) -> Value {
	Registry::default().dump(value, options).unwrap()
}

fn record_strategy() -> impl Strategy<Value = Record> {
	prop::collection::vec(("[a-z]{1,8}", prop::option::of(any::<i32>())), 0..8)
		.prop_map(|entries| entries.into_iter().collect())
}

/// Every object key in `value`, at any depth.
fn object_keys(value: &Value, keys: &mut Vec<String>) {
	match value {
		Value::Object(map) => {
			for (key, nested) in map {
				keys.push(key.clone());
				object_keys(nested, keys);
			}
		}
		Value::Array(items) => items.iter().for_each(|item| object_keys(item, keys)),
		_ => {}
	}
}

fn contains_null_entry(value: &Value) -> bool {
	match value {
		Value::Object(map) => map
			.values()
			.any(|nested| nested.is_null() || contains_null_entry(nested)),
		Value::Array(items) => items.iter().any(contains_null_entry),
		_ => false,
	}
}

struct Account {
	owner: String,
	limit: Option<i32>,
	tags: Vec<String>,
}

impl Dump for Account {
	fn shape(&self) -> Shape<'_> {
		Shape::Object(Box::new(
			[
				(Cow::Borrowed("owner"), &self.owner as &dyn Dump),
				(Cow::Borrowed("limit"), &self.limit as &dyn Dump),
				(Cow::Borrowed("tags"), &self.tags as &dyn Dump),
			]
			.into_iter(),
		))
	}
}

// ============================================================================
// Property-Based Tests: primitives and sequences
// ============================================================================

proptest! {
	/// Test: primitive identity
	///
	/// Category: Property
	/// Verifies that integers, booleans and strings serialize to themselves.
	#[test]
	fn prop_primitives_are_identity(number in any::<i64>(), flag in any::<bool>(), text in ".*") {
		let options = DumpOptions::new();

		prop_assert_eq!(dump(&number, &options), json!(number));
		prop_assert_eq!(dump(&flag, &options), json!(flag));
		prop_assert_eq!(dump(&text, &options), json!(text));
	}

	/// Test: sequence shape
	///
	/// Category: Property
	/// Verifies that length and order are preserved and nulls are never
	/// removed from sequences, even with strip_nulls.
	#[test]
	fn prop_sequence_preserves_elements(
		values in prop::collection::vec(prop::option::of(any::<i32>()), 0..32),
		strip_nulls in any::<bool>(),
	) {
		let options = DumpOptions::new().strip_nulls(strip_nulls);

		let dumped = dump(&values, &options);

		let items = dumped.as_array().unwrap();
		prop_assert_eq!(items.len(), values.len());
		for (item, value) in items.iter().zip(&values) {
			prop_assert_eq!(item, &json!(value));
		}
	}
}

// ============================================================================
// Property-Based Tests: mappings and objects
// ============================================================================

proptest! {
	/// Test: null stripping at every depth
	///
	/// Category: Property
	/// Verifies that no mapping entry holds null once strip_nulls is set, and
	/// that every non-null entry survives.
	#[test]
	fn prop_strip_nulls_removes_every_null_entry(records in prop::collection::vec(record_strategy(), 0..6)) {
		let options = DumpOptions::new().strip_nulls(true);
		let nested: IndexMap<String, Vec<Record>> = IndexMap::from([("records".to_string(), records.clone())]);

		let dumped = dump(&nested, &options);

		prop_assert!(!contains_null_entry(&dumped));
		let dumped_records = dumped["records"].as_array().unwrap();
		prop_assert_eq!(dumped_records.len(), records.len());
		for (dumped_record, record) in dumped_records.iter().zip(&records) {
			let kept = record.values().filter(|value| value.is_some()).count();
			prop_assert_eq!(dumped_record.as_object().unwrap().len(), kept);
		}
	}

	/// Test: key transformation at every depth
	///
	/// Category: Property
	/// Verifies that the transformer is applied to every key exactly once.
	#[test]
	fn prop_keys_transformed_once_at_every_level(
		outer_key in "[a-z]{1,8}",
		records in prop::collection::vec(record_strategy(), 1..4),
	) {
		let options = DumpOptions::new().key_transformer(|key| format!("k_{key}"));
		let nested: IndexMap<String, Vec<Record>> = IndexMap::from([(outer_key, records)]);

		let dumped = dump(&nested, &options);

		let mut keys = Vec::new();
		object_keys(&dumped, &mut keys);
		for key in keys {
			prop_assert!(key.starts_with("k_"));
			prop_assert!(!key.starts_with("k_k_"));
		}
	}

	/// Test: object fallback equals mapping of fields
	///
	/// Category: Property
	/// Verifies that an unregistered object serializes exactly like a mapping
	/// of its field names to its field values, under the same options.
	#[test]
	fn prop_object_equals_mapping_of_fields(
		owner in "[a-zA-Z ]{0,12}",
		limit in prop::option::of(any::<i32>()),
		tags in prop::collection::vec("[a-z]{1,5}", 0..4),
		strip_nulls in any::<bool>(),
	) {
		let options = DumpOptions::new().strip_nulls(strip_nulls).key_transformer(|key| key.to_uppercase());
		let account = Account { owner: owner.clone(), limit, tags: tags.clone() };
		let fields: IndexMap<&'static str, Box<dyn Dump>> = IndexMap::from([
			("owner", Box::new(owner) as Box<dyn Dump>),
			("limit", Box::new(limit)),
			("tags", Box::new(tags)),
		]);

		prop_assert_eq!(dump(&account, &options), dump(&fields, &options));
	}
}
