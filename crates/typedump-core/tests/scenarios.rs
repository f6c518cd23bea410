//! Dispatch scenarios
//!
//! End-to-end checks of the default registry on small, concrete inputs.

use chrono::{FixedOffset, TimeZone, Timelike, Utc};
use indexmap::IndexMap;
use rstest::*;
use serde_json::{Value, json};
use std::any::TypeId;
use std::borrow::Cow;
use typedump_core::case::{camel_case, snake_case};
use typedump_core::{
	Category, Dispatcher, Dump, DumpError, DumpOptions, DumpResult, EnumMember, Registry,
	Resolution, Shape, TypeKey,
};

#[derive(Clone, Copy)]
enum Color {
	Red,
	Blue,
}

impl Dump for Color {
	fn shape(&self) -> Shape<'_> {
		Shape::Enumeration(match self {
			Color::Red => EnumMember::new("RED", 1),
			Color::Blue => EnumMember::new("BLUE", 2),
		})
	}
}

struct Animal {
	name: &'static str,
}

struct Dog {
	name: &'static str,
	good: bool,
}

struct Cat {
	name: &'static str,
}

impl Dump for Animal {
	fn shape(&self) -> Shape<'_> {
		Shape::Object(Box::new(
			[(Cow::Borrowed("name"), &self.name as &dyn Dump)].into_iter(),
		))
	}
}

impl Dump for Dog {
	fn shape(&self) -> Shape<'_> {
		Shape::Object(Box::new(
			[
				(Cow::Borrowed("name"), &self.name as &dyn Dump),
				(Cow::Borrowed("good"), &self.good as &dyn Dump),
			]
			.into_iter(),
		))
	}

	fn ancestors(&self) -> Vec<TypeId> {
		vec![TypeId::of::<Animal>()]
	}
}

impl Dump for Cat {
	fn shape(&self) -> Shape<'_> {
		Shape::Object(Box::new(
			[(Cow::Borrowed("name"), &self.name as &dyn Dump)].into_iter(),
		))
	}

	fn ancestors(&self) -> Vec<TypeId> {
		vec![TypeId::of::<Animal>()]
	}
}

fn animal_tag(value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
	let Shape::Object(fields) = value.shape() else {
		return Err(DumpError::custom("animals are objects"));
	};
	let mut tagged = typedump_core::serializers::serialize_entries(fields, dispatcher)?;
	if let Value::Object(map) = &mut tagged {
		map.insert("kind".into(), json!("animal"));
	}
	Ok(tagged)
}

#[fixture]
fn registry() -> Registry {
	Registry::default()
}

#[rstest]
fn test_strip_nulls_scenario(registry: Registry) {
	// Arrange
	let value = IndexMap::from([("a", Some(1)), ("b", None)]);
	let options = DumpOptions::new().strip_nulls(true);

	// Act
	let dumped = registry.dump(&value, &options).unwrap();

	// Assert
	assert_eq!(dumped, json!({"a": 1}));
}

#[rstest]
fn test_sequence_scenario(registry: Registry) {
	assert_eq!(
		registry.dump(&vec![1, 2, 3], &DumpOptions::new()).unwrap(),
		json!([1, 2, 3])
	);
}

#[rstest]
fn test_enum_scenario(registry: Registry) {
	assert_eq!(
		registry.dump(&Color::Red, &DumpOptions::new()).unwrap(),
		json!("RED")
	);
	assert_eq!(
		registry
			.dump(&Color::Blue, &DumpOptions::new().use_enum_name(false))
			.unwrap(),
		json!("2")
	);
}

#[rstest]
fn test_key_transformer_scenario(registry: Registry) {
	// Arrange
	let value = IndexMap::from([("firstName", "x")]);
	let options = DumpOptions::new().key_transformer(snake_case);

	// Act
	let dumped = registry.dump(&value, &options).unwrap();

	// Assert
	assert_eq!(dumped, json!({"first_name": "x"}));
}

#[rstest]
#[case(0, 0, "2021-07-04T12:00:00Z")]
#[case(0, 250_000_000, "2021-07-04T12:00:00.250000Z")]
#[case(-5 * 3600, 0, "2021-07-04T12:00:00-05:00")]
#[case(9 * 3600 + 1800, 42_000, "2021-07-04T12:00:00.000042+09:30")]
fn test_datetime_scenarios(
	registry: Registry,
	#[case] offset_seconds: i32,
	#[case] nanos: u32,
	#[case] expected: &str,
) {
	// Arrange
	let offset = FixedOffset::east_opt(offset_seconds).unwrap();
	let datetime = offset
		.with_ymd_and_hms(2021, 7, 4, 12, 0, 0)
		.unwrap()
		.with_nanosecond(nanos)
		.unwrap();

	// Act
	let dumped = registry.dump(&datetime, &DumpOptions::new()).unwrap();

	// Assert
	assert_eq!(dumped, json!(expected));
}

#[rstest]
fn test_utc_datetime_inside_mapping(registry: Registry) {
	let created = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
	let value = IndexMap::from([("createdAt", created)]);
	let options = DumpOptions::new().key_transformer(snake_case);

	assert_eq!(
		registry.dump(&value, &options).unwrap(),
		json!({"created_at": "2000-01-01T00:00:00Z"})
	);
}

#[rstest]
fn test_ancestor_serializer_applies_to_every_subtype(mut registry: Registry) {
	// Arrange
	registry.register_fn(TypeKey::of::<Animal>(), animal_tag);
	let pets: Vec<Box<dyn Dump>> = vec![
		Box::new(Dog {
			name: "rex",
			good: true,
		}),
		Box::new(Cat { name: "tom" }),
	];

	// Act
	let dumped = registry.dump(&pets, &DumpOptions::new()).unwrap();

	// Assert
	assert_eq!(
		dumped,
		json!([
			{"name": "rex", "good": true, "kind": "animal"},
			{"name": "tom", "kind": "animal"},
		])
	);
}

#[rstest]
fn test_subtype_override_keeps_sibling_on_ancestor(mut registry: Registry) {
	// Arrange
	registry.register_fn(TypeKey::of::<Animal>(), animal_tag);
	registry.register_fn(TypeKey::of::<Dog>(), |_, _| Ok(json!("woof")));

	// Act
	let dog = registry.resolve(&Dog {
		name: "rex",
		good: true,
	});
	let cat = registry.resolve(&Cat { name: "tom" });

	// Assert
	assert_eq!(dog.resolution, Resolution::Exact);
	assert_eq!(cat.resolution, Resolution::Ancestor(TypeId::of::<Animal>()));
}

#[rstest]
fn test_options_reach_every_level(registry: Registry) {
	// Arrange
	let inner = IndexMap::from([("secondLevel", vec![Some(Color::Red), None])]);
	let value = IndexMap::from([("first_level", Some(inner)), ("dropped", None)]);
	let options = DumpOptions::new()
		.strip_nulls(true)
		.key_transformer(camel_case)
		.use_enum_name(false);

	// Act
	let dumped = registry.dump(&value, &options).unwrap();

	// Assert
	assert_eq!(dumped, json!({"firstLevel": {"secondLevel": ["1", null]}}));
}

#[rstest]
fn test_category_override_replaces_default(mut registry: Registry) {
	// Arrange
	registry.register_fn(Category::Enumeration, |value, _| match value.shape() {
		Shape::Enumeration(member) => Ok(json!({"enum": member.name, "value": member.value})),
		_ => Err(DumpError::custom("not an enum")),
	});

	// Act
	let dumped = registry.dump(&Color::Blue, &DumpOptions::new()).unwrap();

	// Assert
	assert_eq!(dumped, json!({"enum": "BLUE", "value": 2}));
}

#[rstest]
fn test_user_serializer_error_propagates_with_type(mut registry: Registry) {
	// Arrange
	registry.register_fn(TypeKey::of::<Cat>(), |_, _| {
		Err(DumpError::other(std::io::Error::other("scratched")))
	});
	let value = IndexMap::from([("pet", Cat { name: "tom" })]);

	// Act
	let error = registry.dump(&value, &DumpOptions::new()).unwrap_err();

	// Assert
	assert_eq!(error.type_name(), Some(std::any::type_name::<Cat>()));
	let source = std::error::Error::source(&error).unwrap();
	assert_eq!(source.to_string(), "scratched");
}

struct Payload {
	raw: &'static str,
}

impl Dump for Payload {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(json!(self.raw))
	}
}

fn parse_payload(value: &dyn Dump, _dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
	let payload = value
		.downcast_ref::<Payload>()
		.ok_or_else(|| DumpError::custom("expected Payload"))?;
	Ok(serde_json::from_str::<Value>(payload.raw)?)
}

#[rstest]
fn test_json_error_in_serializer_names_failing_type(mut registry: Registry) {
	// Arrange
	registry.register_fn(TypeKey::of::<Payload>(), parse_payload);
	let value = vec![Payload { raw: "[1]" }, Payload { raw: "{" }];

	// Act
	let error = registry.dump(&value, &DumpOptions::new()).unwrap_err();

	// Assert
	assert_eq!(error.type_name(), Some(std::any::type_name::<Payload>()));
	let source = std::error::Error::source(&error).unwrap();
	assert!(source.downcast_ref::<serde_json::Error>().is_some());
	assert!(error.to_string().starts_with("failed to serialize"));
}
