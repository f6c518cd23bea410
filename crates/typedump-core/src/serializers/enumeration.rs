use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Shape};
use crate::error::DumpResult;
use crate::registry::Serializer;
use serde_json::Value;

/// Serializes an enumeration member as a string
///
/// The member name by default; the string form of the member value when the
/// `use_enum_name` extra option is `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumSerializer;

impl Serializer for EnumSerializer {
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::Enumeration(member) if dispatcher.options().uses_enum_name() => {
				Ok(Value::String(member.name.to_owned()))
			}
			Shape::Enumeration(member) => Ok(Value::String(member.value_string())),
			shape => Err(super::unexpected_shape("an enumeration member", &shape)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dump::{Category, EnumMember};
	use crate::options::DumpOptions;
	use crate::registry::Registry;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Clone, Copy)]
	enum Color {
		Red,
		Green,
	}

	impl Dump for Color {
		fn shape(&self) -> Shape<'_> {
			Shape::Enumeration(match self {
				Color::Red => EnumMember::new("RED", 1),
				Color::Green => EnumMember::new("GREEN", "g"),
			})
		}

		fn category(&self) -> Option<Category> {
			Some(Category::Enumeration)
		}
	}

	#[rstest]
	#[case(Color::Red, "RED")]
	#[case(Color::Green, "GREEN")]
	fn test_name_by_default(#[case] color: Color, #[case] expected: &str) {
		let dumped = Registry::default()
			.dump(&color, &DumpOptions::new())
			.unwrap();
		assert_eq!(dumped, json!(expected));
	}

	#[rstest]
	#[case(Color::Red, "1")]
	#[case(Color::Green, "g")]
	fn test_value_when_names_disabled(#[case] color: Color, #[case] expected: &str) {
		let options = DumpOptions::new().use_enum_name(false);
		let dumped = Registry::default().dump(&color, &options).unwrap();
		assert_eq!(dumped, json!(expected));
	}

	#[rstest]
	fn test_option_reaches_nested_members() {
		// Arrange
		let options = DumpOptions::new().use_enum_name(false);
		let palette = vec![Some(Color::Red), None];

		// Act
		let dumped = Registry::default().dump(&palette, &options).unwrap();

		// Assert
		assert_eq!(dumped, json!(["1", null]));
	}
}
