use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Shape};
use crate::error::DumpResult;
use crate::registry::Serializer;
use chrono::{DateTime, FixedOffset, Timelike};
use serde_json::Value;

/// Serializes date-times as RFC 3339 strings
///
/// See [`format_rfc3339`] for the exact layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeSerializer;

impl Serializer for DateTimeSerializer {
	fn serialize(&self, value: &dyn Dump, _dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::DateTime(datetime) => Ok(Value::String(format_rfc3339(&datetime))),
			shape => Err(super::unexpected_shape("a date-time", &shape)),
		}
	}
}

/// Format as `YYYY-MM-DDTHH:MM:SS[.ffffff](Z|±HH:MM)`.
///
/// Fractional seconds appear only when the microsecond component is non-zero
/// and are always six digits. A zero offset is written as `Z`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use typedump_core::serializers::format_rfc3339;
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let datetime = offset.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
/// assert_eq!(format_rfc3339(&datetime), "2024-03-09T14:05:00+02:00");
/// ```
pub fn format_rfc3339(datetime: &DateTime<FixedOffset>) -> String {
	let mut formatted = datetime.format("%Y-%m-%dT%H:%M:%S").to_string();

	// Leap seconds are carried as nanoseconds past 1_000_000_000.
	let micros = (datetime.nanosecond() % 1_000_000_000) / 1_000;
	if micros != 0 {
		formatted.push_str(&format!(".{micros:06}"));
	}

	if datetime.offset().local_minus_utc() == 0 {
		formatted.push('Z');
	} else {
		formatted.push_str(&datetime.format("%:z").to_string());
	}
	formatted
}
