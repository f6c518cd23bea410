//! `Dump` implementations for `chrono` date-time types
//!
//! Every date-time is reduced to a `DateTime<FixedOffset>`. Naive values carry
//! no zone and are treated as UTC.

use super::{Category, Dump, Shape};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

impl Dump for DateTime<Utc> {
	fn shape(&self) -> Shape<'_> {
		Shape::DateTime(self.fixed_offset())
	}

	fn category(&self) -> Option<Category> {
		Some(Category::DateTime)
	}
}

impl Dump for DateTime<FixedOffset> {
	fn shape(&self) -> Shape<'_> {
		Shape::DateTime(*self)
	}

	fn category(&self) -> Option<Category> {
		Some(Category::DateTime)
	}
}

impl Dump for DateTime<Local> {
	fn shape(&self) -> Shape<'_> {
		Shape::DateTime(self.fixed_offset())
	}

	fn category(&self) -> Option<Category> {
		Some(Category::DateTime)
	}
}

impl Dump for NaiveDateTime {
	fn shape(&self) -> Shape<'_> {
		Shape::DateTime(self.and_utc().fixed_offset())
	}

	fn category(&self) -> Option<Category> {
		Some(Category::DateTime)
	}
}
