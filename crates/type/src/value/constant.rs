// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal value appearing in a HogQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
	Null,
	Integer(i64),
	Float(f64),
	String(String),
	Boolean(bool),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	Uuid(Uuid),
	Array(Vec<Constant>),
	Tuple(Vec<Constant>),
	/// Host value with no local type, kept in its textual form
	Unknown(String),
}

impl Constant {
	/// Whether a datetime literal carries sub-second precision.
	pub fn is_fractional_datetime(&self) -> bool {
		match self {
			Constant::DateTime(dt) => dt.nanosecond() != 0,
			_ => false,
		}
	}
}

impl From<i64> for Constant {
	fn from(value: i64) -> Self {
		Constant::Integer(value)
	}
}

impl From<f64> for Constant {
	fn from(value: f64) -> Self {
		Constant::Float(value)
	}
}

impl From<bool> for Constant {
	fn from(value: bool) -> Self {
		Constant::Boolean(value)
	}
}

impl From<&str> for Constant {
	fn from(value: &str) -> Self {
		Constant::String(value.to_string())
	}
}

impl From<String> for Constant {
	fn from(value: String) -> Self {
		Constant::String(value)
	}
}

impl From<NaiveDate> for Constant {
	fn from(value: NaiveDate) -> Self {
		Constant::Date(value)
	}
}

impl From<NaiveDateTime> for Constant {
	fn from(value: NaiveDateTime) -> Self {
		Constant::DateTime(value)
	}
}

impl From<Uuid> for Constant {
	fn from(value: Uuid) -> Self {
		Constant::Uuid(value)
	}
}

impl<T: Into<Constant>> From<Option<T>> for Constant {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Constant::Null)
	}
}

/// Writes `value` as a single-quoted string literal of the target dialect.
pub fn write_escaped_string(f: &mut impl fmt::Write, value: &str) -> fmt::Result {
	f.write_char('\'')?;
	for c in value.chars() {
		match c {
			'\\' => f.write_str("\\\\")?,
			'\'' => f.write_str("\\'")?,
			'\n' => f.write_str("\\n")?,
			'\r' => f.write_str("\\r")?,
			'\t' => f.write_str("\\t")?,
			'\0' => f.write_str("\\0")?,
			c => f.write_char(c)?,
		}
	}
	f.write_char('\'')
}

/// Finite values always keep a `.` or an exponent so they stay floats.
fn write_float(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
	if value.is_nan() {
		f.write_str("nan")
	} else if value.is_infinite() {
		f.write_str(if value > 0.0 { "inf" } else { "-inf" })
	} else {
		write!(f, "{value:?}")
	}
}

fn write_list(f: &mut Formatter<'_>, items: &[Constant]) -> fmt::Result {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}", item)?;
	}
	Ok(())
}

impl Display for Constant {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Constant::Null => f.write_str("NULL"),
			Constant::Integer(i) => write!(f, "{i}"),
			Constant::Float(v) => write_float(f, *v),
			Constant::String(s) => write_escaped_string(f, s),
			Constant::Boolean(b) => write!(f, "{b}"),
			Constant::Date(d) => write!(f, "toDate('{}')", d.format("%Y-%m-%d")),
			Constant::DateTime(dt) if dt.nanosecond() == 0 => {
				write!(f, "toDateTime('{}')", dt.format("%Y-%m-%d %H:%M:%S"))
			}
			Constant::DateTime(dt) => write!(f, "toDateTime64('{}', 6)", dt.format("%Y-%m-%d %H:%M:%S%.6f")),
			Constant::Uuid(u) => write!(f, "toUUID('{}')", u),
			Constant::Array(items) => {
				f.write_str("[")?;
				write_list(f, items)?;
				f.write_str("]")
			}
			Constant::Tuple(items) => {
				f.write_str("tuple(")?;
				write_list(f, items)?;
				f.write_str(")")
			}
			Constant::Unknown(raw) => write_escaped_string(f, raw),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn datetime(s: &str) -> NaiveDateTime {
		NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Constant::from(None::<i64>), Constant::Null);
		assert_eq!(Constant::from(Some("a")), Constant::String("a".into()));
	}

	#[test]
	fn test_display_strings_are_escaped() {
		assert_eq!(Constant::from("it's").to_string(), "'it\\'s'");
		assert_eq!(Constant::from("a\\b").to_string(), "'a\\\\b'");
	}

	#[test]
	fn test_display_temporal() {
		let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
		assert_eq!(Constant::Date(date).to_string(), "toDate('2024-01-15')");
		assert_eq!(
			Constant::DateTime(datetime("2024-01-15 10:30:00")).to_string(),
			"toDateTime('2024-01-15 10:30:00')"
		);
		assert_eq!(
			Constant::DateTime(datetime("2024-01-15 10:30:00.25")).to_string(),
			"toDateTime64('2024-01-15 10:30:00.250000', 6)"
		);
	}

	#[test]
	fn test_display_containers() {
		let array = Constant::Array(vec![Constant::Integer(1), Constant::Null]);
		assert_eq!(array.to_string(), "[1, NULL]");
		let tuple = Constant::Tuple(vec![Constant::Integer(1), Constant::from("a")]);
		assert_eq!(tuple.to_string(), "tuple(1, 'a')");
	}

	#[test]
	fn test_display_floats_stay_floats() {
		assert_eq!(Constant::Float(2.0).to_string(), "2.0");
		assert_eq!(Constant::Float(1.5).to_string(), "1.5");
		assert_eq!(Constant::Float(1e300).to_string(), "1e300");
		assert_eq!(Constant::Float(-0.0).to_string(), "-0.0");
		assert_eq!(Constant::Float(f64::NAN).to_string(), "nan");
		assert_eq!(Constant::Float(f64::INFINITY).to_string(), "inf");
		assert_eq!(Constant::Float(f64::NEG_INFINITY).to_string(), "-inf");
	}

	#[test]
	fn test_fractional_datetime() {
		assert!(Constant::DateTime(datetime("2024-01-15 10:30:00.001")).is_fractional_datetime());
		assert!(!Constant::DateTime(datetime("2024-01-15 10:30:00")).is_fractional_datetime());
		assert!(!Constant::Integer(0).is_fractional_datetime());
	}
}
