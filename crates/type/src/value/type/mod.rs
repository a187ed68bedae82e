// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::constant::Constant;

/// All value kinds a HogQL literal can have
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantType {
	/// A signed 64-bit integer
	Integer,
	/// An 8-byte floating point
	Float,
	/// A UTF-8 encoded string
	String,
	/// A boolean: true or false
	Boolean,
	/// A homogeneous, variable-length sequence
	Array,
	/// A heterogeneous, fixed-arity sequence
	Tuple,
	/// A calendar date (year, month, day)
	Date,
	/// A date and time value, possibly with sub-second precision
	DateTime,
	/// A UUID of any version
	Uuid,
	/// Type could not be determined locally; compatible with everything
	Unknown,
}

impl ConstantType {
	pub const fn as_str(&self) -> &'static str {
		match self {
			ConstantType::Integer => "int",
			ConstantType::Float => "float",
			ConstantType::String => "str",
			ConstantType::Boolean => "bool",
			ConstantType::Array => "array",
			ConstantType::Tuple => "tuple",
			ConstantType::Date => "date",
			ConstantType::DateTime => "datetime",
			ConstantType::Uuid => "uuid",
			ConstantType::Unknown => "unknown",
		}
	}

	/// Whether a value of type `other` may stand where `self` is expected.
	/// `Unknown` on either side is always accepted.
	pub fn accepts(&self, other: ConstantType) -> bool {
		*self == other || *self == ConstantType::Unknown || other == ConstantType::Unknown
	}
}

impl Display for ConstantType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A [`ConstantType`] with nullability layered on top.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantKind {
	pub ty: ConstantType,
	pub nullable: bool,
}

impl ConstantKind {
	pub const fn new(ty: ConstantType) -> Self {
		Self {
			ty,
			nullable: false,
		}
	}

	pub const fn nullable(ty: ConstantType) -> Self {
		Self {
			ty,
			nullable: true,
		}
	}
}

impl Display for ConstantKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.nullable {
			write!(f, "{} or null", self.ty)
		} else {
			write!(f, "{}", self.ty)
		}
	}
}

/// Structural classification of a literal.
pub fn classify(value: &Constant) -> ConstantKind {
	match value {
		Constant::Null => ConstantKind::nullable(ConstantType::Unknown),
		Constant::Integer(_) => ConstantKind::new(ConstantType::Integer),
		Constant::Float(_) => ConstantKind::new(ConstantType::Float),
		Constant::String(_) => ConstantKind::new(ConstantType::String),
		Constant::Boolean(_) => ConstantKind::new(ConstantType::Boolean),
		Constant::Date(_) => ConstantKind::new(ConstantType::Date),
		Constant::DateTime(_) => ConstantKind::new(ConstantType::DateTime),
		Constant::Uuid(_) => ConstantKind::new(ConstantType::Uuid),
		Constant::Array(_) => ConstantKind::new(ConstantType::Array),
		Constant::Tuple(_) => ConstantKind::new(ConstantType::Tuple),
		Constant::Unknown(_) => ConstantKind::new(ConstantType::Unknown),
	}
}

#[cfg(test)]
mod tests {
	use chrono::{NaiveDate, NaiveDateTime};
	use uuid::Uuid;

	use super::*;

	#[test]
	fn test_scalars_map_directly() {
		assert_eq!(classify(&Constant::Integer(1)).ty, ConstantType::Integer);
		assert_eq!(classify(&Constant::Float(1.5)).ty, ConstantType::Float);
		assert_eq!(classify(&Constant::String("a".into())).ty, ConstantType::String);
		assert_eq!(classify(&Constant::Boolean(true)).ty, ConstantType::Boolean);
		assert_eq!(classify(&Constant::Uuid(Uuid::nil())).ty, ConstantType::Uuid);

		let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
		assert_eq!(classify(&Constant::Date(date)).ty, ConstantType::Date);
		let datetime: NaiveDateTime = date.and_hms_opt(10, 30, 0).unwrap();
		assert_eq!(classify(&Constant::DateTime(datetime)).ty, ConstantType::DateTime);
	}

	#[test]
	fn test_null_is_nullable_unknown() {
		let kind = classify(&Constant::Null);
		assert_eq!(kind, ConstantKind::nullable(ConstantType::Unknown));
		assert_eq!(kind.to_string(), "unknown or null");
	}

	#[test]
	fn test_containers_are_not_nullable() {
		let array = Constant::Array(vec![Constant::Integer(1), Constant::Null]);
		assert_eq!(classify(&array), ConstantKind::new(ConstantType::Array));

		let tuple = Constant::Tuple(vec![Constant::Integer(1), Constant::String("a".into())]);
		assert_eq!(classify(&tuple), ConstantKind::new(ConstantType::Tuple));
	}

	#[test]
	fn test_unknown_is_accepted_everywhere() {
		let all = [
			ConstantType::Integer,
			ConstantType::Float,
			ConstantType::String,
			ConstantType::Boolean,
			ConstantType::Array,
			ConstantType::Tuple,
			ConstantType::Date,
			ConstantType::DateTime,
			ConstantType::Uuid,
			ConstantType::Unknown,
		];
		for ty in all {
			assert!(ty.accepts(ConstantType::Unknown), "{ty} rejected unknown");
			assert!(ConstantType::Unknown.accepts(ty), "unknown rejected {ty}");
		}
		assert!(!ConstantType::Integer.accepts(ConstantType::String));
	}

	#[test]
	fn test_names() {
		assert_eq!(ConstantType::Integer.to_string(), "int");
		assert_eq!(ConstantType::String.to_string(), "str");
		assert_eq!(ConstantType::DateTime.to_string(), "datetime");
	}
}
