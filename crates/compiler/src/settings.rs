// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Closed schema of query settings forwarded to ClickHouse.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::error::SettingsError;

/// Validated settings accompanying a compiled query. Always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySettings {
	pub readonly: u8,
	pub max_execution_time: u64,
}

impl Default for QuerySettings {
	fn default() -> Self {
		Self {
			readonly: 2,
			max_execution_time: 60,
		}
	}
}

impl QuerySettings {
	/// `key=value` pairs in schema order.
	pub fn to_clause(&self) -> String {
		SCHEMA.iter().map(|setting| format!("{}={}", setting.key, (setting.get)(self))).collect::<Vec<_>>().join(", ")
	}
}

impl Display for QuerySettings {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_clause())
	}
}

struct SettingDescriptor {
	key: &'static str,
	min: i64,
	/// Open-ended when `None`
	max: Option<i64>,
	get: fn(&QuerySettings) -> i64,
	set: fn(&mut QuerySettings, i64),
}

impl SettingDescriptor {
	fn admits(&self, value: i64) -> bool {
		value >= self.min && self.max.is_none_or(|max| value <= max)
	}

	fn expected(&self) -> String {
		match self.max {
			Some(max) => format!("an integer between {} and {}", self.min, max),
			None => format!("an integer of at least {}", self.min),
		}
	}
}

static SCHEMA: &[SettingDescriptor] = &[
	SettingDescriptor {
		key: "readonly",
		min: 0,
		max: Some(2),
		get: |settings| settings.readonly as i64,
		set: |settings, value| settings.readonly = value as u8,
	},
	SettingDescriptor {
		key: "max_execution_time",
		min: 1,
		max: None,
		get: |settings| settings.max_execution_time as i64,
		set: |settings, value| settings.max_execution_time = value as u64,
	},
];

/// Recognised setting keys in schema order.
pub fn schema_keys() -> impl Iterator<Item = &'static str> {
	SCHEMA.iter().map(|setting| setting.key)
}

/// Validates `requested` against the schema and fills every absent key with
/// its default. A JSON `null` selects the default too. Nothing is applied
/// unless the whole request validates.
#[instrument(name = "compiler::settings::enforce", level = "debug", skip(requested))]
pub fn enforce(requested: &Map<String, Value>) -> Result<QuerySettings, SettingsError> {
	let mut settings = QuerySettings::default();

	for (key, value) in requested {
		let Some(setting) = SCHEMA.iter().find(|setting| setting.key == key) else {
			debug!(key = %key, "rejected unknown query setting");
			return Err(SettingsError::UnknownSettingKey {
				key: key.clone(),
			});
		};

		if value.is_null() {
			continue;
		}

		match value.as_i64() {
			Some(v) if setting.admits(v) => (setting.set)(&mut settings, v),
			_ => {
				debug!(key = %key, value = %value, "rejected query setting value");
				return Err(SettingsError::InvalidSettingValue {
					key: key.clone(),
					value: value.to_string(),
					expected: setting.expected(),
				});
			}
		}
	}

	Ok(settings)
}
