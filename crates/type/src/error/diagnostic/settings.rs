// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Settings request names a key outside the closed schema
pub fn unknown_setting_key(key: String, known: &[&str]) -> Diagnostic {
	Diagnostic {
		code: "SETTINGS_001".to_string(),
		statement: None,
		message: format!("Unknown query setting '{}'", key),
		fragment: Fragment::internal(key),
		label: Some("unknown setting".to_string()),
		help: Some(format!("Supported settings are: {}", known.join(", "))),
		notes: vec!["Settings are not passed through to the database unless they are part of the schema".to_string()],
		cause: None,
	}
}

/// Settings request holds a value outside the key's constraint
pub fn invalid_setting_value(key: String, value: String, expected: String) -> Diagnostic {
	Diagnostic {
		code: "SETTINGS_002".to_string(),
		statement: None,
		message: format!("Invalid value {} for query setting '{}'", value, key),
		fragment: Fragment::internal(key),
		label: Some("invalid setting value".to_string()),
		help: Some(format!("Expected {}", expected)),
		notes: vec![],
		cause: None,
	}
}
