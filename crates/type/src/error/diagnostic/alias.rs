// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Alias collides with the reserved vocabulary
pub fn reserved_alias(alias: Fragment) -> Diagnostic {
	let name = alias.text().to_string();
	Diagnostic {
		code: "ALIAS_001".to_string(),
		statement: None,
		message: format!("Alias '{}' is a reserved keyword", name),
		fragment: alias,
		label: Some("reserved keyword".to_string()),
		help: Some("Choose a different alias".to_string()),
		notes: vec!["Reserved keywords are true, false, null and the implicit team_id column".to_string()],
		cause: None,
	}
}
