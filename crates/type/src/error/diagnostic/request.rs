// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Compile request could not be decoded
pub fn invalid_request(reason: String, line: u32, column: u32) -> Diagnostic {
	Diagnostic {
		code: "REQUEST_001".to_string(),
		statement: None,
		message: format!("Invalid compile request: {}", reason),
		fragment: Fragment::statement("", line, column),
		label: Some("malformed request".to_string()),
		help: Some(
			"A request is a JSON object with a 'call' expression and optional 'timezone', 'alias', 'limit' and 'settings'"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}
