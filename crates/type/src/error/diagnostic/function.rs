// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Function is not present in any registry namespace
pub fn unknown_function(function: Fragment) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		statement: None,
		message: format!("Unsupported function call '{}'", name),
		fragment: function,
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec!["Function names are matched exactly, including letter case".to_string()],
		cause: None,
	}
}

/// Renders an arity bound the way it appears in messages: `2`, `1 to 3`,
/// `at least 2`, `at most 1`, `any number of`.
pub fn describe_arity(min: Option<usize>, max: Option<usize>) -> String {
	match (min, max) {
		(Some(min), Some(max)) if min == max => format!("{}", min),
		(Some(min), Some(max)) => format!("{} to {}", min, max),
		(Some(min), None) if min > 0 => format!("at least {}", min),
		(_, Some(max)) => format!("at most {}", max),
		_ => "any number of".to_string(),
	}
}

/// Function called with an argument count outside its declared bounds
pub fn arity_mismatch(function: Fragment, actual: usize, min: Option<usize>, max: Option<usize>) -> Diagnostic {
	let name = function.text().to_string();
	let expected = describe_arity(min, max);
	let plural = if matches!((min, max), (Some(1), Some(1))) {
		"argument"
	} else {
		"arguments"
	};
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		statement: None,
		message: format!("Function '{}' expects {} {}, got {}", name, expected, plural, actual),
		fragment: function,
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide {} {} to function {}", expected, plural, name)),
		notes: vec![],
		cause: None,
	}
}

/// Argument cannot be brought into the shape the target function requires
pub fn illegal_argument_shape(function: Fragment, index: usize, reason: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_004".to_string(),
		statement: None,
		message: format!("Function '{}' argument {} is not allowed: {}", name, index + 1, reason),
		fragment: function,
		label: Some("invalid argument".to_string()),
		help: Some("Pass a DateTime value with whole-second precision".to_string()),
		notes: vec![format!(
			"'{}' is evaluated on DateTime, sub-second DateTime64 values are rejected instead of truncated",
			name
		)],
		cause: None,
	}
}

/// Null-safe function resolved to a target that raises on invalid input
pub fn throwing_variant(function: Fragment, target: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_008".to_string(),
		statement: None,
		message: format!("Internal error in function {}: target '{}' is not an OrNull variant", name, target),
		fragment: function,
		label: Some("internal error".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
		cause: None,
	}
}
