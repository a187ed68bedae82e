// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use hogql_type::{
	Error, Fragment,
	error::{
		IntoDiagnostic,
		diagnostic::{Diagnostic, alias, function, function::describe_arity, settings},
	},
};

use crate::settings::schema_keys;

fn arity_message(fragment: &Fragment, actual: &usize, min: &Option<usize>, max: &Option<usize>) -> String {
	let noun = if *min == Some(1) && *max == Some(1) {
		"argument"
	} else {
		"arguments"
	};
	format!("Function '{}' expects {} {}, got {}", fragment, describe_arity(*min, *max), noun, actual)
}

/// Failures while compiling a single call or binding an alias.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
	#[error("Unsupported function call '{fragment}'")]
	UnknownFunction {
		fragment: Fragment,
	},

	#[error("{}", arity_message(.fragment, .actual, .min, .max))]
	ArityMismatch {
		fragment: Fragment,
		actual: usize,
		min: Option<usize>,
		max: Option<usize>,
	},

	#[error("Function '{fragment}' argument {} is not allowed: {reason}", .index + 1)]
	IllegalArgumentShape {
		fragment: Fragment,
		index: usize,
		reason: String,
	},

	#[error("Function '{fragment}' resolves to throwing variant '{target}'")]
	ThrowingVariant {
		fragment: Fragment,
		target: String,
	},

	#[error("Alias '{fragment}' is a reserved keyword")]
	ReservedAlias {
		fragment: Fragment,
	},
}

impl IntoDiagnostic for CompileError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CompileError::UnknownFunction {
				fragment,
			} => function::unknown_function(fragment),
			CompileError::ArityMismatch {
				fragment,
				actual,
				min,
				max,
			} => function::arity_mismatch(fragment, actual, min, max),
			CompileError::IllegalArgumentShape {
				fragment,
				index,
				reason,
			} => function::illegal_argument_shape(fragment, index, reason),
			CompileError::ThrowingVariant {
				fragment,
				target,
			} => function::throwing_variant(fragment, target),
			CompileError::ReservedAlias {
				fragment,
			} => alias::reserved_alias(fragment),
		}
	}
}

impl From<CompileError> for Error {
	fn from(err: CompileError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Failures while enforcing a query settings request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
	#[error("Unknown query setting '{key}'")]
	UnknownSettingKey {
		key: String,
	},

	#[error("Invalid value {value} for query setting '{key}'")]
	InvalidSettingValue {
		key: String,
		value: String,
		expected: String,
	},
}

impl IntoDiagnostic for SettingsError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SettingsError::UnknownSettingKey {
				key,
			} => {
				let known: Vec<&str> = schema_keys().collect();
				settings::unknown_setting_key(key, &known)
			}
			SettingsError::InvalidSettingValue {
				key,
				value,
				expected,
			} => settings::invalid_setting_value(key, value, expected),
		}
	}
}

impl From<SettingsError> for Error {
	fn from(err: SettingsError) -> Self {
		Error(err.into_diagnostic())
	}
}
