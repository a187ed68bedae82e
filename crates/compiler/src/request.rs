// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A JSON compile request covering one call expression and its query settings.

use std::fmt::{Display, Formatter};

use hogql_type::{
	Error, Result,
	error::diagnostic::{Diagnostic, request::invalid_request},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{
	ast::Expr,
	call::compile,
	context::CompileContext,
	keyword::bind_alias,
	limit::effective_limit,
	settings::{QuerySettings, enforce},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompileRequest {
	pub call: Expr,
	#[serde(default)]
	pub timezone: Option<String>,
	#[serde(default)]
	pub alias: Option<String>,
	#[serde(default)]
	pub limit: Option<u64>,
	#[serde(default)]
	pub settings: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
	pub call: Expr,
	pub alias: Option<String>,
	pub limit: u64,
	pub settings: QuerySettings,
}

impl CompileRequest {
	pub fn from_json(text: &str) -> Result<Self> {
		serde_json::from_str(text).map_err(|err| {
			let column = (err.column() as u32).saturating_sub(1);
			let diagnostic: Diagnostic = invalid_request(err.to_string(), err.line() as u32, column);
			Error(diagnostic.with_statement(text))
		})
	}

	fn context(&self) -> CompileContext {
		self.timezone.clone().map(CompileContext::new).unwrap_or_default()
	}

	/// Binds the alias, compiles the call tree, then enforces the settings.
	/// The alias is checked before any function is resolved.
	#[instrument(name = "compiler::request::run", level = "debug", skip(self))]
	pub fn run(self) -> Result<CompileOutput> {
		if let Some(alias) = &self.alias {
			bind_alias(alias)?;
		}

		let ctx = self.context();
		let call = compile(self.call, &ctx)?;
		let settings = enforce(&self.settings)?;

		Ok(CompileOutput {
			call,
			alias: self.alias,
			limit: effective_limit(self.limit),
			settings,
		})
	}
}

impl Display for CompileOutput {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.alias {
			Some(alias) => writeln!(f, "call: {} AS {}", self.call, alias)?,
			None => writeln!(f, "call: {}", self.call)?,
		}
		writeln!(f, "limit: {}", self.limit)?;
		writeln!(f, "settings: {}", self.settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_minimal_request() {
		let request = CompileRequest::from_json(r#"{"call": {"call": {"name": "now"}}}"#).unwrap();
		let output = request.run().unwrap();
		assert_eq!(output.to_string(), "call: now64('UTC')\nlimit: 100\nsettings: readonly=2, max_execution_time=60\n");
	}

	#[test]
	fn test_alias_checked_first() {
		let request = CompileRequest::from_json(r#"{"call": {"call": {"name": "nope"}}, "alias": "team_id"}"#).unwrap();
		let err = request.run().unwrap_err();
		assert_eq!(err.code, "ALIAS_001");
	}

	#[test]
	fn test_settings_checked() {
		let request =
			CompileRequest::from_json(r#"{"call": {"call": {"name": "now"}}, "settings": {"max_threads": 4}}"#)
				.unwrap();
		assert_eq!(request.run().unwrap_err().code, "SETTINGS_001");
	}

	#[test]
	fn test_malformed_json() {
		let err = CompileRequest::from_json(r#"{"call": }"#).unwrap_err();
		assert_eq!(err.code, "REQUEST_001");
		assert_eq!(err.statement.as_deref(), Some(r#"{"call": }"#));
	}

	#[test]
	fn test_unknown_request_field() {
		let err = CompileRequest::from_json(r#"{"call": {"field": ["x"]}, "tz": "UTC"}"#).unwrap_err();
		assert_eq!(err.code, "REQUEST_001");
	}

	#[test]
	fn test_timezone_context() {
		let request = CompileRequest::from_json(r#"{"call": {"field": ["x"]}, "timezone": "Asia/Tokyo"}"#).unwrap();
		assert_eq!(request.context().timezone, "Asia/Tokyo");
	}

	#[test]
	fn test_team_id_is_not_a_request_field() {
		let err = CompileRequest::from_json(r#"{"call": {"field": ["x"]}, "team_id": 7}"#).unwrap_err();
		assert_eq!(err.code, "REQUEST_001");
	}

	#[test]
	fn test_float_literals_render_as_floats() {
		let request = CompileRequest::from_json(
			r#"{"call": {"call": {"name": "divide", "args": [{"constant": {"float": 2.0}}, {"constant": {"float": 1e300}}]}}}"#,
		)
		.unwrap();
		assert_eq!(request.run().unwrap().call.to_string(), "divide(2.0, 1e300)");
	}
}
