// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use hogql_function::{Resolved, lookup};
use tracing::{debug, instrument};

use crate::{
	ast::{Call, Expr},
	context::CompileContext,
	error::CompileError,
	rewrite::{check_arity, rewrite_at},
};

/// Compiles one call node. Arguments are taken as they are; nested calls must
/// already be compiled.
///
/// Aggregates and HogQL language functions keep their name and arguments once
/// their arity checks out. ClickHouse functions go through [`rewrite_at`].
#[instrument(name = "compiler::call::compile", level = "debug", skip(call, ctx), fields(function = %call.name))]
pub fn compile_call(call: Call, ctx: &CompileContext) -> Result<Expr, CompileError> {
	let fragment = call.name_fragment();

	match lookup(&call.name) {
		None => {
			debug!(function = %call.name, "rejected unknown function");
			Err(CompileError::UnknownFunction {
				fragment,
			})
		}
		Some(Resolved::Aggregate(signature)) => {
			check_arity(Some(signature.min_args), signature.max_args, call.args.len(), &fragment)?;
			Ok(Expr::Call(call))
		}
		Some(Resolved::Language(signature)) => {
			check_arity(Some(signature.min_args), signature.max_args, call.args.len(), &fragment)?;
			Ok(Expr::Call(call))
		}
		Some(Resolved::Function(signature)) => {
			let rewritten = rewrite_at(signature, call.args, &ctx.timezone, fragment.clone())?;
			Ok(Expr::Call(rewritten.into_call().with_fragment(call.fragment)))
		}
	}
}

/// Compiles every call in `expr`, innermost first, keeping argument order.
pub fn compile(expr: Expr, ctx: &CompileContext) -> Result<Expr, CompileError> {
	match expr {
		Expr::Call(call) => {
			let args = call.args.into_iter().map(|arg| compile(arg, ctx)).collect::<Result<Vec<_>, _>>()?;
			compile_call(
				Call {
					args,
					..call
				},
				ctx,
			)
		}
		other => Ok(other),
	}
}

#[cfg(test)]
mod tests {
	use hogql_type::Fragment;

	use super::*;

	fn ctx() -> CompileContext {
		CompileContext::new("UTC")
	}

	#[test]
	fn test_unknown_function() {
		let err = compile_call(Call::new("sleepEachRow", vec![Expr::constant(3i64)]), &ctx()).unwrap_err();
		assert_eq!(
			err,
			CompileError::UnknownFunction {
				fragment: Fragment::internal("sleepEachRow")
			}
		);
	}

	#[test]
	fn test_unknown_function_keeps_statement_fragment() {
		let fragment = Fragment::statement("sleep", 1, 8);
		let call = Call::new("sleep", vec![]).with_fragment(fragment.clone());
		assert_eq!(
			compile_call(call, &ctx()),
			Err(CompileError::UnknownFunction {
				fragment
			})
		);
	}

	#[test]
	fn test_aggregate_passes_through() {
		let call = Call::new("countIf", vec![Expr::field(["event"]), Expr::constant(true)]);
		assert_eq!(compile_call(call.clone(), &ctx()), Ok(Expr::Call(call)));
	}

	#[test]
	fn test_aggregate_arity() {
		let call = Call::new("sum", vec![]);
		assert!(matches!(compile_call(call, &ctx()), Err(CompileError::ArityMismatch { actual: 0, .. })));
	}

	#[test]
	fn test_language_function_is_not_expanded() {
		let call = Call::new("cohort", vec![Expr::constant(7i64)]);
		assert_eq!(compile_call(call.clone(), &ctx()), Ok(Expr::Call(call)));
		assert!(compile_call(Call::new("sparkline", vec![]), &ctx()).is_err());
	}

	#[test]
	fn test_scalar_is_rewritten() {
		let call = Call::new("NOW", vec![]);
		let compiled = compile_call(call, &CompileContext::new("America/New_York")).unwrap();
		assert_eq!(compiled.to_string(), "now64('America/New_York')");
	}

	#[test]
	fn test_compile_nested() {
		let expr = Expr::call(
			"toStartOfDay",
			vec![Expr::call("toDateTime", vec![Expr::field(["properties", "$sent_at"])])],
		);
		let compiled = compile(expr, &ctx()).unwrap();
		assert_eq!(
			compiled.to_string(),
			"toStartOfDay(parseDateTime64BestEffortOrNull(properties.`$sent_at`, 'UTC'))"
		);
	}

	#[test]
	fn test_compile_nested_failure_surfaces() {
		let expr = Expr::call("plus", vec![Expr::call("nope", vec![]), Expr::constant(1i64)]);
		assert!(matches!(compile(expr, &ctx()), Err(CompileError::UnknownFunction { .. })));
	}
}
