// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Turns a resolved ClickHouse function call into the exact call emitted.
//!
//! Steps run in a fixed order: arity check, datetime narrowing of the first
//! argument, OrNull confirmation, timezone injection.

use hogql_function::{FunctionSignature, SpecialRuleSet};
use hogql_type::{Constant, ConstantType, Fragment, classify};
use tracing::{debug, instrument, trace};

use crate::{
	ast::{Call, Expr},
	error::CompileError,
};

/// ClickHouse cast producing a whole-second DateTime.
const DATETIME_CAST: &str = "toDateTime";

/// Literal types [`DATETIME_CAST`] takes. Nulls and unknown literals pass too.
const DATETIME_CASTABLE: [ConstantType; 3] = [ConstantType::Integer, ConstantType::String, ConstantType::Date];

#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenCall {
	pub target: &'static str,
	pub args: Vec<Expr>,
}

impl RewrittenCall {
	pub fn into_call(self) -> Call {
		Call::new(self.target, self.args)
	}
}

impl From<RewrittenCall> for Expr {
	fn from(call: RewrittenCall) -> Self {
		Expr::Call(call.into_call())
	}
}

pub fn rewrite(signature: &FunctionSignature, args: Vec<Expr>, timezone: &str) -> Result<RewrittenCall, CompileError> {
	rewrite_at(signature, args, timezone, Fragment::internal(signature.source))
}

/// Like [`rewrite`], reporting failures against `fragment`.
#[instrument(name = "compiler::rewrite", level = "trace", skip(signature, args, fragment), fields(function = signature.source))]
pub fn rewrite_at(
	signature: &FunctionSignature,
	mut args: Vec<Expr>,
	timezone: &str,
	fragment: Fragment,
) -> Result<RewrittenCall, CompileError> {
	let count = args.len();

	check_arity(signature.min_args, signature.max_args, count, &fragment)?;

	if signature.rules.contains(SpecialRuleSet::FIRST_ARG_MUST_BE_NON_FRACTIONAL_DATETIME) {
		if let Some(first) = args.first_mut() {
			let arg = std::mem::replace(first, Expr::Constant(Constant::Null));
			*first = narrow_datetime(arg).map_err(|reason| {
				debug!(function = signature.source, %reason, "rejected first argument");
				CompileError::IllegalArgumentShape {
					fragment: fragment.clone(),
					index: 0,
					reason,
				}
			})?;
		}
	}

	if signature.rules.contains(SpecialRuleSet::PREFER_OR_NULL_VARIANT) && !signature.target.ends_with("OrNull") {
		debug!(function = signature.source, target = signature.target, "resolved to throwing variant");
		return Err(CompileError::ThrowingVariant {
			fragment,
			target: signature.target.to_string(),
		});
	}

	// The timezone slot sits right after the declared maximum.
	if signature.rules.contains(SpecialRuleSet::ADD_TIMEZONE_ARG) && signature.max_args.is_none_or(|max| count <= max)
	{
		trace!(function = signature.source, timezone, "appending timezone argument");
		args.push(Expr::Constant(Constant::String(timezone.to_string())));
	}

	Ok(RewrittenCall {
		target: signature.target,
		args,
	})
}

pub(crate) fn check_arity(
	min: Option<usize>,
	max: Option<usize>,
	count: usize,
	fragment: &Fragment,
) -> Result<(), CompileError> {
	let too_few = min.is_some_and(|min| count < min);
	let too_many = max.is_some_and(|max| count > max);
	if too_few || too_many {
		debug!(function = %fragment, count, "rejected argument count");
		return Err(CompileError::ArityMismatch {
			fragment: fragment.clone(),
			actual: count,
			min,
			max,
		});
	}
	Ok(())
}

/// Brings `arg` into whole-second DateTime form, or explains why it cannot be.
fn narrow_datetime(arg: Expr) -> Result<Expr, String> {
	match arg {
		Expr::Constant(ref constant) if constant.is_fractional_datetime() => {
			Err("DateTime literal has sub-second precision".to_string())
		}
		Expr::Constant(Constant::DateTime(_)) => Ok(arg),
		Expr::Constant(ref constant) => {
			let ty = classify(constant).ty;
			if DATETIME_CASTABLE.iter().any(|castable| castable.accepts(ty)) {
				Ok(cast_to_datetime(arg))
			} else {
				Err(format!("{} cannot be converted to DateTime", ty))
			}
		}
		Expr::Call(ref call) if call.name == DATETIME_CAST => Ok(arg),
		_ => Ok(cast_to_datetime(arg)),
	}
}

fn cast_to_datetime(arg: Expr) -> Expr {
	trace!("casting first argument to DateTime");
	Expr::call(DATETIME_CAST, vec![arg])
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use hogql_function::resolve;

	use super::*;

	fn string(value: &str) -> Expr {
		Expr::constant(value)
	}

	fn datetime(h: u32, m: u32, s: u32, milli: u32) -> Expr {
		let value = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_milli_opt(h, m, s, milli).unwrap();
		Expr::Constant(Constant::DateTime(value))
	}

	#[test]
	fn test_plain_function_keeps_arguments() {
		let signature = resolve("plus").unwrap();
		let rewritten = rewrite(signature, vec![Expr::constant(1i64), Expr::constant(2i64)], "UTC").unwrap();
		assert_eq!(rewritten.target, "plus");
		assert_eq!(rewritten.args, vec![Expr::constant(1i64), Expr::constant(2i64)]);
	}

	#[test]
	fn test_too_many_arguments() {
		let signature = resolve("plus").unwrap();
		let err = rewrite(signature, vec![string("a"), string("b"), string("c")], "UTC").unwrap_err();
		assert_eq!(
			err,
			CompileError::ArityMismatch {
				fragment: Fragment::internal("plus"),
				actual: 3,
				min: Some(2),
				max: Some(2),
			}
		);
	}

	#[test]
	fn test_too_few_arguments() {
		let signature = resolve("concat").unwrap();
		assert!(matches!(
			rewrite(signature, vec![string("a")], "UTC"),
			Err(CompileError::ArityMismatch { actual: 1, .. })
		));
	}

	#[test]
	fn test_now_gets_timezone() {
		let signature = resolve("now").unwrap();
		let rewritten = rewrite(signature, vec![], "Europe/Amsterdam").unwrap();
		assert_eq!(rewritten.target, "now64");
		assert_eq!(rewritten.args, vec![string("Europe/Amsterdam")]);
	}

	#[test]
	fn test_to_datetime_is_or_null_with_timezone() {
		let signature = resolve("toDateTime").unwrap();
		let rewritten = rewrite(signature, vec![string("2024-01-15")], "UTC").unwrap();
		assert_eq!(rewritten.target, "parseDateTime64BestEffortOrNull");
		assert_eq!(rewritten.args, vec![string("2024-01-15"), string("UTC")]);
	}

	#[test]
	fn test_explicit_timezone_slot_rejected_by_arity() {
		let signature = resolve("toDateTime").unwrap();
		assert!(matches!(
			rewrite(signature, vec![string("2024-01-15"), string("UTC")], "UTC"),
			Err(CompileError::ArityMismatch { .. })
		));
	}

	#[test]
	fn test_timezone_appended_after_declared_arguments() {
		let signature = FunctionSignature::new("stamp", "stampOrNull", Some(0), Some(1))
			.with_rules(SpecialRuleSet::ADD_TIMEZONE_ARG | SpecialRuleSet::PREFER_OR_NULL_VARIANT);
		let rewritten = rewrite(&signature, vec![string("x")], "UTC").unwrap();
		assert_eq!(rewritten.args, vec![string("x"), string("UTC")]);

		let unbounded = FunctionSignature::new("stamp", "stamp", None, None).with_rules(SpecialRuleSet::ADD_TIMEZONE_ARG);
		let rewritten = rewrite(&unbounded, vec![string("x")], "UTC").unwrap();
		assert_eq!(rewritten.args, vec![string("x"), string("UTC")]);
	}

	#[test]
	fn test_throwing_variant() {
		let signature = FunctionSignature::new("toDateTime", "toDateTime", Some(1), Some(1))
			.with_rules(SpecialRuleSet::PREFER_OR_NULL_VARIANT);
		assert_eq!(
			rewrite(&signature, vec![string("2024-01-15")], "UTC"),
			Err(CompileError::ThrowingVariant {
				fragment: Fragment::internal("toDateTime"),
				target: "toDateTime".to_string(),
			})
		);
	}

	#[test]
	fn test_tumble_whole_second_literal_kept() {
		let signature = resolve("tumble").unwrap();
		let interval = Expr::call("toIntervalMinute", vec![Expr::constant(5i64)]);
		let rewritten = rewrite(signature, vec![datetime(10, 30, 0, 0), interval.clone()], "UTC").unwrap();
		assert_eq!(rewritten.args, vec![datetime(10, 30, 0, 0), interval]);
	}

	#[test]
	fn test_tumble_fractional_literal_rejected() {
		let signature = resolve("tumble").unwrap();
		let interval = Expr::call("toIntervalMinute", vec![Expr::constant(5i64)]);
		let err = rewrite(signature, vec![datetime(10, 30, 0, 250), interval], "UTC").unwrap_err();
		assert!(matches!(err, CompileError::IllegalArgumentShape { index: 0, .. }));
	}

	#[test]
	fn test_hop_field_is_cast() {
		let signature = resolve("hopStart").unwrap();
		let rewritten = rewrite(signature, vec![Expr::field(["timestamp"])], "UTC").unwrap();
		assert_eq!(rewritten.args, vec![Expr::call("toDateTime", vec![Expr::field(["timestamp"])])]);
		assert_eq!(Expr::from(rewritten).to_string(), "hopStart(toDateTime(timestamp))");
	}

	#[test]
	fn test_narrowing_does_not_stack() {
		let signature = resolve("tumbleStart").unwrap();
		let once = rewrite(signature, vec![Expr::field(["timestamp"])], "UTC").unwrap();
		let twice = rewrite(signature, once.args.clone(), "UTC").unwrap();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_narrowing_rejects_non_temporal_constants() {
		let signature = resolve("tumbleStart").unwrap();
		for arg in [Expr::constant(1.5), Expr::constant(true), Expr::Constant(Constant::Array(vec![]))] {
			assert!(
				matches!(rewrite(signature, vec![arg.clone()], "UTC"), Err(CompileError::IllegalArgumentShape { .. })),
				"{arg}"
			);
		}
	}

	#[test]
	fn test_narrowing_casts_castable_constants() {
		let signature = resolve("tumbleStart").unwrap();
		for arg in [string("2024-01-15 10:30:00"), Expr::constant(1705314600i64), Expr::Constant(Constant::Null)] {
			let rewritten = rewrite(signature, vec![arg.clone()], "UTC").unwrap();
			assert_eq!(rewritten.args, vec![Expr::call("toDateTime", vec![arg])]);
		}
	}

	#[test]
	fn test_narrowing_casts_dates_and_unknown_literals() {
		let signature = resolve("hop").unwrap();
		let date = Expr::Constant(Constant::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
		let unknown = Expr::Constant(Constant::Unknown("{\"ts\": 1}".to_string()));
		for arg in [date, unknown] {
			let args = vec![arg.clone(), Expr::field(["hop_interval"]), Expr::field(["window_interval"])];
			let rewritten = rewrite(signature, args, "UTC").unwrap();
			assert_eq!(rewritten.args[0], Expr::call("toDateTime", vec![arg]));
		}
	}

	#[test]
	fn test_narrowing_rejects_uuid_and_tuple() {
		let signature = resolve("tumbleEnd").unwrap();
		let err = rewrite(signature, vec![Expr::Constant(Constant::Uuid(uuid::Uuid::nil()))], "UTC").unwrap_err();
		assert_eq!(
			err,
			CompileError::IllegalArgumentShape {
				fragment: Fragment::internal("tumbleEnd"),
				index: 0,
				reason: "uuid cannot be converted to DateTime".to_string(),
			}
		);
		assert!(rewrite(signature, vec![Expr::Constant(Constant::Tuple(vec![]))], "UTC").is_err());
	}

	#[test]
	fn test_deterministic() {
		let signature = resolve("parseDateTime").unwrap();
		let args = vec![string("2024-01-15"), string("%Y-%m-%d")];
		assert_eq!(rewrite(signature, args.clone(), "UTC"), rewrite(signature, args, "UTC"));
	}
}
