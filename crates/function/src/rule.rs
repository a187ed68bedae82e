// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per-function rewrite rules applied while compiling a call.

/// A rewrite a function call must go through before it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialRule {
	/// Append the context timezone as a trailing argument.
	AddTimezoneArg,
	/// The target must be the null-returning variant of the function.
	PreferOrNullVariant,
	/// The first argument must be a DateTime with whole-second precision.
	FirstArgMustBeNonFractionalDatetime,
}

bitflags::bitflags! {
	/// A set of rewrite rules attached to a function signature.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct SpecialRuleSet: u8 {
		const ADD_TIMEZONE_ARG = 1 << 0;
		const PREFER_OR_NULL_VARIANT = 1 << 1;
		const FIRST_ARG_MUST_BE_NON_FRACTIONAL_DATETIME = 1 << 2;
	}
}

impl SpecialRule {
	pub const fn as_set(self) -> SpecialRuleSet {
		match self {
			Self::AddTimezoneArg => SpecialRuleSet::ADD_TIMEZONE_ARG,
			Self::PreferOrNullVariant => SpecialRuleSet::PREFER_OR_NULL_VARIANT,
			Self::FirstArgMustBeNonFractionalDatetime => SpecialRuleSet::FIRST_ARG_MUST_BE_NON_FRACTIONAL_DATETIME,
		}
	}
}

impl From<SpecialRule> for SpecialRuleSet {
	fn from(rule: SpecialRule) -> Self {
		rule.as_set()
	}
}

impl FromIterator<SpecialRule> for SpecialRuleSet {
	fn from_iter<I: IntoIterator<Item = SpecialRule>>(iter: I) -> Self {
		let mut set = SpecialRuleSet::empty();
		for rule in iter {
			set |= rule.as_set();
		}
		set
	}
}

/// Rules keyed by the HogQL name of the function they apply to.
pub(crate) static RULES: &[(&str, SpecialRule)] = &[
	("now", SpecialRule::AddTimezoneArg),
	("NOW", SpecialRule::AddTimezoneArg),
	("toDateTime", SpecialRule::AddTimezoneArg),
	("parseDateTime", SpecialRule::AddTimezoneArg),
	("parseDateTimeBestEffort", SpecialRule::AddTimezoneArg),
	("toDateTime", SpecialRule::PreferOrNullVariant),
	("parseDateTime", SpecialRule::PreferOrNullVariant),
	("parseDateTimeBestEffort", SpecialRule::PreferOrNullVariant),
	("tumble", SpecialRule::FirstArgMustBeNonFractionalDatetime),
	("tumbleStart", SpecialRule::FirstArgMustBeNonFractionalDatetime),
	("tumbleEnd", SpecialRule::FirstArgMustBeNonFractionalDatetime),
	("hop", SpecialRule::FirstArgMustBeNonFractionalDatetime),
	("hopStart", SpecialRule::FirstArgMustBeNonFractionalDatetime),
	("hopEnd", SpecialRule::FirstArgMustBeNonFractionalDatetime),
];

/// All rules attached to `source`.
pub fn rules_for(source: &str) -> SpecialRuleSet {
	RULES.iter().filter(|(name, _)| *name == source).map(|(_, rule)| *rule).collect()
}

/// HogQL names of every function carrying `rule`.
pub fn functions_with(rule: SpecialRule) -> impl Iterator<Item = &'static str> {
	RULES.iter().filter(move |(_, r)| *r == rule).map(|(name, _)| *name)
}
