// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
	rule::rules_for,
	signature::{AggregateSignature, FunctionSignature, LanguageFunctionSignature},
	table::{aggregate::AGGREGATES, clickhouse::FUNCTIONS, language::LANGUAGE_FUNCTIONS},
};

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::load);

/// The process-wide registry. Built on first use and never mutated.
pub fn registry() -> &'static FunctionRegistry {
	&REGISTRY
}

/// Result of looking a name up across every namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
	Function(&'static FunctionSignature),
	Aggregate(&'static AggregateSignature),
	Language(&'static LanguageFunctionSignature),
}

impl Resolved {
	pub fn name(&self) -> &'static str {
		match self {
			Resolved::Function(signature) => signature.source,
			Resolved::Aggregate(signature) => signature.name,
			Resolved::Language(signature) => signature.name,
		}
	}
}

/// Three disjoint namespaces of callable names. Lookups are case-sensitive.
pub struct FunctionRegistry {
	functions: HashMap<&'static str, FunctionSignature>,
	aggregates: HashMap<&'static str, &'static AggregateSignature>,
	language: HashMap<&'static str, &'static LanguageFunctionSignature>,
}

impl FunctionRegistry {
	fn load() -> Self {
		let functions: HashMap<_, _> = FUNCTIONS
			.iter()
			.map(|signature| (signature.source, signature.with_rules(rules_for(signature.source))))
			.collect();
		let aggregates: HashMap<_, _> = AGGREGATES.iter().map(|signature| (signature.name, signature)).collect();
		let language: HashMap<_, _> =
			LANGUAGE_FUNCTIONS.iter().map(|signature| (signature.name, signature)).collect();

		debug_assert_eq!(functions.len(), FUNCTIONS.len(), "duplicate function name");
		debug_assert_eq!(aggregates.len(), AGGREGATES.len(), "duplicate aggregate name");

		debug!(
			functions = functions.len(),
			aggregates = aggregates.len(),
			language = language.len(),
			"function registry loaded"
		);

		Self {
			functions,
			aggregates,
			language,
		}
	}

	pub fn resolve(&self, name: &str) -> Option<&FunctionSignature> {
		self.functions.get(name)
	}

	pub fn resolve_aggregate(&self, name: &str) -> Option<&'static AggregateSignature> {
		self.aggregates.get(name).copied()
	}

	pub fn resolve_language_function(&self, name: &str) -> Option<&'static LanguageFunctionSignature> {
		self.language.get(name).copied()
	}

	/// Aggregates are tried first, then ClickHouse functions, then HogQL
	/// language functions. The namespaces never overlap, so the order only
	/// decides which lookup pays for a miss.
	pub fn lookup(&'static self, name: &str) -> Option<Resolved> {
		if let Some(signature) = self.resolve_aggregate(name) {
			return Some(Resolved::Aggregate(signature));
		}
		if let Some(signature) = self.resolve(name) {
			return Some(Resolved::Function(signature));
		}
		self.resolve_language_function(name).map(Resolved::Language)
	}

	pub fn functions(&self) -> impl Iterator<Item = &FunctionSignature> {
		self.functions.values()
	}

	pub fn aggregates(&self) -> impl Iterator<Item = &'static AggregateSignature> + '_ {
		self.aggregates.values().copied()
	}

	pub fn language_functions(&self) -> impl Iterator<Item = &'static LanguageFunctionSignature> + '_ {
		self.language.values().copied()
	}
}

pub fn resolve(name: &str) -> Option<&'static FunctionSignature> {
	registry().resolve(name)
}

pub fn resolve_aggregate(name: &str) -> Option<&'static AggregateSignature> {
	registry().resolve_aggregate(name)
}

pub fn resolve_language_function(name: &str) -> Option<&'static LanguageFunctionSignature> {
	registry().resolve_language_function(name)
}

pub fn lookup(name: &str) -> Option<Resolved> {
	registry().lookup(name)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::rule::SpecialRuleSet;

	#[test]
	fn test_resolve_plus() {
		let signature = resolve("plus").unwrap();
		assert_eq!(signature.target, "plus");
		assert_eq!((signature.min_args, signature.max_args), (Some(2), Some(2)));
		assert!(signature.rules.is_empty());
	}

	#[test]
	fn test_resolve_is_case_sensitive() {
		assert!(resolve("now").is_some());
		assert!(resolve("NOW").is_some());
		assert!(resolve("Now").is_none());
		assert!(resolve("PLUS").is_none());
	}

	#[test]
	fn test_unknown_names() {
		assert!(lookup("sleepEachRow").is_none());
		assert!(lookup("arrayReduce").is_none());
		assert!(lookup("").is_none());
	}

	#[test]
	fn test_datetime_targets_are_or_null() {
		for name in ["toDateTime", "parseDateTime", "parseDateTimeBestEffort"] {
			let signature = resolve(name).unwrap();
			assert!(signature.rules.contains(SpecialRuleSet::PREFER_OR_NULL_VARIANT));
			assert!(signature.target.ends_with("OrNull"), "{name} -> {}", signature.target);
		}
	}

	#[test]
	fn test_now_targets_now64() {
		assert_eq!(resolve("now").unwrap().target, "now64");
		assert_eq!(resolve("NOW").unwrap().target, "now64");
		assert_eq!(resolve("now").unwrap().rules, SpecialRuleSet::ADD_TIMEZONE_ARG);
	}

	#[test]
	fn test_every_rule_names_a_known_function() {
		for (name, _) in crate::rule::RULES {
			assert!(resolve(name).is_some(), "rule attached to unknown function {name}");
		}
	}

	#[test]
	fn test_namespaces_are_disjoint() {
		let functions: HashSet<_> = registry().functions().map(|s| s.source).collect();
		let aggregates: HashSet<_> = registry().aggregates().map(|s| s.name).collect();
		let language: HashSet<_> = registry().language_functions().map(|s| s.name).collect();

		assert!(functions.is_disjoint(&aggregates));
		assert!(functions.is_disjoint(&language));
		assert!(aggregates.is_disjoint(&language));
	}

	#[test]
	fn test_min_never_exceeds_max() {
		for signature in registry().functions() {
			if let (Some(min), Some(max)) = (signature.min_args, signature.max_args) {
				assert!(min <= max, "{}", signature.source);
			}
		}
		for signature in registry().aggregates() {
			if let Some(max) = signature.max_args {
				assert!(signature.min_args <= max, "{}", signature.name);
			}
		}
	}

	#[test]
	fn test_conditional_aggregates_take_one_more_argument() {
		for signature in registry().aggregates() {
			let Some(base) = signature.conditional_base().and_then(resolve_aggregate) else {
				continue;
			};
			assert_eq!(signature.min_args, base.min_args + 1, "{}", signature.name);
			assert_eq!(signature.max_args, base.max_args.map(|max| max + 1), "{}", signature.name);
		}
	}

	#[test]
	fn test_aggregate_bounds() {
		let count = resolve_aggregate("count").unwrap();
		assert_eq!((count.min_args, count.max_args), (0, Some(1)));
		let count_if = resolve_aggregate("countIf").unwrap();
		assert_eq!((count_if.min_args, count_if.max_args), (1, Some(2)));
		let uniq = resolve_aggregate("uniq").unwrap();
		assert_eq!((uniq.min_args, uniq.max_args), (1, None));
	}

	#[test]
	fn test_language_functions() {
		let sparkline = resolve_language_function("sparkline").unwrap();
		assert_eq!((sparkline.min_args, sparkline.max_args), (1, Some(1)));
		assert!(resolve_language_function("cohort").is_some());
		assert!(resolve("sparkline").is_none());
	}

	#[test]
	fn test_lookup_routes_by_namespace() {
		assert!(matches!(lookup("sum"), Some(Resolved::Aggregate(_))));
		assert!(matches!(lookup("toString"), Some(Resolved::Function(_))));
		assert!(matches!(lookup("cohort"), Some(Resolved::Language(_))));
		assert_eq!(lookup("sumIf").unwrap().name(), "sumIf");
	}
}
