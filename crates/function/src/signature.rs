// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hogql_type::error::diagnostic::function::describe_arity;

use crate::rule::SpecialRuleSet;

/// Inclusive argument-count bounds. `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
	pub min: Option<usize>,
	pub max: Option<usize>,
}

impl Arity {
	pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
		Self {
			min,
			max,
		}
	}

	pub const fn exact(n: usize) -> Self {
		Self::new(Some(n), Some(n))
	}

	pub fn accepts(&self, count: usize) -> bool {
		self.min.is_none_or(|min| count >= min) && self.max.is_none_or(|max| count <= max)
	}
}

impl Display for Arity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&describe_arity(self.min, self.max))
	}
}

/// A ClickHouse function callable from HogQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
	/// Name as written in HogQL, case-sensitive
	pub source: &'static str,
	/// Name emitted into ClickHouse SQL
	pub target: &'static str,
	pub min_args: Option<usize>,
	pub max_args: Option<usize>,
	pub rules: SpecialRuleSet,
}

impl FunctionSignature {
	pub const fn new(
		source: &'static str,
		target: &'static str,
		min_args: Option<usize>,
		max_args: Option<usize>,
	) -> Self {
		Self {
			source,
			target,
			min_args,
			max_args,
			rules: SpecialRuleSet::empty(),
		}
	}

	pub const fn with_rules(mut self, rules: SpecialRuleSet) -> Self {
		self.rules = rules;
		self
	}

	pub const fn arity(&self) -> Arity {
		Arity::new(self.min_args, self.max_args)
	}
}

/// An aggregate function. Names are passed through to ClickHouse unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateSignature {
	pub name: &'static str,
	pub min_args: usize,
	pub max_args: Option<usize>,
}

impl AggregateSignature {
	pub const fn new(name: &'static str, min_args: usize, max_args: Option<usize>) -> Self {
		Self {
			name,
			min_args,
			max_args,
		}
	}

	pub const fn arity(&self) -> Arity {
		Arity::new(Some(self.min_args), self.max_args)
	}

	/// Name of the aggregate this one filters, when it is an `If` variant.
	pub fn conditional_base(&self) -> Option<&'static str> {
		self.name.strip_suffix("If").filter(|base| !base.is_empty())
	}
}

/// A function implemented by the HogQL compiler rather than by ClickHouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageFunctionSignature {
	pub name: &'static str,
	pub min_args: usize,
	pub max_args: Option<usize>,
}

impl LanguageFunctionSignature {
	pub const fn new(name: &'static str, min_args: usize, max_args: Option<usize>) -> Self {
		Self {
			name,
			min_args,
			max_args,
		}
	}

	pub const fn arity(&self) -> Arity {
		Arity::new(Some(self.min_args), self.max_args)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_arity_accepts() {
		let bounded = Arity::new(Some(1), Some(3));
		assert!(!bounded.accepts(0));
		assert!(bounded.accepts(1));
		assert!(bounded.accepts(3));
		assert!(!bounded.accepts(4));

		let open = Arity::new(None, None);
		assert!(open.accepts(0));
		assert!(open.accepts(1000));

		let at_least = Arity::new(Some(2), None);
		assert!(!at_least.accepts(1));
		assert!(at_least.accepts(64));
	}

	#[test]
	fn test_arity_display() {
		assert_eq!(Arity::exact(2).to_string(), "2");
		assert_eq!(Arity::new(Some(1), None).to_string(), "at least 1");
	}

	#[test]
	fn test_conditional_base() {
		assert_eq!(AggregateSignature::new("countIf", 1, Some(2)).conditional_base(), Some("count"));
		assert_eq!(AggregateSignature::new("sum", 1, Some(1)).conditional_base(), None);
	}
}
