// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod registry;
pub mod rule;
pub mod signature;
mod table;

pub use registry::{
	FunctionRegistry, Resolved, lookup, registry, resolve, resolve_aggregate, resolve_language_function,
};
pub use rule::{SpecialRule, SpecialRuleSet};
pub use signature::{AggregateSignature, Arity, FunctionSignature, LanguageFunctionSignature};
