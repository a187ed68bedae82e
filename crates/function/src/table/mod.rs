// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Static registry contents. Each table is a plain list of rows; `_` stands for
//! an unbounded side of an arity.

macro_rules! arity {
	(_) => {
		None
	};
	($n:literal) => {
		Some($n)
	};
}

macro_rules! functions {
	($($source:literal => $target:literal ($min:tt, $max:tt)),* $(,)?) => {
		pub(crate) static FUNCTIONS: &[$crate::signature::FunctionSignature] = &[
			$($crate::signature::FunctionSignature::new($source, $target, arity!($min), arity!($max))),*
		];
	};
}

macro_rules! aggregates {
	($($name:literal ($min:literal, $max:tt)),* $(,)?) => {
		pub(crate) static AGGREGATES: &[$crate::signature::AggregateSignature] = &[
			$($crate::signature::AggregateSignature::new($name, $min, arity!($max))),*
		];
	};
}

macro_rules! language_functions {
	($($name:literal ($min:literal, $max:tt)),* $(,)?) => {
		pub(crate) static LANGUAGE_FUNCTIONS: &[$crate::signature::LanguageFunctionSignature] = &[
			$($crate::signature::LanguageFunctionSignature::new($name, $min, arity!($max))),*
		];
	};
}

pub(crate) mod aggregate;
pub(crate) mod clickhouse;
pub(crate) mod language;
