// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Reserved vocabulary.

use std::collections::HashMap;

use hogql_type::{Constant, Fragment};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::CompileError;

macro_rules! keyword_literal {
	( $( $variant:ident => $string:literal ),* $(,)? ) => {
		/// Identifiers that are literal values rather than column or alias names.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum KeywordLiteral {
			$( $variant ),*
		}

		impl KeywordLiteral {
			pub const fn as_str(&self) -> &'static str {
				match self {
					$( KeywordLiteral::$variant => $string ),*
				}
			}
		}

		static KEYWORD_LITERALS: Lazy<HashMap<&'static str, KeywordLiteral>> = Lazy::new(|| {
			let mut map = HashMap::new();
			$( map.insert($string, KeywordLiteral::$variant); )*
			map
		});
	};
}

// case-insensitive
keyword_literal! {
	True  => "true",
	False => "false",
	Null  => "null",
}

/// Implicit tenant-scoping column, matched exactly.
pub const TEAM_ID: &str = "team_id";

impl KeywordLiteral {
	pub fn parse(identifier: &str) -> Option<Self> {
		KEYWORD_LITERALS.get(identifier.to_ascii_lowercase().as_str()).copied()
	}

	pub fn constant(&self) -> Constant {
		match self {
			KeywordLiteral::True => Constant::Boolean(true),
			KeywordLiteral::False => Constant::Boolean(false),
			KeywordLiteral::Null => Constant::Null,
		}
	}
}

pub fn is_keyword_literal(identifier: &str) -> bool {
	KeywordLiteral::parse(identifier).is_some()
}

/// Keyword literals match in any case; `team_id` only in lowercase, so
/// `TEAM_ID` stays bindable.
pub fn is_reserved_keyword(identifier: &str) -> bool {
	identifier == TEAM_ID || is_keyword_literal(identifier)
}

/// The constant a keyword literal stands for. These never go through the
/// function registry.
pub fn keyword_literal(identifier: &str) -> Option<Constant> {
	KeywordLiteral::parse(identifier).map(|keyword| keyword.constant())
}

/// Rejects user-chosen aliases that collide with the reserved vocabulary.
pub fn bind_alias(alias: &str) -> Result<(), CompileError> {
	if is_reserved_keyword(alias) {
		debug!(alias, "rejected reserved alias");
		return Err(CompileError::ReservedAlias {
			fragment: Fragment::internal(alias),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_team_id_is_reserved() {
		assert!(is_reserved_keyword("team_id"));
		assert!(!is_keyword_literal("team_id"));
		assert!(!is_reserved_keyword("TEAM_ID"));
	}

	#[test]
	fn test_literals_are_reserved() {
		for keyword in ["true", "false", "null", "TRUE", "Null"] {
			assert!(is_keyword_literal(keyword), "{keyword}");
			assert!(is_reserved_keyword(keyword), "{keyword}");
		}
		assert!(!is_reserved_keyword("event"));
		assert!(!is_reserved_keyword("nullable"));
	}

	#[test]
	fn test_keyword_literal_constants() {
		assert_eq!(keyword_literal("true"), Some(Constant::Boolean(true)));
		assert_eq!(keyword_literal("FALSE"), Some(Constant::Boolean(false)));
		assert_eq!(keyword_literal("null"), Some(Constant::Null));
		assert_eq!(keyword_literal("team_id"), None);
	}

	#[test]
	fn test_bind_alias() {
		assert!(bind_alias("total").is_ok());
		assert_eq!(
			bind_alias("team_id"),
			Err(CompileError::ReservedAlias {
				fragment: Fragment::internal("team_id")
			})
		);
		assert!(bind_alias("true").is_err());
	}

	#[test]
	fn test_bind_alias_case() {
		assert!(bind_alias("TEAM_ID").is_ok());
		assert!(bind_alias("NULL").is_err());
	}

	#[test]
	fn test_as_str() {
		assert_eq!(KeywordLiteral::Null.as_str(), "null");
	}
}
