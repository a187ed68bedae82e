// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

impl Deref for StatementLine {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

impl Deref for StatementColumn {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Source location of the text a diagnostic points at.
///
/// The parser is not part of this workspace, so positions only exist when the
/// caller attaches them to the nodes it hands in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
	/// No fragment information available
	#[default]
	None,

	/// Fragment from a query statement with position information
	Statement {
		text: String,
		line: StatementLine,
		column: StatementColumn,
	},

	/// Fragment produced by the compiler itself
	Internal {
		text: String,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::Statement {
				line,
				..
			} => *line,
			_ => StatementLine(1),
		}
	}

	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::Statement {
				column,
				..
			} => *column,
			_ => StatementColumn(0),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}

	/// Returns this fragment, or an internal fragment holding `text` when no
	/// location is known.
	pub fn or_internal(self, text: &str) -> Self {
		match self {
			Fragment::None => Fragment::internal(text),
			other => other,
		}
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}
