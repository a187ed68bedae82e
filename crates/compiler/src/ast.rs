// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The slice of the HogQL syntax tree this crate consumes and produces.

use std::fmt::{self, Display, Formatter, Write};

use hogql_type::{Constant, Fragment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
	Constant(Constant),
	/// Dotted identifier chain, e.g. `properties.$browser`
	Field(Vec<String>),
	Call(Call),
}

/// A function or aggregate call. Arguments keep their written order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
	pub name: String,
	#[serde(default)]
	pub args: Vec<Expr>,
	#[serde(default, skip_serializing_if = "Fragment::is_none")]
	pub fragment: Fragment,
}

impl Call {
	pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
		Self {
			name: name.into(),
			args,
			fragment: Fragment::None,
		}
	}

	pub fn with_fragment(mut self, fragment: Fragment) -> Self {
		self.fragment = fragment;
		self
	}

	/// Fragment for diagnostics; falls back to the bare name.
	pub(crate) fn name_fragment(&self) -> Fragment {
		self.fragment.clone().or_internal(&self.name)
	}
}

impl Expr {
	pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
		Expr::Call(Call::new(name, args))
	}

	pub fn field<I, S>(chain: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Expr::Field(chain.into_iter().map(Into::into).collect())
	}

	pub fn constant(value: impl Into<Constant>) -> Self {
		Expr::Constant(value.into())
	}
}

impl From<Constant> for Expr {
	fn from(value: Constant) -> Self {
		Expr::Constant(value)
	}
}

impl From<Call> for Expr {
	fn from(call: Call) -> Self {
		Expr::Call(call)
	}
}

fn is_plain_identifier(identifier: &str) -> bool {
	let mut chars = identifier.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_identifier(f: &mut Formatter<'_>, identifier: &str) -> fmt::Result {
	if is_plain_identifier(identifier) {
		return f.write_str(identifier);
	}
	f.write_char('`')?;
	for c in identifier.chars() {
		match c {
			'`' => f.write_str("\\`")?,
			'\\' => f.write_str("\\\\")?,
			c => f.write_char(c)?,
		}
	}
	f.write_char('`')
}

impl Display for Call {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_identifier(f, &self.name)?;
		f.write_char('(')?;
		for (i, arg) in self.args.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", arg)?;
		}
		f.write_char(')')
	}
}

impl Display for Expr {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expr::Constant(constant) => write!(f, "{}", constant),
			Expr::Field(chain) => {
				for (i, part) in chain.iter().enumerate() {
					if i > 0 {
						f.write_char('.')?;
					}
					write_identifier(f, part)?;
				}
				Ok(())
			}
			Expr::Call(call) => write!(f, "{}", call),
		}
	}
}
