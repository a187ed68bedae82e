// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Per-query inputs the compiler needs from the surrounding system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileContext {
	/// IANA timezone injected into timezone-aware calls
	pub timezone: String,
}

impl CompileContext {
	pub fn new(timezone: impl Into<String>) -> Self {
		Self {
			timezone: timezone.into(),
		}
	}
}

impl Default for CompileContext {
	fn default() -> Self {
		Self::new(DEFAULT_TIMEZONE)
	}
}
