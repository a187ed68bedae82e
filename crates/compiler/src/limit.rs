// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Rows returned when a query gives no explicit limit.
pub const DEFAULT_RETURNED_ROWS: u64 = 100;

/// Hard ceiling on returned rows, applied even to explicit limits.
pub const MAX_SELECT_RETURNED_ROWS: u64 = 10_000;

pub fn effective_limit(requested: Option<u64>) -> u64 {
	requested.unwrap_or(DEFAULT_RETURNED_ROWS).min(MAX_SELECT_RETURNED_ROWS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		assert_eq!(effective_limit(None), 100);
	}

	#[test]
	fn test_explicit_below_ceiling() {
		assert_eq!(effective_limit(Some(0)), 0);
		assert_eq!(effective_limit(Some(250)), 250);
		assert_eq!(effective_limit(Some(10_000)), 10_000);
	}

	#[test]
	fn test_capped() {
		assert_eq!(effective_limit(Some(10_001)), 10_000);
		assert_eq!(effective_limit(Some(u64::MAX)), 10_000);
	}
}
