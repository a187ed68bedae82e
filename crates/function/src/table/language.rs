// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Functions implemented by the HogQL compiler itself. They are expanded into
//! ClickHouse expressions further down the pipeline and never reach the
//! database by name.

language_functions! {
	"sparkline" (1, 1),
	"cohort" (1, 1),
}
