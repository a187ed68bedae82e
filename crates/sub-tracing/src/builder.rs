// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output encoding of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
	#[default]
	Compact,
	Json,
}

/// Builder for the process-wide tracing subscriber.
///
/// Log lines go to stderr. The first environment variable from
/// [`TracingBuilder::with_env_var`] that holds a valid filter replaces the
/// configured level and directives.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: Level,
	directives: Vec<String>,
	env_vars: Vec<String>,
	format: Format,
	ansi: bool,
	target: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: Level::WARN,
			directives: Vec::new(),
			env_vars: vec!["RUST_LOG".to_string()],
			format: Format::Compact,
			ansi: true,
			target: true,
		}
	}

	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Adds a filter directive such as `hogql_compiler=trace`.
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	/// Consults `var` before any variable registered earlier.
	pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
		self.env_vars.insert(0, var.into());
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	pub(crate) fn filter(&self) -> EnvFilter {
		for var in &self.env_vars {
			if let Ok(filter) = EnvFilter::try_from_env(var) {
				return filter;
			}
		}
		EnvFilter::builder()
			.with_default_directive(LevelFilter::from_level(self.level).into())
			.parse_lossy(self.directives.join(","))
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem {
			builder: self,
		}
	}
}

/// A configured, not yet installed subscriber.
#[derive(Debug, Clone)]
pub struct TracingSubsystem {
	builder: TracingBuilder,
}

impl TracingSubsystem {
	/// Installs the subscriber globally. Returns `false` when one is already
	/// installed, leaving it in place.
	pub fn init(&self) -> bool {
		let builder = &self.builder;
		let registry = tracing_subscriber::registry().with(builder.filter());

		let result = match builder.format {
			Format::Compact => registry
				.with(fmt::layer()
					.compact()
					.with_writer(std::io::stderr)
					.with_ansi(builder.ansi)
					.with_target(builder.target))
				.try_init(),
			Format::Json => registry
				.with(fmt::layer().json().with_writer(std::io::stderr).with_target(builder.target))
				.try_init(),
		};

		if result.is_ok() {
			tracing::debug!(format = ?builder.format, "tracing initialised");
		}
		result.is_ok()
	}

	pub fn format(&self) -> Format {
		self.builder.format
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let builder = TracingBuilder::default();
		assert_eq!(builder.level, Level::WARN);
		assert_eq!(builder.format, Format::Compact);
		assert_eq!(builder.env_vars, vec!["RUST_LOG".to_string()]);
		assert!(builder.ansi);
	}

	#[test]
	fn test_env_var_precedence() {
		let builder = TracingBuilder::new().with_env_var("HOGQL_LOG");
		assert_eq!(builder.env_vars, vec!["HOGQL_LOG".to_string(), "RUST_LOG".to_string()]);
	}

	#[test]
	fn test_filter_from_directives() {
		let mut builder = TracingBuilder::new().with_directive("hogql_compiler=trace");
		builder.env_vars.clear();
		let rendered = builder.filter().to_string();
		assert!(rendered.contains("hogql_compiler=trace"), "{rendered}");
	}

	#[test]
	fn test_init_is_once() {
		let subsystem = TracingBuilder::new().with_ansi(false).with_format(Format::Json).build();
		assert_eq!(subsystem.format(), Format::Json);
		subsystem.init();
		assert!(!subsystem.init());
	}
}
