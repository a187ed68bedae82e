// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::{
	env,
	io::{self, IsTerminal, Read},
	process::ExitCode,
};

use hogql_compiler::CompileRequest;
use hogql_sub_tracing::{TracingBuilder, TracingSubsystemFactory};
use tracing::{Level, error};

fn tracing_configuration(tracing: TracingBuilder) -> TracingBuilder {
	tracing.with_env_var("HOGQL_LOG").with_level(Level::WARN).with_ansi(io::stderr().is_terminal()).with_target(false)
}

/// The request is the first argument, or stdin when there is none.
fn read_request() -> io::Result<String> {
	if let Some(request) = env::args().nth(1) {
		return Ok(request);
	}
	let mut request = String::new();
	io::stdin().read_to_string(&mut request)?;
	Ok(request)
}

fn main() -> ExitCode {
	TracingSubsystemFactory::with_configurator(tracing_configuration).create().init();

	let request = match read_request() {
		Ok(request) => request,
		Err(err) => {
			error!(%err, "failed to read request");
			return ExitCode::from(2);
		}
	};

	match CompileRequest::from_json(&request).and_then(CompileRequest::run) {
		Ok(output) => {
			print!("{output}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprint!("{err}");
			ExitCode::FAILURE
		}
	}
}
