// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

pub fn get_line(source: &str, line: u32) -> &str {
	source.lines().nth(line.saturating_sub(1) as usize).unwrap_or("")
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(&mut output, d, 0);
		output
	}
}

fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);
	let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

	if let (
		Fragment::Statement {
			line,
			column,
			..
		},
		Some(statement),
	) = (&d.fragment, &d.statement)
	{
		let line_content = get_line(statement, line.0);
		let width = line.0.to_string().len().max(2);

		let _ = writeln!(output, "{indent} {0:>width$} │ {1}", line.0, line_content, width = width);
		let _ = writeln!(
			output,
			"{indent} {0:>width$} │ {1}^",
			"",
			" ".repeat(column.0 as usize),
			width = width
		);
		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent} {0:>width$} = {1}", "", label, width = width);
		}
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "{indent}help: {}", help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "{indent}note: {}", note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "{indent}caused by:");
		render_into(output, cause, depth + 1);
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}
