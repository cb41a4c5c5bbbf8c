// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render_into(&mut output, diagnostic, 0);
		output
	}

	fn render_into(output: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = write!(
			output,
			"{indent}[{}] {} ({}): {}",
			diagnostic.code,
			diagnostic.kind,
			diagnostic.kind.sqlstate(),
			diagnostic.message
		);

		if let Some(label) = &diagnostic.label {
			let _ = write!(output, "\n{indent}  = {label}");
		}

		if let Some(help) = &diagnostic.help {
			let _ = write!(output, "\n{indent}  help: {help}");
		}

		for note in &diagnostic.notes {
			let _ = write!(output, "\n{indent}  note: {note}");
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = write!(output, "\n{indent}  caused by:\n");
			Self::render_into(output, cause, depth + 1);
		}
	}
}
