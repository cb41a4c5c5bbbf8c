// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	error::Error,
	fs,
	io::{self, Write as _},
	panic,
	path::Path,
};

use goldenfile::Mint;

use crate::testscript::{Command, parser::parse};

/// Executes script commands.
pub trait Runner {
	/// Runs one command and returns its output. A command written with a
	/// `!` prefix is expected to return an error, which becomes the output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called once before the first block.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called once after the last block.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Output is placed before the output of the block's commands.
	fn start_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Output is placed after the output of the block's commands.
	fn end_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	#[allow(unused_variables)]
	fn start_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	#[allow(unused_variables)]
	fn end_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}
}

/// Runs the script at `path` and compares the regenerated script with the
/// file. Panics on a difference unless `UPDATE_GOLDENFILES=1` is set, in
/// which case the file is rewritten.
pub fn run_path<R: Runner>(runner: &mut R, path: impl AsRef<Path>) -> io::Result<()> {
	let path = path.as_ref();
	let (Some(dir), Some(filename)) = (path.parent(), path.file_name()) else {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid script path {}", path.display())));
	};

	let input = fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	Mint::new(dir).new_goldenfile(filename)?.write_all(output.as_bytes())
}

/// Runs a script and returns it with every block's output replaced by what
/// the runner produced.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> io::Result<String> {
	let eol = match input.contains("\r\n") {
		true => "\r\n",
		false => "\n",
	};
	let blocks = parse(input).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

	runner.start_script().map_err(|e| io::Error::other(format!("start_script failed: {e}")))?;

	let mut output = String::with_capacity(input.len());
	for (i, block) in blocks.iter().enumerate() {
		// comments after the last block
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		let hook_failed = |hook: &str, e: Box<dyn Error>| {
			io::Error::other(format!("{hook} failed at line {}: {e}", block.line_number))
		};

		let mut block_output = ensure_eol(runner.start_block().map_err(|e| hook_failed("start_block", e))?, eol);
		for command in &block.commands {
			block_output.push_str(&run_command(runner, command, eol)?);
		}
		block_output.push_str(&ensure_eol(runner.end_block().map_err(|e| hook_failed("end_block", e))?, eol));

		if block_output.is_empty() {
			block_output.push_str("ok");
			block_output.push_str(eol);
		}
		if has_blank_line(&block_output) {
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			// block output ends with a newline, drop the dangling "> "
			block_output.truncate(block_output.len() - 2);
		}

		output.push_str(&block.literal);
		output.push_str("---");
		output.push_str(eol);
		output.push_str(&block_output);
		if i + 1 < blocks.len() {
			output.push_str(eol);
		}
	}

	runner.end_script().map_err(|e| io::Error::other(format!("end_script failed: {e}")))?;

	Ok(output)
}

fn run_command<R: Runner>(runner: &mut R, command: &Command, eol: &str) -> io::Result<String> {
	let hook_failed =
		|hook: &str, e: Box<dyn Error>| io::Error::other(format!("{hook} failed at line {}: {e}", command.line_number));

	let mut output = ensure_eol(runner.start_command(command).map_err(|e| hook_failed("start_command", e))?, eol);

	// commands are assumed unwind safe, a panicking runner is not reused
	let result = match panic::catch_unwind(panic::AssertUnwindSafe(|| runner.run(command))) {
		Ok(Ok(result)) if command.fail => {
			return Err(io::Error::other(format!(
				"expected command '{}' to fail at line {}, succeeded with: {result}",
				command.name, command.line_number
			)));
		}
		Ok(Ok(result)) => result,
		Ok(Err(e)) if command.fail => e.to_string(),
		Ok(Err(e)) => {
			return Err(io::Error::other(format!(
				"command '{}' failed at line {}: {e}",
				command.name, command.line_number
			)));
		}
		Err(payload) if command.fail => format!("panic: {}", panic_message(payload)),
		Err(payload) => panic::resume_unwind(payload),
	};
	output.push_str(&ensure_eol(result, eol));
	output.push_str(&ensure_eol(runner.end_command(command).map_err(|e| hook_failed("end_command", e))?, eol));

	if command.silent {
		output.clear();
	}
	Ok(output)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		return message.to_string();
	}
	match payload.downcast::<String>() {
		Ok(message) => *message,
		Err(payload) => panic::resume_unwind(payload),
	}
}

fn ensure_eol(mut s: String, eol: &str) -> String {
	if !s.is_empty() && !s.ends_with('\n') {
		s.push_str(eol);
	}
	s
}

fn has_blank_line(s: &str) -> bool {
	s.starts_with('\n') || s.starts_with("\r\n") || s.contains("\n\n") || s.contains("\n\r\n")
}
