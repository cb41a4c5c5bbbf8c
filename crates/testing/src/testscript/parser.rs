// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, iter::Peekable};

use crate::testscript::command::{Argument, Block, Command};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
	pub message: String,
	pub line: u32,
	pub column: usize,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "parse error at line {}:{}: {}", self.line, self.column, self.message)
	}
}

impl std::error::Error for ParseError {}

/// Splits a script into blocks. The output recorded after each separator is
/// skipped, since it is regenerated on every run.
pub(crate) fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	let mut blocks = Vec::new();
	let mut literal = String::new();
	let mut commands = Vec::new();
	let mut block_line = 1;
	let mut last_line = 0;

	let mut lines = input.split_inclusive('\n').zip(1u32..).peekable();
	while let Some((line, number)) = lines.next() {
		last_line = number;
		let text = trim_eol(line);

		if text == "---" {
			if commands.is_empty() {
				return Err(ParseError {
					message: "expected a command before ---".to_string(),
					line: number,
					column: 1,
				});
			}
			blocks.push(Block {
				literal: std::mem::take(&mut literal),
				commands: std::mem::take(&mut commands),
				line_number: block_line,
			});
			skip_output(&mut lines);
			continue;
		}

		if literal.is_empty() {
			block_line = number;
		}
		literal.push_str(line);

		if text.trim().is_empty() || text.starts_with('#') || text.starts_with("//") {
			continue;
		}
		if text.starts_with(char::is_whitespace) {
			return Err(ParseError {
				message: "command cannot start with whitespace".to_string(),
				line: number,
				column: 1,
			});
		}
		commands.push(Scanner::new(text, number).command()?);
	}

	if !commands.is_empty() {
		return Err(ParseError {
			message: "expected --- separator".to_string(),
			line: last_line + 1,
			column: 1,
		});
	}
	if !literal.is_empty() {
		blocks.push(Block {
			literal,
			commands,
			line_number: block_line,
		});
	}

	Ok(blocks)
}

fn trim_eol(line: &str) -> &str {
	line.trim_end_matches(['\n', '\r'])
}

/// Skips block output and the blank line that ends it. Output holding blank
/// lines of its own is written with a `>` prefix on every line.
fn skip_output<'a, I>(lines: &mut Peekable<I>)
where
	I: Iterator<Item = (&'a str, u32)>,
{
	let prefixed = lines.peek().is_some_and(|(line, _)| line.starts_with('>'));
	while lines
		.next_if(|(line, _)| match prefixed {
			true => line.starts_with('>'),
			false => !trim_eol(line).is_empty(),
		})
		.is_some()
	{}
	lines.next_if(|(line, _)| trim_eol(line).is_empty());
}

struct Scanner<'a> {
	text: &'a str,
	pos: usize,
	line: u32,
}

impl<'a> Scanner<'a> {
	fn new(text: &'a str, line: u32) -> Self {
		Self {
			text,
			pos: 0,
			line,
		}
	}

	fn command(mut self) -> Result<Command, ParseError> {
		let silent = self.eat('(');
		self.skip_whitespace();
		let fail = self.eat('!');
		self.skip_whitespace();

		if self.eat('>') {
			let mut name = self.rest().trim();
			if silent {
				name = name.strip_suffix(')').ok_or_else(|| self.error("expected closing )"))?.trim_end();
			}
			if name.is_empty() {
				return Err(self.error("expected literal command"));
			}
			return Ok(Command {
				name: name.to_string(),
				args: Vec::new(),
				fail,
				silent,
				line_number: self.line,
			});
		}

		let name = self.word()?.ok_or_else(|| self.error("expected command name"))?;

		let mut args = Vec::new();
		loop {
			self.skip_whitespace();
			if self.at_end() || (silent && self.peek() == Some(')')) {
				break;
			}
			let value = self.word()?.ok_or_else(|| self.error("expected argument"))?;
			if self.eat('=') {
				args.push(Argument {
					key: Some(value),
					value: self.word()?.unwrap_or_default(),
				});
			} else {
				args.push(Argument {
					key: None,
					value,
				});
			}
		}

		if silent {
			if !self.eat(')') {
				return Err(self.error("expected closing )"));
			}
			self.skip_whitespace();
			if !self.at_end() {
				return Err(self.error("expected end of line"));
			}
		}

		Ok(Command {
			name,
			args,
			fail,
			silent,
			line_number: self.line,
		})
	}

	/// A bare or quoted string at the cursor.
	fn word(&mut self) -> Result<Option<String>, ParseError> {
		if let Some(quote @ ('\'' | '"')) = self.peek() {
			self.bump();
			return self.quoted(quote).map(Some);
		}

		let start = self.pos;
		while self.peek().is_some_and(|c| !c.is_whitespace() && !matches!(c, '=' | '\'' | '"' | '(' | ')')) {
			self.bump();
		}
		Ok((self.pos > start).then(|| self.text[start..self.pos].to_string()))
	}

	fn quoted(&mut self, quote: char) -> Result<String, ParseError> {
		let mut value = String::new();
		loop {
			match self.bump() {
				Some(c) if c == quote => return Ok(value),
				Some('\\') => match self.bump() {
					Some('n') => value.push('\n'),
					Some('t') => value.push('\t'),
					Some(c @ ('\\' | '\'' | '"')) => value.push(c),
					Some(c) => return Err(self.error(format!("invalid escape '\\{c}'"))),
					None => return Err(self.error("unterminated string")),
				},
				Some(c) => value.push(c),
				None => return Err(self.error("unterminated string")),
			}
		}
	}

	fn rest(&self) -> &'a str {
		&self.text[self.pos..]
	}

	fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	fn bump(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.pos += c.len_utf8();
		Some(c)
	}

	fn eat(&mut self, c: char) -> bool {
		if self.peek() == Some(c) {
			self.bump();
			return true;
		}
		false
	}

	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.bump();
		}
	}

	/// End of line, or a trailing comment.
	fn at_end(&self) -> bool {
		let rest = self.rest();
		rest.is_empty() || rest.starts_with('#') || rest.starts_with("//")
	}

	fn error(&self, message: impl Into<String>) -> ParseError {
		ParseError {
			message: message.into(),
			line: self.line,
			column: self.text[..self.pos].chars().count() + 1,
		}
	}
}
