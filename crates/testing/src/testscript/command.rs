// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::VecDeque, error::Error, str::FromStr};

/// Commands up to a `---` separator, with the literal text they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// Script text of the block before the separator, comments included.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	/// The command is expected to fail.
	pub fail: bool,
	/// The command output is discarded.
	pub silent: bool,
	pub line_number: u32,
}

impl Command {
	/// Returns a consumer that hands out the arguments one at a time.
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer::new(&self.args)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Argument {
	pub fn name(&self) -> &str {
		self.key.as_deref().unwrap_or(&self.value)
	}

	pub fn parse<T>(&self) -> Result<T, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: Error + 'static,
	{
		self.value.parse().map_err(|e| format!("invalid argument '{}': {e}", self.value).into())
	}
}

/// Pops arguments off a command. Whatever is left when the command is done
/// can be rejected with [`ArgumentConsumer::reject_rest`].
pub struct ArgumentConsumer<'a> {
	args: VecDeque<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	fn new(args: &'a [Argument]) -> Self {
		Self {
			args: args.iter().collect(),
		}
	}

	/// Removes and returns the argument with the given key, if any.
	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.as_deref() == Some(key))?;
		self.args.remove(index)
	}

	/// Removes and parses the argument with the given key, if any.
	pub fn lookup_parse<T>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: Error + 'static,
	{
		self.lookup(key).map(Argument::parse).transpose()
	}

	/// Removes and returns the next positional argument.
	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.is_none())?;
		self.args.remove(index)
	}

	/// Removes and returns the next `key=value` argument.
	pub fn next_key(&mut self) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.is_some())?;
		self.args.remove(index)
	}

	pub fn reject_rest(&self) -> Result<(), Box<dyn Error>> {
		match self.args.front() {
			Some(arg) => Err(format!("unexpected argument '{}'", arg.name()).into()),
			None => Ok(()),
		}
	}
}
