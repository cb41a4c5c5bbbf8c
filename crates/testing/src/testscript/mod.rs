// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Golden script tests.
//!
//! A script is a list of blocks. Each block holds one or more commands, a
//! `---` separator and the output the commands produced:
//!
//! ```text
//! # comments start with # or //
//! use ks
//! compile 'drop table users'
//! ---
//! DROP TABLE users -> table ks.users
//! ```
//!
//! A command is a name followed by positional or `key=value` arguments, bare
//! or quoted. A `!` prefix expects the command to fail and records its error.
//! Wrapping a command in parentheses silences its output. A line starting
//! with `>` is a literal command whose whole text is the name.
//!
//! [`run_path`] regenerates the output of every block and compares the
//! result with the file through [`goldenfile`]. Run with
//! `UPDATE_GOLDENFILES=1` to rewrite the scripts in place.

mod command;
mod parser;
mod runner;

pub use command::{Argument, ArgumentConsumer, Block, Command};
pub use parser::ParseError;
pub use runner::{Runner, generate, run_path};
