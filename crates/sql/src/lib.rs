// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! DDL front end of the gateway: tokenize, parse and analyze one statement
//! inside a per-statement arena.
//!
//! ```text
//! source ──tokenize──> &[Token] ──parse──> Statement ──analyze──> DdlCommand
//! ```
//!
//! The arena is dropped when [`compile`] returns, so parse trees never
//! outlive the statement they were built for.

pub mod analyze;
pub mod ast;
pub mod command;
mod error;
pub mod token;

pub use analyze::SemContext;
use bumpalo::Bump;
pub use command::{DdlCommand, DropCommand};
use pggate_type::Result;
use tracing::{debug, instrument};

use crate::{
	ast::{Statement, parse::Parser},
	token::tokenize,
};

/// Parses one statement into `bump`.
pub fn parse<'bump>(bump: &'bump Bump, source: &str) -> Result<Statement<'bump>> {
	let tokens = tokenize(bump, source)?;
	let statement = Parser::new(bump, tokens).parse_statement()?;
	Ok(statement)
}

/// Compiles one DDL statement against the catalog of `ctx`.
#[instrument(name = "sql::compile", level = "debug", skip_all)]
pub fn compile(source: &str, ctx: &SemContext<'_>) -> Result<DdlCommand> {
	let bump = Bump::new();
	let statement = parse(&bump, source)?;
	let command = statement.analyze(ctx)?;
	debug!(opcode = ?statement.opcode(), arena_bytes = bump.allocated_bytes(), "compiled statement");
	Ok(command)
}
