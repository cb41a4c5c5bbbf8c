// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Arena-allocated parse tree.
//!
//! Every node lives in the [`bumpalo::Bump`] of the statement being compiled
//! and is released with it, whether compilation succeeds or fails.

mod drop;
mod name;
pub mod parse;

pub use drop::{DropObjectType, DropStmt, TableName};
pub use name::{Ident, QualifiedName, QualifiedNameList};

use crate::token::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeNodeOpcode {
	DropStmt,
}

/// Top-level statement. The set of statements is closed.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'bump> {
	Drop(&'bump DropStmt<'bump>),
}

impl<'bump> Statement<'bump> {
	pub fn opcode(&self) -> TreeNodeOpcode {
		match self {
			Statement::Drop(_) => TreeNodeOpcode::DropStmt,
		}
	}

	pub fn span(&self) -> Span {
		match self {
			Statement::Drop(stmt) => stmt.span(),
		}
	}
}
