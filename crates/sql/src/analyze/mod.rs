// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Semantic analysis: resolves the names of a parsed statement against the
//! catalog. Analysis never mutates the catalog.

mod drop;

use pggate_catalog::Catalog;
use pggate_type::Result;

use crate::{
	ast::Statement,
	command::{DdlCommand, DropCommand},
};

/// Everything analysis may consult.
#[derive(Clone, Copy)]
pub struct SemContext<'a> {
	catalog: &'a dyn Catalog,
	current_keyspace: Option<&'a str>,
}

impl<'a> SemContext<'a> {
	pub fn new(catalog: &'a dyn Catalog) -> Self {
		Self {
			catalog,
			current_keyspace: None,
		}
	}

	/// Keyspace used to resolve unqualified names.
	pub fn with_keyspace(mut self, keyspace: &'a str) -> Self {
		self.current_keyspace = Some(keyspace);
		self
	}

	pub fn catalog(&self) -> &'a dyn Catalog {
		self.catalog
	}

	pub fn current_keyspace(&self) -> Option<&'a str> {
		self.current_keyspace
	}
}

impl<'bump> Statement<'bump> {
	/// Analyzes the statement and lowers it into an owned command that
	/// outlives the arena.
	pub fn analyze(&self, ctx: &SemContext<'_>) -> Result<DdlCommand> {
		match self {
			Statement::Drop(stmt) => {
				let target = stmt.analyze(ctx)?;
				Ok(DdlCommand::Drop(DropCommand {
					object_type: stmt.object_type(),
					if_exists: stmt.if_exists(),
					names: stmt.names().iter().map(|name| name.to_string()).collect(),
					target,
				}))
			}
		}
	}
}
