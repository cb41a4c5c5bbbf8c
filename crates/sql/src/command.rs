// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use pggate_catalog::CatalogEntry;

use crate::ast::DropObjectType;

/// Analyzed DDL, owned and independent of the arena it was compiled in.
/// Executing it is the storage backend's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlCommand {
	Drop(DropCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropCommand {
	pub object_type: DropObjectType,
	pub if_exists: bool,
	/// Every name of the statement, in order.
	pub names: Vec<String>,
	/// Resolved first name. `None` when it was missing under `IF EXISTS`.
	pub target: Option<CatalogEntry>,
}

impl DropCommand {
	pub fn is_noop(&self) -> bool {
		self.target.is_none()
	}
}

impl Display for DdlCommand {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			DdlCommand::Drop(drop) => Display::fmt(drop, f),
		}
	}
}

impl Display for DropCommand {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "DROP {}", self.object_type)?;
		if self.if_exists {
			f.write_str(" IF EXISTS")?;
		}
		write!(f, " {}", self.names.join(", "))?;
		match &self.target {
			Some(entry) => write!(f, " -> {} {}", entry.kind, entry.qualified_name()),
			None => f.write_str(" -> no-op"),
		}
	}
}
