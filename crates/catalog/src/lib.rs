// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Name resolution for DDL analysis.
//!
//! The gateway never owns schema metadata. It asks a [`Catalog`] to resolve
//! names during semantic analysis and leaves every mutation to the storage
//! backend.

use std::fmt::{Display, Formatter};

pub mod materialized;
pub mod support;

pub use materialized::MaterializedCatalog;
pub use pggate_type::Result;
pub use support::{TEMPLATE_DATABASE_OID, is_distributed_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl Display for ObjectId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
	Keyspace,
	Table,
	Index,
	Type,
	Role,
}

impl ObjectKind {
	pub const fn as_str(&self) -> &'static str {
		match self {
			ObjectKind::Keyspace => "keyspace",
			ObjectKind::Table => "table",
			ObjectKind::Index => "index",
			ObjectKind::Type => "type",
			ObjectKind::Role => "role",
		}
	}

	/// Keyspaces and roles live in a process-wide namespace, everything else
	/// lives inside a keyspace.
	pub const fn is_global(&self) -> bool {
		matches!(self, ObjectKind::Keyspace | ObjectKind::Role)
	}
}

impl Display for ObjectKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
	pub id: ObjectId,
	pub kind: ObjectKind,
	/// `None` for global objects.
	pub keyspace: Option<String>,
	pub name: String,
}

impl CatalogEntry {
	pub fn qualified_name(&self) -> String {
		match &self.keyspace {
			Some(keyspace) => format!("{}.{}", keyspace, self.name),
			None => self.name.clone(),
		}
	}
}

pub trait Catalog {
	fn find_keyspace(&self, name: &str) -> Option<CatalogEntry>;

	fn find_role(&self, name: &str) -> Option<CatalogEntry>;

	/// Finds a keyspace-scoped object of any kind.
	fn find_object(&self, keyspace: &str, name: &str) -> Option<CatalogEntry>;

	/// Whether the deployment can drop objects of `kind`. Checked after the
	/// target has been resolved.
	fn supports_drop(&self, kind: ObjectKind, if_exists: bool) -> bool {
		let _ = (kind, if_exists);
		true
	}
}

impl<C: Catalog + ?Sized> Catalog for &C {
	fn find_keyspace(&self, name: &str) -> Option<CatalogEntry> {
		(**self).find_keyspace(name)
	}

	fn find_role(&self, name: &str) -> Option<CatalogEntry> {
		(**self).find_role(name)
	}

	fn find_object(&self, keyspace: &str, name: &str) -> Option<CatalogEntry> {
		(**self).find_object(keyspace, name)
	}

	fn supports_drop(&self, kind: ObjectKind, if_exists: bool) -> bool {
		(**self).supports_drop(kind, if_exists)
	}
}
