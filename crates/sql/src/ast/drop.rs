// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cell::Cell,
	fmt::{Display, Formatter},
};

use pggate_catalog::ObjectKind;

use crate::{
	ast::name::{QualifiedName, QualifiedNameList},
	token::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropObjectType {
	Table,
	Keyspace,
	Type,
	Index,
	Role,
}

impl DropObjectType {
	pub const fn as_str(&self) -> &'static str {
		match self {
			DropObjectType::Table => "TABLE",
			DropObjectType::Keyspace => "KEYSPACE",
			DropObjectType::Type => "TYPE",
			DropObjectType::Index => "INDEX",
			DropObjectType::Role => "ROLE",
		}
	}

	pub const fn object_kind(&self) -> ObjectKind {
		match self {
			DropObjectType::Table => ObjectKind::Table,
			DropObjectType::Keyspace => ObjectKind::Keyspace,
			DropObjectType::Type => ObjectKind::Type,
			DropObjectType::Index => ObjectKind::Index,
			DropObjectType::Role => ObjectKind::Role,
		}
	}
}

impl Display for DropObjectType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Schema-qualified table name taken from the first name of a DROP list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
	pub keyspace: Option<String>,
	pub table: String,
}

impl Display for TableName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.keyspace {
			Some(keyspace) => write!(f, "{}.{}", keyspace, self.table),
			None => f.write_str(&self.table),
		}
	}
}

/// `DROP <object type> [IF EXISTS] name [, name ...]`
#[derive(Debug)]
pub struct DropStmt<'bump> {
	pub(crate) object_type: DropObjectType,
	pub(crate) names: QualifiedNameList<'bump>,
	pub(crate) if_exists: bool,
	pub(crate) span: Span,
	pub(crate) analyzed: Cell<bool>,
}

impl<'bump> DropStmt<'bump> {
	pub(crate) fn new(
		object_type: DropObjectType,
		names: QualifiedNameList<'bump>,
		if_exists: bool,
		span: Span,
	) -> Self {
		Self {
			object_type,
			names,
			if_exists,
			span,
			analyzed: Cell::new(false),
		}
	}

	pub fn object_type(&self) -> DropObjectType {
		self.object_type
	}

	pub fn if_exists(&self) -> bool {
		self.if_exists
	}

	pub fn names(&self) -> QualifiedNameList<'bump> {
		self.names
	}

	pub fn span(&self) -> Span {
		self.span
	}

	/// The first name of the list. Only this name is resolved by analysis.
	pub fn name(&self) -> &'bump QualifiedName<'bump> {
		self.names.first()
	}

	pub fn table_name(&self) -> TableName {
		let name = self.name();
		TableName {
			keyspace: name.qualifier().map(|ident| ident.value.to_string()),
			table: name.base().value.to_string(),
		}
	}

	pub fn is_analyzed(&self) -> bool {
		self.analyzed.get()
	}
}
