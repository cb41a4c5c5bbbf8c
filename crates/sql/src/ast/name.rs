// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::token::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'bump> {
	pub value: &'bump str,
	pub quoted: bool,
	pub span: Span,
}

impl<'bump> Ident<'bump> {
	pub fn new(value: &'bump str, quoted: bool, span: Span) -> Self {
		Self {
			value,
			quoted,
			span,
		}
	}
}

/// Dotted name such as `keyspace.table`. Always has at least one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'bump> {
	parts: &'bump [Ident<'bump>],
	pub span: Span,
}

impl<'bump> QualifiedName<'bump> {
	pub(crate) fn new(parts: &'bump [Ident<'bump>], span: Span) -> Self {
		debug_assert!(!parts.is_empty());
		Self {
			parts,
			span,
		}
	}

	pub fn parts(&self) -> &'bump [Ident<'bump>] {
		self.parts
	}

	/// The unqualified object name.
	pub fn base(&self) -> &'bump Ident<'bump> {
		&self.parts[self.parts.len() - 1]
	}

	pub fn qualifier(&self) -> Option<&'bump Ident<'bump>> {
		match self.parts {
			[qualifier, _] => Some(qualifier),
			_ => None,
		}
	}
}

impl Display for QualifiedName<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (i, part) in self.parts.iter().enumerate() {
			if i > 0 {
				f.write_str(".")?;
			}
			f.write_str(part.value)?;
		}
		Ok(())
	}
}

/// Non-empty list of qualified names as written in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedNameList<'bump> {
	names: &'bump [QualifiedName<'bump>],
}

impl<'bump> QualifiedNameList<'bump> {
	pub(crate) fn new(names: &'bump [QualifiedName<'bump>]) -> Self {
		debug_assert!(!names.is_empty());
		Self {
			names,
		}
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn element(&self, index: usize) -> Option<&'bump QualifiedName<'bump>> {
		self.names.get(index)
	}

	pub fn first(&self) -> &'bump QualifiedName<'bump> {
		&self.names[0]
	}

	pub fn iter(&self) -> impl Iterator<Item = &'bump QualifiedName<'bump>> {
		self.names.iter()
	}
}
