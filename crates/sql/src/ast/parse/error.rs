// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::token::{Keyword, Span};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
	#[error("empty statement")]
	EmptyStatement,
	#[error("unsupported statement starting with {0}")]
	UnsupportedStatement(String),
	#[error("expected {0}, found {1}")]
	ExpectedKeyword(Keyword, String),
	#[error("expected TABLE, KEYSPACE, SCHEMA, TYPE, INDEX or ROLE, found {0}")]
	ExpectedObjectType(String),
	#[error("expected identifier, found {0}")]
	ExpectedIdentifier(String),
	#[error("unexpected {0} after end of statement")]
	TrailingInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct ParseError {
	pub kind: ParseErrorKind,
	pub span: Span,
}
