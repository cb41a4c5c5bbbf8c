// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	ast::{
		DropObjectType, DropStmt, Statement,
		parse::{ParseError, ParseErrorKind, Parser},
	},
	token::{Keyword, TokenKind},
};

impl<'bump> Parser<'bump> {
	pub(super) fn parse_drop(&mut self) -> Result<Statement<'bump>, ParseError> {
		let start = self.expect_keyword(Keyword::Drop)?;

		let object_type = match self.current().kind {
			TokenKind::Keyword(Keyword::Table) => DropObjectType::Table,
			TokenKind::Keyword(Keyword::Keyspace | Keyword::Schema) => DropObjectType::Keyspace,
			TokenKind::Keyword(Keyword::Type) => DropObjectType::Type,
			TokenKind::Keyword(Keyword::Index) => DropObjectType::Index,
			TokenKind::Keyword(Keyword::Role) => DropObjectType::Role,
			_ => {
				let found = self.current().describe();
				return Err(self.error(ParseErrorKind::ExpectedObjectType(found)));
			}
		};
		self.advance();

		let if_exists = self.parse_if_exists();
		let names = self.parse_qualified_name_list()?;
		let span = names.iter().fold(start, |span, name| span.merge(&name.span));

		let stmt = self.bump.alloc(DropStmt::new(object_type, names, if_exists, span));
		Ok(Statement::Drop(stmt))
	}

	/// `IF EXISTS` is only taken as a clause when both words are present, so
	/// a relation named `if` can still be dropped.
	fn parse_if_exists(&mut self) -> bool {
		if self.check_keyword(Keyword::If) && self.peek(1).kind == TokenKind::Keyword(Keyword::Exists) {
			self.advance();
			self.advance();
			return true;
		}
		false
	}
}

#[cfg(test)]
mod tests {
	use bumpalo::Bump;

	use crate::{
		ast::{
			DropObjectType, Statement,
			parse::{ParseErrorKind, Parser},
		},
		token::tokenize,
	};

	fn with_drop<F>(source: &str, f: F)
	where
		F: FnOnce(&crate::ast::DropStmt<'_>),
	{
		let bump = Bump::new();
		let tokens = tokenize(&bump, source).unwrap();
		let Statement::Drop(drop) = Parser::new(&bump, tokens).parse_statement().unwrap();
		f(drop)
	}

	fn parse_err(source: &str) -> ParseErrorKind {
		let bump = Bump::new();
		let tokens = tokenize(&bump, source).unwrap();
		Parser::new(&bump, tokens).parse_statement().unwrap_err().kind
	}

	#[test]
	fn test_object_types() {
		with_drop("drop table t", |d| assert_eq!(d.object_type(), DropObjectType::Table));
		with_drop("drop keyspace k", |d| assert_eq!(d.object_type(), DropObjectType::Keyspace));
		with_drop("drop schema k", |d| assert_eq!(d.object_type(), DropObjectType::Keyspace));
		with_drop("drop type t", |d| assert_eq!(d.object_type(), DropObjectType::Type));
		with_drop("drop index i", |d| assert_eq!(d.object_type(), DropObjectType::Index));
		with_drop("drop role r", |d| assert_eq!(d.object_type(), DropObjectType::Role));
	}

	#[test]
	fn test_if_exists() {
		with_drop("DROP TABLE IF EXISTS ks.t;", |d| {
			assert!(d.if_exists());
			assert_eq!(d.name().to_string(), "ks.t");
		});
	}

	#[test]
	fn test_relation_named_if() {
		with_drop("drop table if", |d| {
			assert!(!d.if_exists());
			assert_eq!(d.name().to_string(), "if");
		});
	}

	#[test]
	fn test_name_list_keeps_order() {
		with_drop("drop table a.x, b.y, z", |d| {
			let names: Vec<String> = d.names().iter().map(|n| n.to_string()).collect();
			assert_eq!(names, vec!["a.x", "b.y", "z"]);
			assert_eq!(d.name().to_string(), "a.x");
		});
	}

	#[test]
	fn test_table_name_of_first_element() {
		with_drop("drop table \"Sales\".orders, other.t", |d| {
			let table_name = d.table_name();
			assert_eq!(table_name.keyspace.as_deref(), Some("Sales"));
			assert_eq!(table_name.table, "orders");
		});

		with_drop("drop table orders", |d| {
			assert_eq!(d.table_name().keyspace, None);
		});
	}

	#[test]
	fn test_span_covers_statement() {
		with_drop("drop table a, b", |d| {
			assert_eq!(d.span().start, 0);
			assert_eq!(d.span().end, 15);
		});
	}

	#[test]
	fn test_missing_object_type() {
		assert_eq!(parse_err("drop users"), ParseErrorKind::ExpectedObjectType("'users'".to_string()));
	}

	#[test]
	fn test_missing_name() {
		assert_eq!(parse_err("drop table"), ParseErrorKind::ExpectedIdentifier("end of input".to_string()));
		assert_eq!(
			parse_err("drop table if exists"),
			ParseErrorKind::ExpectedIdentifier("end of input".to_string())
		);
		assert_eq!(parse_err("drop table a,"), ParseErrorKind::ExpectedIdentifier("end of input".to_string()));
		assert_eq!(parse_err("drop table ks."), ParseErrorKind::ExpectedIdentifier("end of input".to_string()));
	}
}
