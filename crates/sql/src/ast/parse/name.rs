// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bumpalo::collections::Vec as BumpVec;

use crate::{
	ast::{
		Ident, QualifiedName, QualifiedNameList,
		parse::{ParseError, ParseErrorKind, Parser},
	},
	token::{Punctuation, TokenKind, fold_case},
};

impl<'bump> Parser<'bump> {
	/// Keywords are accepted as names, so `DROP TABLE ks.type` works.
	pub(super) fn parse_identifier(&mut self) -> Result<Ident<'bump>, ParseError> {
		let token = *self.current();
		let ident = match token.kind {
			TokenKind::Identifier => Ident::new(token.text, false, token.span),
			TokenKind::QuotedIdentifier => Ident::new(token.text, true, token.span),
			TokenKind::Keyword(_) => Ident::new(fold_case(self.bump, token.text), false, token.span),
			TokenKind::Punctuation(_) | TokenKind::Eof => {
				return Err(self.error(ParseErrorKind::ExpectedIdentifier(token.describe())));
			}
		};
		self.advance();
		Ok(ident)
	}

	pub(super) fn parse_qualified_name(&mut self) -> Result<QualifiedName<'bump>, ParseError> {
		let mut parts = BumpVec::new_in(self.bump);

		let first = self.parse_identifier()?;
		let mut span = first.span;
		parts.push(first);

		while self.try_consume_punct(Punctuation::Dot) {
			let part = self.parse_identifier()?;
			span = span.merge(&part.span);
			parts.push(part);
		}

		Ok(QualifiedName::new(parts.into_bump_slice(), span))
	}

	pub(super) fn parse_qualified_name_list(&mut self) -> Result<QualifiedNameList<'bump>, ParseError> {
		let mut names = BumpVec::new_in(self.bump);
		names.push(self.parse_qualified_name()?);

		while self.try_consume_punct(Punctuation::Comma) {
			names.push(self.parse_qualified_name()?);
		}

		Ok(QualifiedNameList::new(names.into_bump_slice()))
	}
}
