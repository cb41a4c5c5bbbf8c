// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Recursive-descent parser over the token slice.
//!
//! Accepted syntax:
//! - `DROP TABLE [IF EXISTS] keyspace.table [, ...]`
//! - `DROP KEYSPACE | SCHEMA [IF EXISTS] keyspace [, ...]`
//! - `DROP TYPE | INDEX [IF EXISTS] [keyspace.]name [, ...]`
//! - `DROP ROLE [IF EXISTS] role [, ...]`
//!
//! A statement may end with a single `;`.

mod drop;
mod error;
mod name;

use bumpalo::Bump;
pub use error::{ParseError, ParseErrorKind};

use crate::{
	ast::Statement,
	token::{Keyword, Punctuation, Span, Token, TokenKind},
};

pub struct Parser<'bump> {
	bump: &'bump Bump,
	tokens: &'bump [Token<'bump>],
	position: usize,
}

impl<'bump> Parser<'bump> {
	/// `tokens` must end with an end-of-input token, as produced by
	/// [`crate::token::tokenize`].
	pub fn new(bump: &'bump Bump, tokens: &'bump [Token<'bump>]) -> Self {
		debug_assert!(tokens.last().is_some_and(Token::is_eof));
		Self {
			bump,
			tokens,
			position: 0,
		}
	}

	pub fn parse_statement(&mut self) -> Result<Statement<'bump>, ParseError> {
		if self.current().is_eof() || self.check_punct(Punctuation::Semicolon) {
			return Err(self.error(ParseErrorKind::EmptyStatement));
		}

		let statement = match self.current().kind {
			TokenKind::Keyword(Keyword::Drop) => self.parse_drop()?,
			_ => {
				let found = self.current().describe();
				return Err(self.error(ParseErrorKind::UnsupportedStatement(found)));
			}
		};

		self.try_consume_punct(Punctuation::Semicolon);
		if !self.current().is_eof() {
			let found = self.current().describe();
			return Err(self.error(ParseErrorKind::TrailingInput(found)));
		}

		Ok(statement)
	}

	fn current(&self) -> &Token<'bump> {
		let last = self.tokens.len() - 1;
		&self.tokens[self.position.min(last)]
	}

	fn peek(&self, offset: usize) -> &Token<'bump> {
		let last = self.tokens.len() - 1;
		&self.tokens[(self.position + offset).min(last)]
	}

	fn advance(&mut self) -> Token<'bump> {
		let token = *self.current();
		if !token.is_eof() {
			self.position += 1;
		}
		token
	}

	fn check_keyword(&self, keyword: Keyword) -> bool {
		self.current().kind == TokenKind::Keyword(keyword)
	}

	fn try_consume_keyword(&mut self, keyword: Keyword) -> bool {
		if self.check_keyword(keyword) {
			self.advance();
			return true;
		}
		false
	}

	fn expect_keyword(&mut self, keyword: Keyword) -> Result<Span, ParseError> {
		if self.check_keyword(keyword) {
			return Ok(self.advance().span);
		}
		let found = self.current().describe();
		Err(self.error(ParseErrorKind::ExpectedKeyword(keyword, found)))
	}

	fn check_punct(&self, punctuation: Punctuation) -> bool {
		self.current().kind == TokenKind::Punctuation(punctuation)
	}

	fn try_consume_punct(&mut self, punctuation: Punctuation) -> bool {
		if self.check_punct(punctuation) {
			self.advance();
			return true;
		}
		false
	}

	fn error(&self, kind: ParseErrorKind) -> ParseError {
		ParseError {
			kind,
			span: self.current().span,
		}
	}
}
