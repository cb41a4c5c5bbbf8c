// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tokenizer for gateway DDL.
//!
//! The statement text is copied into the arena first, so every token and
//! every node built from it borrows from the same allocation.

mod keyword;
mod span;

use bumpalo::{
	Bump,
	collections::{String as BumpString, Vec as BumpVec},
};
pub use keyword::{KEYWORD_MAP, Keyword};
pub use span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
	Dot,
	Comma,
	Semicolon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	Keyword(Keyword),
	/// Bare identifier, folded to lower case.
	Identifier,
	/// Double-quoted identifier, case preserved and `""` unescaped.
	QuotedIdentifier,
	Punctuation(Punctuation),
	Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'bump> {
	pub kind: TokenKind,
	pub text: &'bump str,
	pub span: Span,
}

impl<'bump> Token<'bump> {
	pub fn is_eof(&self) -> bool {
		matches!(self.kind, TokenKind::Eof)
	}

	pub fn describe(&self) -> String {
		match self.kind {
			TokenKind::Eof => "end of input".to_string(),
			TokenKind::QuotedIdentifier => format!("\"{}\"", self.text),
			_ => format!("'{}'", self.text),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
	#[error("unexpected character '{0}'")]
	UnexpectedCharacter(char),
	#[error("unterminated quoted identifier")]
	UnterminatedQuotedIdentifier,
	#[error("zero-length quoted identifier")]
	EmptyQuotedIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct LexError {
	pub kind: LexErrorKind,
	pub span: Span,
}

pub fn tokenize<'bump>(bump: &'bump Bump, source: &str) -> Result<&'bump [Token<'bump>], LexError> {
	Lexer::new(bump, source).tokenize()
}

/// Lower-cases `text`, allocating in the arena only when it has to.
pub fn fold_case<'bump>(bump: &'bump Bump, text: &'bump str) -> &'bump str {
	if text.chars().any(char::is_uppercase) {
		bump.alloc_str(&text.to_lowercase())
	} else {
		text
	}
}

#[derive(Clone, Copy)]
struct Mark {
	offset: usize,
	line: u32,
	column: u32,
}

struct Lexer<'bump> {
	bump: &'bump Bump,
	source: &'bump str,
	position: usize,
	line: u32,
	column: u32,
}

impl<'bump> Lexer<'bump> {
	fn new(bump: &'bump Bump, source: &str) -> Self {
		Self {
			bump,
			source: bump.alloc_str(source),
			position: 0,
			line: 1,
			column: 1,
		}
	}

	fn tokenize(mut self) -> Result<&'bump [Token<'bump>], LexError> {
		let mut tokens = BumpVec::new_in(self.bump);

		loop {
			self.skip_trivia();
			let start = self.mark();

			let Some(c) = self.peek() else {
				tokens.push(Token {
					kind: TokenKind::Eof,
					text: "",
					span: self.span_from(start),
				});
				break;
			};

			let token = match c {
				'.' | ',' | ';' => {
					self.advance();
					let punctuation = match c {
						'.' => Punctuation::Dot,
						',' => Punctuation::Comma,
						_ => Punctuation::Semicolon,
					};
					Token {
						kind: TokenKind::Punctuation(punctuation),
						text: self.slice_from(start),
						span: self.span_from(start),
					}
				}
				'"' => self.scan_quoted_identifier(start)?,
				c if c.is_alphabetic() || c == '_' => self.scan_word(start),
				c => {
					self.advance();
					return Err(LexError {
						kind: LexErrorKind::UnexpectedCharacter(c),
						span: self.span_from(start),
					});
				}
			};
			tokens.push(token);
		}

		Ok(tokens.into_bump_slice())
	}

	fn scan_word(&mut self, start: Mark) -> Token<'bump> {
		while let Some(c) = self.peek() {
			if !(c.is_alphanumeric() || c == '_' || c == '$') {
				break;
			}
			self.advance();
		}

		let text = self.slice_from(start);
		let span = self.span_from(start);
		match Keyword::lookup(text) {
			Some(keyword) => Token {
				kind: TokenKind::Keyword(keyword),
				text,
				span,
			},
			None => Token {
				kind: TokenKind::Identifier,
				text: fold_case(self.bump, text),
				span,
			},
		}
	}

	fn scan_quoted_identifier(&mut self, start: Mark) -> Result<Token<'bump>, LexError> {
		self.advance(); // opening quote
		let mut value = BumpString::new_in(self.bump);

		loop {
			match self.advance() {
				None => {
					return Err(LexError {
						kind: LexErrorKind::UnterminatedQuotedIdentifier,
						span: self.span_from(start),
					});
				}
				Some('"') => {
					if self.peek() == Some('"') {
						self.advance();
						value.push('"');
					} else {
						break;
					}
				}
				Some(c) => value.push(c),
			}
		}

		if value.is_empty() {
			return Err(LexError {
				kind: LexErrorKind::EmptyQuotedIdentifier,
				span: self.span_from(start),
			});
		}

		Ok(Token {
			kind: TokenKind::QuotedIdentifier,
			text: value.into_bump_str(),
			span: self.span_from(start),
		})
	}

	fn skip_trivia(&mut self) {
		loop {
			match self.peek() {
				Some(c) if c.is_whitespace() => {
					self.advance();
				}
				Some('-') if self.peek_second() == Some('-') => {
					while let Some(c) = self.advance() {
						if c == '\n' {
							break;
						}
					}
				}
				_ => return,
			}
		}
	}

	fn peek(&self) -> Option<char> {
		self.source[self.position..].chars().next()
	}

	fn peek_second(&self) -> Option<char> {
		let mut chars = self.source[self.position..].chars();
		chars.next();
		chars.next()
	}

	fn advance(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.position += c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	fn mark(&self) -> Mark {
		Mark {
			offset: self.position,
			line: self.line,
			column: self.column,
		}
	}

	fn slice_from(&self, start: Mark) -> &'bump str {
		let source = self.source;
		&source[start.offset..self.position]
	}

	fn span_from(&self, start: Mark) -> Span {
		Span::new(start.offset as u32, self.position as u32, start.line, start.column)
	}
}

#[cfg(test)]
mod tests {
	use bumpalo::Bump;

	use super::{Keyword, LexErrorKind, Punctuation, TokenKind, tokenize};

	fn kinds(source: &str) -> Vec<TokenKind> {
		let bump = Bump::new();
		tokenize(&bump, source).unwrap().iter().map(|t| t.kind).collect()
	}

	#[test]
	fn test_drop_table() {
		assert_eq!(
			kinds("DROP TABLE ks.users;"),
			vec![
				TokenKind::Keyword(Keyword::Drop),
				TokenKind::Keyword(Keyword::Table),
				TokenKind::Identifier,
				TokenKind::Punctuation(Punctuation::Dot),
				TokenKind::Identifier,
				TokenKind::Punctuation(Punctuation::Semicolon),
				TokenKind::Eof,
			]
		);
	}

	#[test]
	fn test_identifiers_fold_to_lower_case() {
		let bump = Bump::new();
		let tokens = tokenize(&bump, "Users").unwrap();
		assert_eq!(tokens[0].text, "users");
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
	}

	#[test]
	fn test_quoted_identifier_keeps_case_and_unescapes() {
		let bump = Bump::new();
		let tokens = tokenize(&bump, r#""My ""Big"" Table""#).unwrap();
		assert_eq!(tokens[0].kind, TokenKind::QuotedIdentifier);
		assert_eq!(tokens[0].text, r#"My "Big" Table"#);
	}

	#[test]
	fn test_quoted_keyword_is_an_identifier() {
		assert_eq!(kinds(r#""table""#), vec![TokenKind::QuotedIdentifier, TokenKind::Eof]);
	}

	#[test]
	fn test_comments_and_whitespace_are_skipped() {
		assert_eq!(
			kinds("-- drop it\n  drop\trole   admin -- trailing"),
			vec![
				TokenKind::Keyword(Keyword::Drop),
				TokenKind::Keyword(Keyword::Role),
				TokenKind::Identifier,
				TokenKind::Eof,
			]
		);
	}

	#[test]
	fn test_spans_track_lines_and_columns() {
		let bump = Bump::new();
		let tokens = tokenize(&bump, "drop\n  table").unwrap();
		assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
		assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 3));
		assert_eq!(tokens[1].span.len(), 5);
	}

	#[test]
	fn test_unexpected_character() {
		let bump = Bump::new();
		let err = tokenize(&bump, "drop table t*").unwrap_err();
		assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('*'));
		assert_eq!(err.span.column, 13);
	}

	#[test]
	fn test_unterminated_quoted_identifier() {
		let bump = Bump::new();
		let err = tokenize(&bump, "drop table \"open").unwrap_err();
		assert_eq!(err.kind, LexErrorKind::UnterminatedQuotedIdentifier);
	}

	#[test]
	fn test_empty_quoted_identifier() {
		let bump = Bump::new();
		let err = tokenize(&bump, "drop table \"\"").unwrap_err();
		assert_eq!(err.kind, LexErrorKind::EmptyQuotedIdentifier);
	}
}
