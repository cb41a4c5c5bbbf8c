// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Diagnostic conversion for tokenizer and parser errors.

use pggate_type::{
	Error, ErrorKind,
	error::diagnostic::{Diagnostic, IntoDiagnostic},
};

use crate::{
	ast::parse::{ParseError, ParseErrorKind},
	token::{LexError, LexErrorKind, Span},
};

fn position(span: Span) -> String {
	format!("at line {}, column {}", span.line, span.column)
}

impl IntoDiagnostic for LexError {
	fn into_diagnostic(self) -> Diagnostic {
		let code = match self.kind {
			LexErrorKind::UnexpectedCharacter(_) => "LEX_001",
			LexErrorKind::UnterminatedQuotedIdentifier => "LEX_002",
			LexErrorKind::EmptyQuotedIdentifier => "LEX_003",
		};
		let help = match self.kind {
			LexErrorKind::UnexpectedCharacter(_) => None,
			LexErrorKind::UnterminatedQuotedIdentifier => Some("close the identifier with '\"'".to_string()),
			LexErrorKind::EmptyQuotedIdentifier => Some("quoted identifiers need at least one character".to_string()),
		};

		Diagnostic {
			code: code.to_string(),
			kind: ErrorKind::Syntax,
			message: self.kind.to_string(),
			label: Some(position(self.span)),
			help,
			notes: vec![],
			cause: None,
		}
	}
}

impl IntoDiagnostic for ParseError {
	fn into_diagnostic(self) -> Diagnostic {
		let (code, kind) = match &self.kind {
			ParseErrorKind::EmptyStatement => ("PARSE_001", ErrorKind::Syntax),
			ParseErrorKind::UnsupportedStatement(_) => ("PARSE_002", ErrorKind::FeatureUnsupported),
			ParseErrorKind::ExpectedKeyword(..) => ("PARSE_003", ErrorKind::Syntax),
			ParseErrorKind::ExpectedObjectType(_) => ("PARSE_004", ErrorKind::Syntax),
			ParseErrorKind::ExpectedIdentifier(_) => ("PARSE_005", ErrorKind::Syntax),
			ParseErrorKind::TrailingInput(_) => ("PARSE_006", ErrorKind::Syntax),
		};
		let help = match &self.kind {
			ParseErrorKind::UnsupportedStatement(_) => Some("only DROP statements are handled here".to_string()),
			ParseErrorKind::TrailingInput(_) => Some("submit one statement at a time".to_string()),
			_ => None,
		};

		Diagnostic {
			code: code.to_string(),
			kind,
			message: self.kind.to_string(),
			label: Some(position(self.span)),
			help,
			notes: vec![],
			cause: None,
		}
	}
}

impl From<LexError> for Error {
	fn from(err: LexError) -> Self {
		Error(err.into_diagnostic())
	}
}

impl From<ParseError> for Error {
	fn from(err: ParseError) -> Self {
		Error(err.into_diagnostic())
	}
}
