// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

pub mod diagnostic;

use diagnostic::{Diagnostic, render::DefaultRenderer};

/// Category of an error raised to the host, each with a stable SQLSTATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
	/// Misconfiguration of the process. Terminates the process.
	Configuration,
	FeatureUnsupported,
	/// Commit conflict. The whole transaction may be retried.
	SerializationFailure,
	/// Any non-commit failure reported by the storage backend.
	InternalBackend,
	UndefinedObject,
	DuplicateObject,
	Syntax,
	Internal,
}

impl ErrorKind {
	pub const fn sqlstate(&self) -> &'static str {
		match self {
			ErrorKind::Configuration => "F0000",
			ErrorKind::FeatureUnsupported => "0A000",
			ErrorKind::SerializationFailure => "40001",
			ErrorKind::InternalBackend => "XX000",
			ErrorKind::UndefinedObject => "42704",
			ErrorKind::DuplicateObject => "42710",
			ErrorKind::Syntax => "42601",
			ErrorKind::Internal => "XX000",
		}
	}

	pub const fn is_fatal(&self) -> bool {
		matches!(self, ErrorKind::Configuration)
	}

	pub const fn is_retryable(&self) -> bool {
		matches!(self, ErrorKind::SerializationFailure)
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			ErrorKind::Configuration => "configuration error",
			ErrorKind::FeatureUnsupported => "feature not supported",
			ErrorKind::SerializationFailure => "serialization failure",
			ErrorKind::InternalBackend => "internal backend error",
			ErrorKind::UndefinedObject => "undefined object",
			ErrorKind::DuplicateObject => "duplicate object",
			ErrorKind::Syntax => "syntax error",
			ErrorKind::Internal => "internal error",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		self.0.kind
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn message(&self) -> &str {
		&self.0.message
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&DefaultRenderer::render_string(&self.0))
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}
