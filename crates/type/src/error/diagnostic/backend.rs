// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

/// A failure reported by the storage backend outside of commit. The message
/// is carried verbatim.
pub fn backend_failure(message: String) -> Diagnostic {
	Diagnostic {
		code: "BACKEND_001".to_string(),
		kind: ErrorKind::InternalBackend,
		message,
		label: Some("storage backend reported a failure".to_string()),
		help: Some("the current statement was aborted".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn session_creation_failed(database: &str, message: String) -> Diagnostic {
	Diagnostic {
		code: "BACKEND_002".to_string(),
		kind: ErrorKind::InternalBackend,
		message,
		label: Some(format!("could not open a backend session for database '{}'", database)),
		help: None,
		notes: vec![],
		cause: None,
	}
}
