// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

/// The backend rejected a commit. `message` is the backend's own text.
pub fn commit_conflict(message: String) -> Diagnostic {
	Diagnostic {
		code: "TXN_001".to_string(),
		kind: ErrorKind::SerializationFailure,
		message: format!("Error during commit: {}", message),
		label: Some("the transaction was aborted".to_string()),
		help: Some("retry the transaction".to_string()),
		notes: vec!["the backend rejected the commit because of a conflicting transaction".to_string()],
		cause: None,
	}
}
