// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		kind: ErrorKind::Internal,
		message: reason.into(),
		label: None,
		help: Some("this is a bug in the gateway, please report it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn already_analyzed(node: &str) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_002".to_string(),
		kind: ErrorKind::Internal,
		message: format!("{} node was analyzed twice", node),
		label: None,
		help: Some("semantic analysis runs at most once per parse tree node".to_string()),
		notes: vec![],
		cause: None,
	}
}
