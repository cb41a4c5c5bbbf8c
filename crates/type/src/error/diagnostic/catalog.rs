// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

pub fn object_not_found(kind: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		kind: ErrorKind::UndefinedObject,
		message: format!("{} '{}' does not exist", kind, name),
		label: None,
		help: Some(format!("use IF EXISTS to ignore a missing {}", kind)),
		notes: vec![],
		cause: None,
	}
}

pub fn object_kind_mismatch(expected: &str, name: &str, found: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		kind: ErrorKind::UndefinedObject,
		message: format!("'{}' is not a {}", name, expected),
		label: Some(format!("found a {} with this name", found)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn no_keyspace_selected(name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_003".to_string(),
		kind: ErrorKind::UndefinedObject,
		message: format!("no keyspace selected to resolve '{}'", name),
		label: None,
		help: Some("qualify the name with a keyspace".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn object_already_exists(kind: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_004".to_string(),
		kind: ErrorKind::DuplicateObject,
		message: format!("{} '{}' already exists", kind, name),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
