// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

pub fn unsupported(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "FEATURE_001".to_string(),
		kind: ErrorKind::FeatureUnsupported,
		message: message.into(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn drop_not_supported(object: &str, if_exists: bool) -> Diagnostic {
	let statement = if if_exists {
		format!("DROP {} IF EXISTS", object.to_uppercase())
	} else {
		format!("DROP {}", object.to_uppercase())
	};

	Diagnostic {
		code: "FEATURE_002".to_string(),
		kind: ErrorKind::FeatureUnsupported,
		message: format!("{} is not supported", statement),
		label: Some(format!("dropping a {} is not available in this deployment", object)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn qualified_name_too_long(name: &str, max_parts: usize) -> Diagnostic {
	Diagnostic {
		code: "FEATURE_003".to_string(),
		kind: ErrorKind::FeatureUnsupported,
		message: format!("qualified name '{}' has too many parts", name),
		label: Some(format!("at most {} dotted parts are accepted here", max_parts)),
		help: Some("use keyspace.object or a bare object name".to_string()),
		notes: vec![],
		cause: None,
	}
}
