// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{ErrorKind, diagnostic::Diagnostic};

pub fn double_initialization() -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		kind: ErrorKind::Configuration,
		message: "double initialization of the backend session".to_string(),
		label: Some("a backend session already exists for this process".to_string()),
		help: Some("initialize the gateway exactly once per process".to_string()),
		notes: vec![],
		cause: None,
	}
}
