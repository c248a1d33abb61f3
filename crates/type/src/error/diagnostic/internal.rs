// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

pub fn internal(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: message.into(),
		label: None,
		help: Some("this is a bug, please report it".to_string()),
		notes: vec![],
		cause: None,
	}
}
