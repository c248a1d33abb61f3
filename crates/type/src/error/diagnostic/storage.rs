// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::Display;

use super::Diagnostic;

pub fn insert_failed(table: &str, rows: usize, cause: impl Display) -> Diagnostic {
	Diagnostic {
		code: "STORE_001".to_string(),
		message: format!("failed to insert {} rows into \"{}\"", rows, table),
		label: None,
		help: None,
		notes: vec![format!("{}", cause)],
		cause: None,
	}
}

pub fn open_failed(target: &str, cause: impl Display) -> Diagnostic {
	Diagnostic {
		code: "STORE_002".to_string(),
		message: format!("failed to open storage at {}", target),
		label: None,
		help: Some("check that the path exists and is writable".to_string()),
		notes: vec![format!("{}", cause)],
		cause: None,
	}
}

pub fn statement_failed(cause: impl Display) -> Diagnostic {
	Diagnostic {
		code: "STORE_003".to_string(),
		message: "storage statement failed".to_string(),
		label: None,
		help: None,
		notes: vec![format!("{}", cause)],
		cause: None,
	}
}
