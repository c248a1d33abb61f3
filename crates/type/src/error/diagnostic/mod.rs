// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

pub mod insert;
pub mod internal;
pub mod render;
pub mod storage;

/// Structured failure payload. Every error in the workspace carries one of
/// these, built by a constructor function in one of the submodules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}
