// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::Model;
use bulkrow_type::{
	Result,
	diagnostic::insert::{already_persisted, model_type_mismatch},
	return_error,
};

/// Check one model against the batch rules: it must report the same type
/// discriminant as the first model of the call and must not yet be
/// persisted. No side effects.
pub(crate) fn check(model: &dyn Model, expected: &str) -> Result<()> {
	let found = model.model_type();
	if found != expected {
		return_error!(model_type_mismatch(expected, found));
	}
	if model.exists() {
		return_error!(already_persisted(found));
	}
	Ok(())
}
