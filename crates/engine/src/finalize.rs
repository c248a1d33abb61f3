// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::{InsertOptions, Model};

use crate::hook;

/// Transition every model of a just-committed chunk into persisted state.
///
/// Per model, in order: persisted-state flag, just-created flag, `created`
/// event, finalize hook with the caller's options. Both flags are set
/// before any event fires for that model. Side effects only; nothing here
/// affects the overall success value.
pub(crate) fn finalize(chunk: &mut [Box<dyn Model>], options: &InsertOptions) {
	for model in chunk.iter_mut() {
		model.set_exists(true);
		model.set_was_recently_created(true);
		hook::fire_created(model.as_mut());
		model.finish_save(options);
	}
}
