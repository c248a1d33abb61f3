// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{InsertOptions, ModelEvent, ModelStorage, Row};

/// Capability surface a persistable model exposes to the bulk insert
/// engine. This is the sole contract with the surrounding data layer:
/// the engine reaches lifecycle hooks and insert attributes only through
/// this trait, never through runtime introspection.
pub trait Model {
	/// Discriminant of the concrete model type. Every model in one bulk
	/// insert call must report the same discriminant.
	fn model_type(&self) -> &'static str;

	/// Name of the storage target rows of this model are written to.
	fn table(&self) -> &str;

	/// Whether this model has been committed to storage.
	fn exists(&self) -> bool;

	fn set_exists(&mut self, exists: bool);

	/// Whether this model was created during the current operation.
	fn was_recently_created(&self) -> bool;

	fn set_was_recently_created(&mut self, created: bool);

	/// Whether this model type tracks creation/update timestamps.
	fn uses_timestamps(&self) -> bool {
		false
	}

	/// Set the creation and update timestamp fields to the current
	/// instant. Only called when [`uses_timestamps`](Self::uses_timestamps)
	/// returns true.
	fn update_timestamps(&mut self) {}

	/// Fire a lifecycle event. For haltable events a `false` return
	/// cancels the whole operation; for non-haltable events the result
	/// is ignored. The default implementation observes nothing and
	/// always proceeds.
	fn fire_model_event(&mut self, event: ModelEvent, haltable: bool) -> bool {
		let _ = (event, haltable);
		true
	}

	/// The column to value mapping written for this model. Called after
	/// timestamp stamping and after the pre-insert events have accepted,
	/// so any event-side field mutation is reflected in the emitted row.
	fn attributes_for_insert(&self) -> Row;

	/// Finalize hook fired once per model after its chunk has committed,
	/// with the options map the caller passed to the bulk insert.
	fn finish_save(&mut self, options: &InsertOptions) {
		let _ = options;
	}

	/// The storage this model type persists into.
	fn storage(&self) -> Arc<dyn ModelStorage>;
}
