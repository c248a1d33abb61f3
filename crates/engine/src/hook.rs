// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::{Model, ModelEvent};

/// Fire the pre-insert `saving` event. A `false` result cancels the whole
/// operation, not just the current chunk.
pub(crate) fn fire_saving(model: &mut dyn Model) -> bool {
	model.fire_model_event(ModelEvent::Saving, true)
}

/// Fire the pre-insert `creating` event, with the same cancellation
/// semantics as `saving`.
pub(crate) fn fire_creating(model: &mut dyn Model) -> bool {
	model.fire_model_event(ModelEvent::Creating, true)
}

/// Fire the post-commit `created` event. The result carries no control
/// flow: the chunk is already committed.
pub(crate) fn fire_created(model: &mut dyn Model) {
	model.fire_model_event(ModelEvent::Created, false);
}

#[cfg(test)]
mod tests {
	use bulkrow_core::ModelEvent;
	use bulkrow_testing::Fixture;

	use super::*;

	#[test]
	fn test_saving_veto_propagates() {
		let fixture = Fixture::new();
		let mut model = fixture.model("r1").veto(ModelEvent::Saving);
		assert!(!fire_saving(&mut model));
		assert!(fire_creating(&mut model));
	}

	#[test]
	fn test_created_veto_is_ignored() {
		let fixture = Fixture::new();
		let mut model = fixture.model("r1").veto(ModelEvent::Created);
		fire_created(&mut model);
		assert_eq!(fixture.journal.events(), vec!["r1:created"]);
	}
}
