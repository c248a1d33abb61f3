// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::Model;

/// Stamp creation and update timestamps on models that opt into timestamp
/// tracking. Runs before attribute extraction so the stamped fields land
/// in the emitted row. Infallible.
pub(crate) fn stamp(model: &mut dyn Model) {
	if model.uses_timestamps() {
		model.update_timestamps();
	}
}
