// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::slice::ChunksMut;

use bulkrow_core::Model;
use bulkrow_type::{Result, diagnostic::insert::invalid_chunk_size, return_error};

/// Split the models into ordered sub-slices of at most `chunk_size`
/// elements. The last chunk may be shorter; nothing is reordered or
/// deduplicated.
pub(crate) fn chunks(
	models: &mut [Box<dyn Model>],
	chunk_size: usize,
) -> Result<ChunksMut<'_, Box<dyn Model>>> {
	if chunk_size == 0 {
		return_error!(invalid_chunk_size(chunk_size));
	}
	Ok(models.chunks_mut(chunk_size))
}
