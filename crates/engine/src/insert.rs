// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::{InsertOptions, Model, ModelStorage, Row};
use bulkrow_type::Result;
use tracing::{debug, instrument, trace};

use crate::{chunk, extract, finalize, hook, timestamp, validate};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Persist a collection of not-yet-persisted models with default settings
/// (chunks of [`DEFAULT_CHUNK_SIZE`], empty options).
pub fn insert(models: &mut [Box<dyn Model>]) -> Result<bool> {
	BulkInsert::new().execute(models)
}

/// Batched persistence of homogeneous models.
///
/// One multi-row insert statement is issued per chunk, while every model
/// still goes through the lifecycle an individual save would apply:
/// `saving` and `creating` events, timestamp stamping, and after the chunk
/// committed, the persisted-state transition, the `created` event, and the
/// finalize hook.
///
/// `Ok(false)` means the operation was cancelled by an event or the
/// storage reported no effect; chunks committed before that point stay
/// committed. `Err` is raised for validation violations and storage-layer
/// failures.
pub struct BulkInsert {
	chunk_size: usize,
	options: InsertOptions,
}

impl Default for BulkInsert {
	fn default() -> Self {
		Self::new()
	}
}

impl BulkInsert {
	pub fn new() -> Self {
		Self {
			chunk_size: DEFAULT_CHUNK_SIZE,
			options: InsertOptions::new(),
		}
	}

	/// Maximum number of rows per insert statement. Zero is rejected at
	/// execution time.
	pub fn chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size;
		self
	}

	/// Options forwarded unchanged to every model's finalize hook.
	pub fn options(mut self, options: InsertOptions) -> Self {
		self.options = options;
		self
	}

	#[instrument(name = "engine::insert::execute", level = "debug", skip_all, fields(
		models = models.len(),
		chunk_size = self.chunk_size
	))]
	pub fn execute(&self, models: &mut [Box<dyn Model>]) -> Result<bool> {
		if models.is_empty() {
			return Ok(true);
		}

		let expected = models[0].model_type();
		let table = models[0].table().to_string();
		let storage = models[0].storage();

		for chunk in chunk::chunks(models, self.chunk_size)? {
			let mut rows = Vec::with_capacity(chunk.len());
			for model in chunk.iter_mut() {
				validate::check(model.as_ref(), expected)?;
				if !hook::fire_saving(model.as_mut()) {
					trace!(model = expected, "saving event cancelled bulk insert");
					return Ok(false);
				}
				if !hook::fire_creating(model.as_mut()) {
					trace!(model = expected, "creating event cancelled bulk insert");
					return Ok(false);
				}
				timestamp::stamp(model.as_mut());
				rows.push(extract::attributes(model.as_ref()));
			}
			if !run_chunk(storage.as_ref(), &table, &rows)? {
				return Ok(false);
			}
			finalize::finalize(chunk, &self.options);
		}
		Ok(true)
	}
}

/// Issue exactly one multi-row insert statement for a chunk, bypassing any
/// ambient query scope. A failed or ineffective statement stops the
/// operation; chunks committed before it are not rolled back.
fn run_chunk(storage: &dyn ModelStorage, table: &str, rows: &[Row]) -> Result<bool> {
	debug!(table, rows = rows.len(), "issuing multi-row insert");
	storage.insert_without_scopes(table, rows)
}
