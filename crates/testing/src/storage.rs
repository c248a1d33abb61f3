// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use bulkrow_core::{ModelStorage, Row};
use bulkrow_type::{Result, diagnostic::storage::insert_failed, error};
use parking_lot::Mutex;

/// How an injected storage failure presents itself to the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Failure {
	/// The statement reports no effect (`Ok(false)`).
	NoEffect,
	/// The statement raises a storage-layer error.
	Error,
}

/// In-memory [`ModelStorage`] that records every batch it receives and
/// can start failing after a configured number of successful batches.
pub struct MemoryStorage {
	inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
	batches: Vec<(String, Vec<Row>)>,
	fail_after: Option<(usize, Failure)>,
}

impl MemoryStorage {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			inner: Mutex::new(Inner::default()),
		})
	}

	/// Fail every insert after `batches` successful ones.
	pub fn fail_after(&self, batches: usize, failure: Failure) {
		self.inner.lock().fail_after = Some((batches, failure));
	}

	/// Every batch received so far, as `(table, rows)` in arrival order.
	pub fn batches(&self) -> Vec<(String, Vec<Row>)> {
		self.inner.lock().batches.clone()
	}

	pub fn batch_row_counts(&self) -> Vec<usize> {
		self.inner.lock().batches.iter().map(|(_, rows)| rows.len()).collect()
	}

	/// All received rows flattened across batches, in arrival order.
	pub fn inserted_rows(&self) -> Vec<Row> {
		self.inner.lock().batches.iter().flat_map(|(_, rows)| rows.clone()).collect()
	}
}

impl ModelStorage for MemoryStorage {
	fn insert_without_scopes(&self, table: &str, rows: &[Row]) -> Result<bool> {
		let mut inner = self.inner.lock();
		if let Some((after, failure)) = inner.fail_after {
			if inner.batches.len() >= after {
				return match failure {
					Failure::NoEffect => Ok(false),
					Failure::Error => {
						Err(error!(insert_failed(table, rows.len(), "injected failure")))
					}
				};
			}
		}
		inner.batches.push((table.to_string(), rows.to_vec()));
		Ok(true)
	}
}
