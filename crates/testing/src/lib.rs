// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shared test support for the bulkrow workspace: a scriptable model,
//! an in-memory storage with failure injection, and a journal that
//! records hook firing order across models.

use std::sync::Arc;

use bulkrow_core::Model;

mod journal;
mod model;
mod storage;

pub use journal::Journal;
pub use model::TestModel;
pub use storage::{Failure, MemoryStorage};

/// One storage plus one journal, shared by every model built from it.
pub struct Fixture {
	pub storage: Arc<MemoryStorage>,
	pub journal: Journal,
}

impl Default for Fixture {
	fn default() -> Self {
		Self::new()
	}
}

impl Fixture {
	pub fn new() -> Self {
		Self {
			storage: MemoryStorage::new(),
			journal: Journal::new(),
		}
	}

	pub fn model(&self, name: &str) -> TestModel {
		TestModel::new(name, self.journal.clone(), self.storage.clone())
	}

	/// Build `count` boxed models named `r1..rN`, in order.
	pub fn models(&self, count: usize) -> Vec<Box<dyn Model>> {
		(1..=count).map(|i| Box::new(self.model(&format!("r{}", i))) as Box<dyn Model>).collect()
	}
}
