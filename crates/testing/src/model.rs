// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use bulkrow_core::{InsertOptions, Model, ModelEvent, ModelStorage, Row};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::Journal;

/// Scriptable [`Model`] implementation. Every hook firing is written to
/// the shared [`Journal`] as `"{name}:{event}"`, so tests can assert the
/// exact ordering across a whole batch.
pub struct TestModel {
	id: Uuid,
	name: String,
	model_type: &'static str,
	table: String,
	exists: bool,
	was_recently_created: bool,
	timestamps: bool,
	created_at: Option<DateTime<Utc>>,
	updated_at: Option<DateTime<Utc>>,
	veto: Option<ModelEvent>,
	journal: Journal,
	storage: Arc<dyn ModelStorage>,
}

impl TestModel {
	pub fn new(name: &str, journal: Journal, storage: Arc<dyn ModelStorage>) -> Self {
		Self {
			id: Uuid::new_v4(),
			name: name.to_string(),
			model_type: "TestModel",
			table: "test_models".to_string(),
			exists: false,
			was_recently_created: false,
			timestamps: false,
			created_at: None,
			updated_at: None,
			veto: None,
			journal,
			storage,
		}
	}

	/// Report a different type discriminant, simulating a second model
	/// class mixed into the batch.
	pub fn with_model_type(mut self, model_type: &'static str) -> Self {
		self.model_type = model_type;
		self
	}

	/// Opt into timestamp tracking.
	pub fn with_timestamps(mut self) -> Self {
		self.timestamps = true;
		self
	}

	/// Answer `false` when the given event fires.
	pub fn veto(mut self, event: ModelEvent) -> Self {
		self.veto = Some(event);
		self
	}

	/// Mark the model as already committed to storage.
	pub fn persisted(mut self) -> Self {
		self.exists = true;
		self
	}
}

impl Model for TestModel {
	fn model_type(&self) -> &'static str {
		self.model_type
	}

	fn table(&self) -> &str {
		&self.table
	}

	fn exists(&self) -> bool {
		self.exists
	}

	fn set_exists(&mut self, exists: bool) {
		self.exists = exists;
	}

	fn was_recently_created(&self) -> bool {
		self.was_recently_created
	}

	fn set_was_recently_created(&mut self, created: bool) {
		self.was_recently_created = created;
	}

	fn uses_timestamps(&self) -> bool {
		self.timestamps
	}

	fn update_timestamps(&mut self) {
		let now = Utc::now();
		self.created_at = Some(now);
		self.updated_at = Some(now);
	}

	fn fire_model_event(&mut self, event: ModelEvent, _haltable: bool) -> bool {
		self.journal.record_event(format!("{}:{}", self.name, event));
		self.veto != Some(event)
	}

	fn attributes_for_insert(&self) -> Row {
		let mut row = Row::new();
		row.set("id", self.id);
		row.set("name", self.name.as_str());
		if let Some(created_at) = self.created_at {
			row.set("created_at", created_at);
		}
		if let Some(updated_at) = self.updated_at {
			row.set("updated_at", updated_at);
		}
		row
	}

	fn finish_save(&mut self, options: &InsertOptions) {
		self.journal.record_event(format!("{}:finish_save", self.name));
		self.journal.record_save_options(options.clone());
	}

	fn storage(&self) -> Arc<dyn ModelStorage> {
		Arc::clone(&self.storage)
	}
}
