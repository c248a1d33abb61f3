// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use bulkrow_core::InsertOptions;
use parking_lot::Mutex;

/// Shared record of every hook fired during a test run, in firing order.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<JournalInner>>);

#[derive(Default)]
struct JournalInner {
	events: Vec<String>,
	save_options: Vec<InsertOptions>,
}

impl Journal {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record_event(&self, entry: impl Into<String>) {
		self.0.lock().events.push(entry.into());
	}

	pub fn record_save_options(&self, options: InsertOptions) {
		self.0.lock().save_options.push(options);
	}

	pub fn events(&self) -> Vec<String> {
		self.0.lock().events.clone()
	}

	/// The options maps passed to `finish_save`, one entry per call.
	pub fn save_options(&self) -> Vec<InsertOptions> {
		self.0.lock().save_options.clone()
	}
}
