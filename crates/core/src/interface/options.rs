// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use bulkrow_type::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque configuration forwarded unchanged to every model's
/// [`finish_save`](crate::Model::finish_save). The engine interprets no
/// field of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertOptions(IndexMap<String, Value>);

impl InsertOptions {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}
}

impl Deref for InsertOptions {
	type Target = IndexMap<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
