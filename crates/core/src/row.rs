// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::{Deref, DerefMut};

use bulkrow_type::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One insert row: an ordered mapping of column names to values. Column
/// order is insertion order and is preserved into the emitted statement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row(pub IndexMap<String, Value>);

impl Row {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(column.into(), value.into());
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

impl Deref for Row {
	type Target = IndexMap<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Row {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl FromIterator<(String, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(IndexMap::from_iter(iter))
	}
}
