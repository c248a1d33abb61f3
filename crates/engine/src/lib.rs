// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod chunk;
mod extract;
mod finalize;
mod hook;
mod insert;
mod timestamp;
mod validate;

pub use bulkrow_core::{InsertOptions, Model, ModelEvent, ModelStorage, Row};
pub use bulkrow_type::{Error, Result};
pub use insert::{BulkInsert, DEFAULT_CHUNK_SIZE, insert};
