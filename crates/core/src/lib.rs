// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod event;
pub mod interface;
pub mod row;

pub use bulkrow_type::{Diagnostic, Error, Result, Value};
pub use event::ModelEvent;
pub use interface::{InsertOptions, Model, ModelStorage};
pub use row::Row;
