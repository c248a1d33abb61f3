// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! SQLite implementation of [`ModelStorage`](bulkrow_core::ModelStorage).
//!
//! One synchronous connection, one multi-row `INSERT` statement per call.

mod config;
mod storage;

pub use config::SqliteConfig;
pub use storage::SqliteStorage;
