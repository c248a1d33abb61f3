// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::{ModelStorage, Row};
use bulkrow_type::{
	Result, Value,
	diagnostic::storage::{insert_failed, open_failed, statement_failed},
	error,
};
use parking_lot::Mutex;
use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::SqliteConfig;

/// SQLite-backed [`ModelStorage`].
///
/// Holds a single connection behind a mutex; there is no ambient query
/// scoping in this backend, so `insert_without_scopes` is a plain
/// multi-row insert. Chunk sizes must stay below the SQLite bound
/// variable limit divided by the column count.
pub struct SqliteStorage {
	conn: Mutex<Connection>,
}

impl SqliteStorage {
	#[instrument(name = "store::sqlite::new", level = "info", skip(config), fields(path = ?config.path))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let conn = match &config.path {
			Some(path) => Connection::open(path)
				.map_err(|e| error!(open_failed(&path.display().to_string(), e)))?,
			None => Connection::open_in_memory().map_err(|e| error!(open_failed(":memory:", e)))?,
		};

		if config.path.is_some() {
			conn.pragma_update(None, "journal_mode", "WAL")
				.map_err(|e| error!(statement_failed(e)))?;
			conn.pragma_update(None, "synchronous", "NORMAL")
				.map_err(|e| error!(statement_failed(e)))?;
		}

		Ok(Self {
			conn: Mutex::new(conn),
		})
	}

	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	/// Run a closure against the underlying connection, for schema setup
	/// and queries outside the bulk insert path.
	pub fn with_connection<R>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<R>) -> Result<R> {
		let conn = self.conn.lock();
		f(&conn).map_err(|e| error!(statement_failed(e)))
	}

	/// Execute a single statement, returning the number of affected rows.
	pub fn execute(&self, sql: &str) -> Result<usize> {
		self.with_connection(|conn| conn.execute(sql, []))
	}
}

impl ModelStorage for SqliteStorage {
	#[instrument(name = "store::sqlite::insert", level = "debug", skip(self, rows), fields(
		table = %table,
		rows = rows.len()
	))]
	fn insert_without_scopes(&self, table: &str, rows: &[Row]) -> Result<bool> {
		if rows.is_empty() {
			return Ok(true);
		}

		let columns: Vec<&str> = rows[0].columns().collect();
		debug_assert!(rows.iter().all(|row| row.len() == columns.len()));

		let column_list =
			columns.iter().map(|column| format!("\"{}\"", column)).collect::<Vec<_>>().join(", ");
		let row_placeholders = format!("({})", vec!["?"; columns.len()].join(", "));
		let placeholders = vec![row_placeholders.as_str(); rows.len()].join(", ");
		let sql = format!("INSERT INTO \"{}\" ({}) VALUES {}", table, column_list, placeholders);

		let params =
			rusqlite::params_from_iter(rows.iter().flat_map(|row| row.values().map(to_sql_value)));

		let conn = self.conn.lock();
		let affected = conn.execute(&sql, params).map_err(|e| error!(insert_failed(table, rows.len(), e)))?;
		debug!(affected, "multi-row insert committed");
		Ok(affected == rows.len())
	}
}

fn to_sql_value(value: &Value) -> rusqlite::types::Value {
	use rusqlite::types::Value as SqlValue;

	match value {
		Value::Undefined => SqlValue::Null,
		Value::Boolean(v) => SqlValue::Integer(*v as i64),
		Value::Int4(v) => SqlValue::Integer(*v as i64),
		Value::Int8(v) => SqlValue::Integer(*v),
		Value::Float8(v) => SqlValue::Real(*v),
		Value::Utf8(v) => SqlValue::Text(v.clone()),
		Value::DateTime(v) => SqlValue::Text(v.to_rfc3339()),
		Value::Uuid4(v) => SqlValue::Text(v.to_string()),
	}
}
