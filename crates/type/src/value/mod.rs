// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A storable column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime<Utc>),
	/// A UUID version 4 (random)
	Uuid4(Uuid),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn datetime(v: DateTime<Utc>) -> Self {
		Value::DateTime(v)
	}

	pub fn uuid4(v: Uuid) -> Self {
		Value::Uuid4(v)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Utf8(v) => f.write_str(v),
			Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
			Value::Uuid4(v) => write!(f, "{}", v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(v: DateTime<Utc>) -> Self {
		Value::DateTime(v)
	}
}

impl From<Uuid> for Value {
	fn from(v: Uuid) -> Self {
		Value::Uuid4(v)
	}
}
