// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer};

/// The error type carried through every fallible operation in this
/// workspace. Wraps a [`Diagnostic`] payload built by one of the
/// constructor functions under [`diagnostic`].
#[derive(Debug, PartialEq)]
pub struct Error(pub Diagnostic);

pub type Result<T> = std::result::Result<T, Error>;

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}
