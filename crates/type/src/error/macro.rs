// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

/// Wrap a [`Diagnostic`](crate::Diagnostic) into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Return early with an [`Error`](crate::Error) built from the given
/// diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}
