// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

/// Plain-text renderer used by `Display` on
/// [`Error`](crate::Error).
pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = format!("[{}] {}", diagnostic.code, diagnostic.message);
		if let Some(label) = &diagnostic.label {
			out.push_str(&format!("\n  {}", label));
		}
		if let Some(help) = &diagnostic.help {
			out.push_str(&format!("\n  help: {}", help));
		}
		for note in &diagnostic.notes {
			out.push_str(&format!("\n  note: {}", note));
		}
		if let Some(cause) = &diagnostic.cause {
			out.push_str(&format!("\n  caused by: {}", Self::render_string(cause)));
		}
		out
	}
}
