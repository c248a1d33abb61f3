// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The fixed set of lifecycle events a model can observe during a bulk
/// insert, in firing order. `Saving` and `Creating` fire before the insert
/// statement and may cancel the operation; `Created` fires after the chunk
/// has committed and cannot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelEvent {
	Saving,
	Creating,
	Created,
}

impl ModelEvent {
	pub fn name(&self) -> &'static str {
		match self {
			ModelEvent::Saving => "saving",
			ModelEvent::Creating => "creating",
			ModelEvent::Created => "created",
		}
	}
}

impl Display for ModelEvent {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
