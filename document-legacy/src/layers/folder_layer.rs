use super::layer_info::LegacyLayer;
use crate::document::LayerId;

use serde::{Deserialize, Serialize};

/// A layer that encapsulates other layers, including potentially more folders.
/// The contained layers are rendered in the same order they are stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FolderLegacyLayer {
	/// The ID that would have been assigned to the next layer added to the folder
	#[serde(default)]
	pub next_assignment_id: LayerId,
	/// The IDs of the [Layer]s contained within the Folder
	#[serde(default)]
	pub layer_ids: Vec<LayerId>,
	/// The [Layer]s contained in the folder
	pub layers: Vec<LegacyLayer>,
}

impl FolderLegacyLayer {
	pub fn layer(&self, layer_id: LayerId) -> Option<&LegacyLayer> {
		let index = self.layer_ids.iter().position(|x| *x == layer_id)?;
		self.layers.get(index)
	}
}
