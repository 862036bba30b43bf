use crate::error::DocumentError;
use crate::layers::folder_layer::FolderLegacyLayer;
use crate::layers::layer_info::{LegacyLayer, LegacyLayerType};

use graph_craft::document::NodeNetwork;

use serde::{Deserialize, Serialize};

/// A number that identifies a layer.
/// This does not technically need to be unique globally, only within a folder.
pub type LayerId = u64;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Document {
	/// The root layer, usually a [FolderLegacyLayer](crate::layers::folder_layer::FolderLegacyLayer) that contains all other [LegacyLayers](LegacyLayer).
	pub root: LegacyLayer,
	/// The node graph that renders the document. Empty in documents saved before the node graph existed.
	#[serde(default)]
	pub document_network: NodeNetwork,
	/// The commit of the editor that saved the document.
	#[serde(default)]
	pub commit_hash: String,
}

impl Document {
	/// Returns the folder at `path`, where each element is a layer id within the previous folder. An empty path is the root.
	pub fn folder(&self, path: &[LayerId]) -> Result<&FolderLegacyLayer, DocumentError> {
		let mut folder = self.root.data.as_folder().ok_or_else(|| DocumentError::NotFolder(Vec::new()))?;
		for (depth, &id) in path.iter().enumerate() {
			folder = folder
				.layer(id)
				.and_then(|layer| layer.data.as_folder())
				.ok_or_else(|| DocumentError::NotFolder(path[..=depth].to_vec()))?;
		}
		Ok(folder)
	}

	/// Number of layers in the tree, counting folders and the root itself.
	pub fn layer_count(&self) -> usize {
		self.root.data.iter().count()
	}

	/// Number of node graph layers in the tree.
	pub fn network_layer_count(&self) -> usize {
		self.root.data.iter().filter(|layer| matches!(layer, LegacyLayerType::Layer(_))).count()
	}
}
