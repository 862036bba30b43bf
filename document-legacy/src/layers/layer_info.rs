use super::folder_layer::FolderLegacyLayer;
use super::layer_layer::LayerLegacyLayer;

use graph_craft::blend_mode::BlendMode;

use core::fmt;
use glam::{DAffine2, DMat2, DVec2};
use serde::{Deserialize, Serialize};

// ===============
// LegacyLayerType
// ===============

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Represents different types of layers.
pub enum LegacyLayerType {
	/// A layer that wraps a [FolderLegacyLayer] struct.
	Folder(FolderLegacyLayer),
	/// A layer that wraps an [LayerLegacyLayer] struct.
	Layer(LayerLegacyLayer),
}

impl Default for LegacyLayerType {
	fn default() -> Self {
		LegacyLayerType::Folder(Default::default())
	}
}

impl LegacyLayerType {
	/// Iterate over the layers encapsulated by this layer.
	/// If this is not a folder, the only item in the iterator will be the layer itself.
	/// If this wraps a [Folder](LegacyLayerType::Folder), the iterator will recursively yield all the layers contained in the folder as well as potential sub-folders.
	pub fn iter(&self) -> LegacyLayerTypeIter<'_> {
		LegacyLayerTypeIter { stack: vec![self] }
	}

	pub fn as_folder(&self) -> Option<&FolderLegacyLayer> {
		match self {
			LegacyLayerType::Folder(folder) => Some(folder),
			LegacyLayerType::Layer(_) => None,
		}
	}
}

// =========================
// LayerDataTypeDiscriminant
// =========================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LayerDataTypeDiscriminant {
	Folder,
	Layer,
}

impl fmt::Display for LayerDataTypeDiscriminant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			LayerDataTypeDiscriminant::Folder => write!(f, "Folder"),
			LayerDataTypeDiscriminant::Layer => write!(f, "Layer"),
		}
	}
}

impl From<&LegacyLayerType> for LayerDataTypeDiscriminant {
	fn from(data: &LegacyLayerType) -> Self {
		use LegacyLayerType::*;

		match data {
			Folder(_) => LayerDataTypeDiscriminant::Folder,
			Layer(_) => LayerDataTypeDiscriminant::Layer,
		}
	}
}

// ===================
// LegacyLayerTypeIter
// ===================

/// An iterator over the layers encapsulated by this layer.
/// See [LegacyLayerType::iter] for more information.
#[derive(Debug, Default)]
pub struct LegacyLayerTypeIter<'a> {
	pub stack: Vec<&'a LegacyLayerType>,
}

impl<'a> Iterator for LegacyLayerTypeIter<'a> {
	type Item = &'a LegacyLayerType;

	fn next(&mut self) -> Option<Self::Item> {
		self.stack.pop().map(|layer| {
			if let LegacyLayerType::Folder(folder) = layer {
				self.stack.extend(folder.layers.iter().map(|layer| &layer.data));
			}
			layer
		})
	}
}

// ===========
// LegacyLayer
// ===========

#[derive(Serialize, Deserialize)]
#[serde(remote = "glam::DAffine2")]
struct DAffine2Ref {
	pub matrix2: DMat2,
	pub translation: DVec2,
}

/// A layer of the legacy layer tree, wrapping either a folder or a node graph layer.
///
/// Only `data` is required when loading; older files may omit the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyLayer {
	/// Whether the layer is currently visible or hidden.
	pub visible: bool,
	/// The user-given name of the layer.
	pub name: Option<String>,
	/// The type of layer, such as folder or node graph layer.
	pub data: LegacyLayerType,
	/// A transformation applied to the layer (translation, rotation, scaling, and shear).
	#[serde(with = "DAffine2Ref")]
	pub transform: DAffine2,
	/// Should the aspect ratio of this layer be preserved?
	pub preserve_aspect: bool,
	/// The center of transformations like rotation or scaling with the shift key.
	/// This is in local space (so the layer's transform should be applied).
	pub pivot: DVec2,
	/// The blend mode describing how this layer should composite with others underneath it.
	pub blend_mode: BlendMode,
	/// The opacity, in the range of 0 to 1.
	pub opacity: f64,
}

impl Default for LegacyLayer {
	fn default() -> Self {
		Self::new(LegacyLayerType::default())
	}
}

impl LegacyLayer {
	pub fn new(data: LegacyLayerType) -> Self {
		Self {
			visible: true,
			name: None,
			data,
			transform: DAffine2::IDENTITY,
			preserve_aspect: true,
			pivot: DVec2::splat(0.5),
			blend_mode: BlendMode::Normal,
			opacity: 1.,
		}
	}

	pub fn discriminant(&self) -> LayerDataTypeDiscriminant {
		(&self.data).into()
	}
}
