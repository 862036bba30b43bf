//! # Layers
//! A legacy document consists of a tree of [Layers](layer_info::LegacyLayer).
//! There are two types of layers:
//! * [Folder layers](folder_layer::FolderLegacyLayer), which encapsulate sub-layers
//! * [Node graph layers](layer_layer::LayerLegacyLayer), which each own a node network that renders the layer's content
//!
//! Layers are rendered on top of each other, with the first layer in a folder drawn on top.

/// Contains the [FolderLegacyLayer](folder_layer::FolderLegacyLayer) type that encapsulates other layers, including more folders.
pub mod folder_layer;
/// Contains the base [LegacyLayer](layer_info::LegacyLayer) type, an abstraction over the different types of layers.
pub mod layer_info;
/// Contains the [LayerLegacyLayer](layer_layer::LayerLegacyLayer) type that contains a node graph.
pub mod layer_layer;
