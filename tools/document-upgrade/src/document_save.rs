//! The whole-file envelope of a saved document, wrapping the document itself in editor state.

use graph_craft::document::NodeNetwork;
use graphite_document_legacy::document::Document;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The editor commit whose document format the upgrade produces.
pub const UPGRADED_COMMIT_HASH: &str = "ef46080400bc6c4e069765dd2127306abbc9a94b";
/// The document format version the upgrade produces.
pub const UPGRADED_VERSION: &str = "0.0.18";
pub const UPGRADED_NAME: &str = "Untitled Document 10";

/// A saved legacy document. Only the layer tree is read; the editor state around it is regenerated.
#[derive(Clone, Debug, Deserialize)]
pub struct LegacyDocumentSave {
	pub document_legacy: Document,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentMode {
	#[default]
	DesignMode,
	SelectMode,
	GuideMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
	#[default]
	Normal,
	Outline,
	Pixels,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformOperation {
	#[default]
	None,
	Pan,
	Rotate,
	Zoom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationHandler {
	pub pan: DVec2,
	pub tilt: f64,
	pub zoom: f64,
	pub transform_operation: TransformOperation,
	pub mouse_position: DVec2,
	pub finish_operation_with_click: bool,
}

impl Default for NavigationHandler {
	fn default() -> Self {
		Self {
			pan: DVec2::new(82., 84.),
			tilt: 0.,
			zoom: 1.,
			transform_operation: TransformOperation::None,
			mouse_position: DVec2::new(389., 507.),
			finish_operation_with_click: false,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertiesPanelMessageHandler {
	pub active_selection: Option<serde_json::Value>,
}

/// A saved document in the node graph document format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentSave {
	pub document_legacy: Document,
	pub saved_document_identifier: u64,
	pub auto_saved_document_identifier: u64,
	pub name: String,
	pub version: String,
	pub document_mode: DocumentMode,
	pub view_mode: ViewMode,
	pub overlays_visible: bool,
	pub layer_metadata: Vec<serde_json::Value>,
	pub layer_range_selection_reference: Option<serde_json::Value>,
	pub navigation_handler: NavigationHandler,
	pub properties_panel_message_handler: PropertiesPanelMessageHandler,
}

impl DocumentSave {
	/// Wraps a document network in a fresh document: an empty legacy layer tree and default editor state.
	pub fn new(document_network: NodeNetwork) -> Self {
		Self {
			document_legacy: Document {
				root: Default::default(),
				document_network,
				commit_hash: UPGRADED_COMMIT_HASH.into(),
			},
			saved_document_identifier: 0,
			auto_saved_document_identifier: 0,
			name: UPGRADED_NAME.into(),
			version: UPGRADED_VERSION.into(),
			document_mode: DocumentMode::DesignMode,
			view_mode: ViewMode::Normal,
			overlays_visible: true,
			layer_metadata: Vec::new(),
			layer_range_selection_reference: None,
			navigation_handler: NavigationHandler::default(),
			properties_panel_message_handler: PropertiesPanelMessageHandler::default(),
		}
	}

	pub fn document_network(&self) -> &NodeNetwork {
		&self.document_legacy.document_network
	}
}
