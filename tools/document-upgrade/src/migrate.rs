use crate::context::UpgradeContext;
use crate::document_save::{DocumentSave, LegacyDocumentSave};
use crate::error::UpgradeError;
use crate::flatten::upgrade_layer;
use crate::templates::render_output_node;

use graph_craft::document::{NodeId, NodeNetwork, NodeOutput};

use serde::Serialize;
use std::path::Path;

/// The id of the root "Output" node, which every upgraded document renders through.
pub const ROOT_OUTPUT_ID: NodeId = NodeId(0);

/// Converts a legacy layer tree into a document built around a single node network.
///
/// Every call starts from a fresh [`UpgradeContext`], so upgrading the same document twice gives identical results.
pub fn upgrade_document(legacy: &LegacyDocumentSave) -> Result<DocumentSave, UpgradeError> {
	let mut context = UpgradeContext::default();
	let root_layer = context.node_ids.next_id();

	let mut nodes = upgrade_layer(&mut context, &legacy.document_legacy.root.data, 0, root_layer, None)?;
	if nodes.insert(ROOT_OUTPUT_ID, render_output_node(root_layer)).is_some() {
		return Err(UpgradeError::IdCollision(ROOT_OUTPUT_ID));
	}

	let network = NodeNetwork {
		inputs: Vec::new(),
		outputs: vec![NodeOutput::new(ROOT_OUTPUT_ID, 0)],
		nodes,
		..Default::default()
	};

	if let Some(&(node, reference)) = network.dangling_references().first() {
		return Err(UpgradeError::DanglingReference { node, reference });
	}

	Ok(DocumentSave::new(network))
}

pub fn load_legacy_document(path: &Path) -> Result<LegacyDocumentSave, UpgradeError> {
	let text = std::fs::read_to_string(path).map_err(|source| UpgradeError::Io { path: path.to_path_buf(), source })?;
	serde_json::from_str(&text).map_err(|source| UpgradeError::Parse { path: path.to_path_buf(), source })
}

/// Serializes a document the way the editor saves it: pretty printed with tab indentation.
pub fn serialize_document(document: &DocumentSave) -> Result<Vec<u8>, UpgradeError> {
	let mut bytes = Vec::new();
	let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, serde_json::ser::PrettyFormatter::with_indent(b"\t"));
	document.serialize(&mut serializer).map_err(UpgradeError::Serialize)?;
	Ok(bytes)
}

/// Reads the legacy document at `input`, upgrades it and writes the result to `output`.
///
/// Nothing is written unless the whole document was upgraded successfully.
pub fn migrate_file(input: &Path, output: &Path) -> Result<DocumentSave, UpgradeError> {
	let legacy = load_legacy_document(input)?;
	let root = &legacy.document_legacy.root;
	match legacy.document_legacy.folder(&[]) {
		Ok(folder) => debug!("Loaded {input:?}: root folder of {} layers", folder.layers.len()),
		Err(error) => warn!("Loaded {input:?}: {error}, upgrading the {} root on its own", root.discriminant()),
	}

	let document = upgrade_document(&legacy)?;
	let bytes = serialize_document(&document)?;
	std::fs::write(output, bytes).map_err(|source| UpgradeError::Io { path: output.to_path_buf(), source })?;

	info!(
		"Upgraded {input:?} to {output:?}: {} legacy layers ({} with node graphs) became {} nodes",
		legacy.document_legacy.layer_count(),
		legacy.document_legacy.network_layer_count(),
		document.document_network().nodes.len()
	);
	Ok(document)
}
