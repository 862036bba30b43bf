//! Turns the legacy layer tree into the flat node network used by the node graph document format.
//!
//! Every legacy layer becomes a "Layer" node. Each one composites its own content on top of the "Layer" node
//! below it, so the layers of a folder form a chain from top to bottom. The nodes of a legacy layer's network
//! are moved into the document network under fresh ids, laid out on their own row.

use crate::context::UpgradeContext;
use crate::error::UpgradeError;
use crate::templates;

use graph_craft::document::{DocumentNode, DocumentNodeImplementation, NodeId, NodeInput, NodeNetwork};
use graphite_document_legacy::layers::folder_layer::FolderLegacyLayer;
use graphite_document_legacy::layers::layer_info::{LayerDataTypeDiscriminant, LegacyLayerType};

use glam::IVec2;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Nodes created for one layer (and everything below it), keyed by their new id.
pub type UpgradedNodes = BTreeMap<NodeId, DocumentNode>;

/// How far each folder level is indented to the right, in grid units.
pub const FOLDER_INDENT: i32 = 5;

/// Horizontal gap between a "Shape" node and the "Cull" node inserted after it.
pub const CULL_SPACING: i32 = 8;

/// Upgrades one legacy layer and everything inside it.
///
/// The resulting "Layer" node is stored under `layer_node_id`. Its content comes from the layer's own network, or for
/// folders, from the topmost child. `next_id` is the "Layer" node this one is composited onto, if any.
pub fn upgrade_layer(context: &mut UpgradeContext, data: &LegacyLayerType, indent: i32, layer_node_id: NodeId, next_id: Option<NodeId>) -> Result<UpgradedNodes, UpgradeError> {
	let y = context.rows.next_row();
	let mut new_nodes = UpgradedNodes::new();

	let output = match data {
		LegacyLayerType::Folder(folder) => upgrade_folder(context, folder, indent, &mut new_nodes)?,
		LegacyLayerType::Layer(layer) => Some(upgrade_network(context, &layer.network, indent, y, &mut new_nodes)?),
	};

	if let Some(output) = output {
		if !new_nodes.contains_key(&output) {
			return Err(UpgradeError::MissingOutput(output));
		}
	}

	debug!(
		"Upgraded {} into layer node {layer_node_id} (output {output:?}, next {next_id:?}, {} nodes)",
		LayerDataTypeDiscriminant::from(data),
		new_nodes.len()
	);
	insert_node(&mut new_nodes, layer_node_id, templates::layer_node(output, next_id, IVec2::new(-indent, y)))?;

	Ok(new_nodes)
}

/// Upgrades the children of a folder, returning the id of the topmost child's "Layer" node.
///
/// One id is reserved per child in declared order before any child is visited. The children are then visited in
/// reverse order, each one given the next reserved id as the layer it composites onto, so the chain of layers ends
/// at the last reserved id.
fn upgrade_folder(context: &mut UpgradeContext, folder: &FolderLegacyLayer, indent: i32, new_nodes: &mut UpgradedNodes) -> Result<Option<NodeId>, UpgradeError> {
	let layer_ids = context.node_ids.reserve(folder.layers.len());

	for (index, layer) in folder.layers.iter().rev().enumerate() {
		let next_id = layer_ids.get(index + 1).copied();
		let child_nodes = upgrade_layer(context, &layer.data, indent + FOLDER_INDENT, layer_ids[index], next_id)?;
		for (id, node) in child_nodes {
			insert_node(new_nodes, id, node)?;
		}
	}

	Ok(layer_ids.first().copied())
}

/// Moves the nodes of a legacy layer's network into `new_nodes` under fresh ids, returning the id of the node that
/// produces the layer's content.
///
/// The network's own "Output" node is dropped. Nodes are renumbered in ascending order of their old id.
pub fn upgrade_network(context: &mut UpgradeContext, network: &NodeNetwork, indent: i32, y: i32, new_nodes: &mut UpgradedNodes) -> Result<NodeId, UpgradeError> {
	let old_ids = network.nodes.iter().filter(|(_, node)| node.name != "Output").map(|(&id, _)| id).collect::<Vec<_>>();
	let new_ids = old_ids.iter().map(|&old_id| (old_id, context.node_ids.next_id())).collect::<FxHashMap<_, _>>();

	let output_id = network.outputs.first().ok_or(UpgradeError::NoNetworkOutput)?.node_id;
	let (_, output_node) = network.output_node().ok_or(UpgradeError::MissingNode(output_id))?;
	let shift_left = output_node.metadata.position.x;
	let output_source = output_node.inputs.first().and_then(NodeInput::as_node).ok_or(UpgradeError::OutputNotConnected(output_id))?;
	let output = *new_ids.get(&output_source).ok_or(UpgradeError::UnmappedReference {
		node: output_id,
		reference: output_source,
	})?;

	// Checked against the network as it was saved, so a "Cull" inserted below does not stop later "Shape" nodes from getting their own
	let has_cull = old_ids.iter().any(|id| network.nodes[id].name == "Cull");

	for old_id in old_ids {
		let mut node = network.nodes[&old_id].clone();
		node.map_input_ids(|reference| new_ids.get(&reference).copied().ok_or(UpgradeError::UnmappedReference { node: old_id, reference }))?;

		match node.name.as_str() {
			"Transform" => {
				node.implementation = DocumentNodeImplementation::proto(templates::TRANSFORM_NODE);
				node.manual_composition = Some(templates::footprint());
			}
			"Shape" if !has_cull => {
				let shape_id = context.node_ids.next_id();
				trace!("Inserting a cull node after shape node {old_id} (now {shape_id})");

				let mut shape = node.clone();
				shape.metadata.position = IVec2::new(shift_x(shape.metadata.position.x, &[shift_left, CULL_SPACING, indent], old_id)?, y);
				insert_node(new_nodes, shape_id, shape)?;

				node.name = "Cull".into();
				node.inputs = vec![NodeInput::node(shape_id, 0)];
				node.manual_composition = Some(templates::footprint());
				node.has_primary_output = true;
				node.implementation = DocumentNodeImplementation::proto(templates::CULL_NODE);
			}
			_ => {}
		}

		node.metadata.position = IVec2::new(shift_x(node.metadata.position.x, &[shift_left, indent], old_id)?, y);
		insert_node(new_nodes, new_ids[&old_id], node)?;
	}

	Ok(output)
}

/// Moves `x` left by the sum of `offsets`, failing where the result leaves the range of a grid position.
fn shift_x(x: i32, offsets: &[i32], node: NodeId) -> Result<i32, UpgradeError> {
	let shifted = offsets.iter().fold(i64::from(x), |x, &offset| x - i64::from(offset));
	i32::try_from(shifted).map_err(|_| UpgradeError::PositionOverflow(node))
}

fn insert_node(nodes: &mut UpgradedNodes, id: NodeId, node: DocumentNode) -> Result<(), UpgradeError> {
	match nodes.insert(id, node) {
		Some(_) => Err(UpgradeError::IdCollision(id)),
		None => Ok(()),
	}
}
