use crate::document::value::TaggedValue;
use crate::{NodeIdentifier, Type};

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod value;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Utility function for providing a default boolean value to serde.
#[inline(always)]
fn return_true() -> bool {
	true
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentNodeMetadata {
	pub position: IVec2,
}

impl DocumentNodeMetadata {
	pub fn position(position: impl Into<IVec2>) -> Self {
		Self { position: position.into() }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
	pub name: String,
	pub inputs: Vec<NodeInput>,
	/// The type of the implicit call argument, if the node takes one that is not wired through `inputs`.
	#[serde(default)]
	pub manual_composition: Option<Type>,
	#[serde(default = "return_true")]
	pub has_primary_output: bool,
	pub implementation: DocumentNodeImplementation,
	#[serde(default)]
	pub metadata: DocumentNodeMetadata,
	#[serde(default)]
	pub skip_deduplication: bool,
	#[serde(default)]
	pub world_state_hash: u64,
	#[serde(default)]
	pub path: Option<Vec<NodeId>>,
}

impl Default for DocumentNode {
	fn default() -> Self {
		Self {
			name: Default::default(),
			inputs: Default::default(),
			manual_composition: Default::default(),
			has_primary_output: true,
			implementation: Default::default(),
			metadata: Default::default(),
			skip_deduplication: Default::default(),
			world_state_hash: Default::default(),
			path: Default::default(),
		}
	}
}

impl DocumentNode {
	/// Converts all node id inputs to a new id using `map`.
	///
	/// Stops at the first input `map` rejects and returns its error, leaving earlier inputs already converted.
	pub fn map_input_ids<E>(&mut self, mut map: impl FnMut(NodeId) -> Result<NodeId, E>) -> Result<(), E> {
		for input in &mut self.inputs {
			if let NodeInput::Node { node_id, .. } = input {
				*node_id = map(*node_id)?;
			}
		}
		Ok(())
	}

	/// The ids of every node this node reads from.
	pub fn referenced_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.inputs.iter().filter_map(|input| if let NodeInput::Node { node_id, .. } = input { Some(*node_id) } else { None })
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeInput {
	Node {
		node_id: NodeId,
		output_index: usize,
		#[serde(default)]
		lambda: bool,
	},
	Value {
		tagged_value: TaggedValue,
		exposed: bool,
	},
	Network(Type),
	#[serde(rename = "ShortCircut")]
	ShortCircuit(Type),
}

impl NodeInput {
	pub const fn node(node_id: NodeId, output_index: usize) -> Self {
		Self::Node { node_id, output_index, lambda: false }
	}

	pub const fn value(tagged_value: TaggedValue, exposed: bool) -> Self {
		Self::Value { tagged_value, exposed }
	}

	pub fn as_node(&self) -> Option<NodeId> {
		if let NodeInput::Node { node_id, .. } = self { Some(*node_id) } else { None }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DocumentNodeImplementation {
	Network(NodeNetwork),
	Unresolved(NodeIdentifier),
	Extract,
}

impl Default for DocumentNodeImplementation {
	fn default() -> Self {
		Self::Unresolved(NodeIdentifier::new("graphene_core::ops::IdNode"))
	}
}

impl DocumentNodeImplementation {
	pub fn get_network(&self) -> Option<&NodeNetwork> {
		if let DocumentNodeImplementation::Network(n) = self { Some(n) } else { None }
	}

	pub const fn proto(name: &'static str) -> Self {
		Self::Unresolved(NodeIdentifier::new(name))
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOutput {
	pub node_id: NodeId,
	pub node_output_index: usize,
}

impl NodeOutput {
	pub fn new(node_id: NodeId, node_output_index: usize) -> Self {
		Self { node_id, node_output_index }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeNetwork {
	pub inputs: Vec<NodeId>,
	pub outputs: Vec<NodeOutput>,
	/// Ordered by id so that serializing the same network always produces the same text
	pub nodes: BTreeMap<NodeId, DocumentNode>,
	/// These nodes are replaced with identity nodes when flattening
	#[serde(default)]
	pub disabled: Vec<NodeId>,
	/// In the case where a new node is chosen as output - what was the original
	#[serde(default)]
	pub previous_outputs: Option<Vec<NodeOutput>>,
}

impl NodeNetwork {
	/// The node named by the first network output, which is where the network's result is read from.
	pub fn output_node(&self) -> Option<(NodeId, &DocumentNode)> {
		let output = self.outputs.first()?;
		self.nodes.get(&output.node_id).map(|node| (output.node_id, node))
	}

	/// Every `(node, referenced id)` pair where a node reads from an id that is not part of this network.
	///
	/// Nested networks are checked against their own node set. A network output naming a missing node is reported as `(id, id)`.
	pub fn dangling_references(&self) -> Vec<(NodeId, NodeId)> {
		let mut dangling = Vec::new();
		for (&node_id, node) in &self.nodes {
			dangling.extend(node.referenced_ids().filter(|id| !self.nodes.contains_key(id)).map(|id| (node_id, id)));

			if let Some(network) = node.implementation.get_network() {
				let nested = network.dangling_references();
				if !nested.is_empty() {
					warn!("Nested network of node {node_id} ('{}') references missing nodes: {nested:?}", node.name);
				}
				dangling.extend(nested);
			}
		}
		dangling.extend(self.outputs.iter().filter(|output| !self.nodes.contains_key(&output.node_id)).map(|output| (output.node_id, output.node_id)));
		dangling
	}
}
