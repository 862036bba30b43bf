use graph_craft::document::NodeId;

use std::path::PathBuf;
use thiserror::Error;

/// The error type used while upgrading a legacy document. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum UpgradeError {
	#[error("Failed to access {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse the legacy document {path:?}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to serialize the upgraded document")]
	Serialize(#[source] serde_json::Error),

	#[error("A layer network does not declare an output")]
	NoNetworkOutput,

	#[error("A layer network declares node {0} as its output, but it does not exist")]
	MissingNode(NodeId),

	#[error("Nothing is connected to the first input of the layer network output node {0}")]
	OutputNotConnected(NodeId),

	#[error("Node {node} reads from node {reference}, which is not part of its layer network")]
	UnmappedReference { node: NodeId, reference: NodeId },

	#[error("The layer output {0} does not exist among the upgraded nodes")]
	MissingOutput(NodeId),

	#[error("Node {0} cannot be moved into place without leaving the range of grid positions")]
	PositionOverflow(NodeId),

	#[error("Node id {0} was assigned twice")]
	IdCollision(NodeId),

	#[error("Node {node} of the upgraded document reads from missing node {reference}")]
	DanglingReference { node: NodeId, reference: NodeId },
}
