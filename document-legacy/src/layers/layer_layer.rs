use graph_craft::document::NodeNetwork;

use serde::{Deserialize, Serialize};

/// A layer whose content is produced by its own node network.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LayerLegacyLayer {
	/// The document node network that this layer contains
	pub network: NodeNetwork,
}
