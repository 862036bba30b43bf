use graph_craft::document::NodeId;

/// Hands out node ids for the upgraded network, starting at 42 and counting up.
///
/// Ids below 42 are left free for the fixed nodes of the document, such as the root output at 0.
#[derive(Debug, Clone)]
pub struct NodeIdGenerator {
	next: u64,
}

impl NodeIdGenerator {
	pub const FIRST: NodeId = NodeId(42);

	pub fn next_id(&mut self) -> NodeId {
		let id = NodeId(self.next);
		self.next += 1;
		id
	}

	/// Takes `count` consecutive ids, in order.
	pub fn reserve(&mut self, count: usize) -> Vec<NodeId> {
		self.by_ref().take(count).collect()
	}
}

impl Default for NodeIdGenerator {
	fn default() -> Self {
		Self { next: Self::FIRST.0 }
	}
}

impl Iterator for NodeIdGenerator {
	type Item = NodeId;

	fn next(&mut self) -> Option<Self::Item> {
		Some(self.next_id())
	}
}

/// Gives every upgraded layer its own row in the node graph: 7, 10, 13, ...
#[derive(Debug, Clone)]
pub struct RowGenerator {
	next: i32,
}

impl RowGenerator {
	pub const FIRST: i32 = 7;
	pub const SPACING: i32 = 3;

	pub fn next_row(&mut self) -> i32 {
		let y = self.next;
		self.next += Self::SPACING;
		y
	}
}

impl Default for RowGenerator {
	fn default() -> Self {
		Self { next: Self::FIRST }
	}
}

/// State shared by one upgrade run. Create a new one per document so that runs never share ids or rows.
#[derive(Debug, Clone, Default)]
pub struct UpgradeContext {
	pub node_ids: NodeIdGenerator,
	pub rows: RowGenerator,
}
