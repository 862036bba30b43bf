//! Fixed nodes that the node graph document format expects but the legacy format has no counterpart for.

use graph_craft::blend_mode::BlendMode;
use graph_craft::document::value::{GraphicGroup, TaggedValue};
use graph_craft::document::{DocumentNode, DocumentNodeImplementation, DocumentNodeMetadata, NodeId, NodeInput, NodeNetwork, NodeOutput};
use graph_craft::{Type, TypeDescriptor, concrete, fn_type};

use glam::IVec2;

pub const FOOTPRINT: TypeDescriptor = TypeDescriptor::new("graphene_core::transform::Footprint", 72, 8);
pub const EDITOR_API: TypeDescriptor = TypeDescriptor::new("graphene_core::application_io::EditorApi<graphene_std::wasm_application_io::WasmApplicationIo>", 176, 8);

pub const TRANSFORM_NODE: &str = "graphene_core::transform::TransformNode<_, _, _, _, _, _>";
pub const CULL_NODE: &str = "graphene_core::transform::CullNode<_>";

/// Position of the root output node in the document graph.
pub const OUTPUT_NODE_POSITION: IVec2 = IVec2::new(8, 4);

pub fn footprint() -> Type {
	Type::Concrete(FOOTPRINT)
}

/// Connects to the first output of `node_id`, or feeds an empty group when there is nothing to connect.
fn layer_input(node_id: Option<NodeId>) -> NodeInput {
	match node_id {
		Some(node_id) => NodeInput::node(node_id, 0),
		None => NodeInput::value(TaggedValue::GraphicGroup(GraphicGroup::EMPTY), true),
	}
}

fn nested_node(name: &str, inputs: Vec<NodeInput>, manual_composition: Option<Type>, implementation: &'static str) -> DocumentNode {
	DocumentNode {
		name: name.to_string(),
		inputs,
		manual_composition,
		implementation: DocumentNodeImplementation::proto(implementation),
		..Default::default()
	}
}

/// The "Layer" node that stacks the graphic produced by `output` on top of the layer below it (`next`).
pub fn layer_node(output: Option<NodeId>, next: Option<NodeId>, position: IVec2) -> DocumentNode {
	let construct_layer = nested_node(
		"ConstructLayer",
		vec![
			NodeInput::node(NodeId(1), 0),
			NodeInput::Network(concrete!("alloc::string::String", 12, 4)),
			NodeInput::Network(concrete!("graphene_core::raster::adjustments::BlendMode", 4, 4)),
			NodeInput::Network(concrete!("f32", 4, 4)),
			NodeInput::Network(concrete!("bool", 1, 1)),
			NodeInput::Network(concrete!("bool", 1, 1)),
			NodeInput::Network(concrete!("bool", 1, 1)),
			NodeInput::Network(fn_type!(footprint(), concrete!("graphene_core::graphic_element::GraphicGroup", 12, 4))),
		],
		Some(footprint()),
		"graphene_core::ConstructLayerNode<_, _, _, _, _, _, _, _>",
	);
	let monitor = DocumentNode {
		skip_deduplication: true,
		..nested_node("Monitor", vec![NodeInput::node(NodeId(0), 0)], Some(footprint()), "graphene_core::memo::MonitorNode<_, _, _>")
	};
	let to_graphic_element = nested_node("To Graphic Element", vec![NodeInput::Network(Type::generic("T"))], None, "graphene_core::ToGraphicElementData");

	DocumentNode {
		name: "Layer".into(),
		inputs: vec![
			layer_input(output),
			NodeInput::value(TaggedValue::String(String::new()), false),
			NodeInput::value(TaggedValue::BlendMode(BlendMode::Normal), false),
			NodeInput::value(TaggedValue::F32(100.), false),
			NodeInput::value(TaggedValue::Bool(true), false),
			NodeInput::value(TaggedValue::Bool(false), false),
			NodeInput::value(TaggedValue::Bool(false), false),
			layer_input(next),
		],
		implementation: DocumentNodeImplementation::Network(NodeNetwork {
			inputs: [0, 2, 2, 2, 2, 2, 2, 2].into_iter().map(NodeId).collect(),
			outputs: vec![NodeOutput::new(NodeId(2), 0)],
			nodes: [to_graphic_element, monitor, construct_layer].into_iter().enumerate().map(|(id, node)| (NodeId(id as u64), node)).collect(),
			..Default::default()
		}),
		metadata: DocumentNodeMetadata::position(position),
		..Default::default()
	}
}

/// The root "Output" node: renders the graphic of `root_layer` onto a cached canvas provided by the editor.
pub fn render_output_node(root_layer: NodeId) -> DocumentNode {
	let editor_api = nested_node("EditorApi", vec![NodeInput::Network(Type::Concrete(EDITOR_API))], None, "graphene_core::ops::IdNode");
	let create_canvas = DocumentNode {
		skip_deduplication: true,
		..nested_node("Create Canvas", vec![NodeInput::node(NodeId(0), 0)], None, "graphene_std::wasm_application_io::CreateSurfaceNode")
	};
	let cache = nested_node("Cache", vec![NodeInput::node(NodeId(1), 0)], Some(concrete!("()", 0, 1)), "graphene_core::memo::MemoNode<_, _>");
	let render = nested_node(
		"RenderNode",
		vec![
			NodeInput::node(NodeId(0), 0),
			NodeInput::Network(fn_type!(footprint(), Type::generic("T"))),
			NodeInput::node(NodeId(2), 0),
		],
		None,
		"graphene_std::wasm_application_io::RenderNode<_, _, _>",
	);

	DocumentNode {
		name: "Output".into(),
		inputs: vec![NodeInput::node(root_layer, 0), NodeInput::Network(Type::Concrete(EDITOR_API))],
		implementation: DocumentNodeImplementation::Network(NodeNetwork {
			inputs: vec![NodeId(3), NodeId(0)],
			outputs: vec![NodeOutput::new(NodeId(3), 0)],
			nodes: [editor_api, create_canvas, cache, render].into_iter().enumerate().map(|(id, node)| (NodeId(id as u64), node)).collect(),
			..Default::default()
		}),
		metadata: DocumentNodeMetadata::position(OUTPUT_NODE_POSITION),
		..Default::default()
	}
}
