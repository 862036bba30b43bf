use document_upgrade::document_save::LegacyDocumentSave;
use document_upgrade::migrate::{serialize_document, upgrade_document};
use document_upgrade::{UpgradeError, migrate_file};
use graph_craft::document::value::TaggedValue;
use graph_craft::document::{DocumentNodeImplementation, NodeId, NodeInput};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::path::PathBuf;

fn proto_node(name: &str, inputs: Value, x: i32) -> Value {
	json!({
		"name": name,
		"inputs": inputs,
		"implementation": { "Unresolved": { "name": format!("graphene_core::{name}Node") } },
		"metadata": { "position": [x, 3] }
	})
}

fn node_input(node_id: u64) -> Value {
	json!({ "Node": { "node_id": node_id, "output_index": 0, "lambda": false } })
}

/// A node graph layer drawing a shape, filled and transformed.
fn shape_layer() -> Value {
	json!({
		"visible": true,
		"name": null,
		"data": {
			"Layer": {
				"network": {
					"inputs": [],
					"outputs": [{ "node_id": 0, "node_output_index": 0 }],
					"nodes": {
						"0": proto_node("Output", json!([node_input(3)]), 40),
						"1": proto_node("Shape", json!([{ "Value": { "tagged_value": "None", "exposed": false } }]), 10),
						"2": proto_node("Fill", json!([node_input(1), { "Value": { "tagged_value": { "F64": 1.0 }, "exposed": false } }]), 20),
						"3": proto_node("Transform", json!([node_input(2), { "Value": { "tagged_value": { "DVec2": [0.0, 0.0] }, "exposed": false } }]), 30)
					}
				}
			}
		},
		"transform": { "matrix2": [1.0, 0.0, 0.0, 1.0], "translation": [0.0, 0.0] },
		"preserve_aspect": true,
		"pivot": [0.5, 0.5],
		"blend_mode": "Normal",
		"opacity": 1.0
	})
}

/// A node graph layer with a single node feeding its output.
fn single_node_layer() -> Value {
	json!({
		"data": {
			"Layer": {
				"network": {
					"inputs": [],
					"outputs": [{ "node_id": 0, "node_output_index": 0 }],
					"nodes": {
						"0": proto_node("Output", json!([node_input(5)]), 100),
						"5": proto_node("Fill", json!([{ "Value": { "tagged_value": { "F32": 0.5 }, "exposed": true } }]), 100)
					}
				}
			}
		}
	})
}

fn folder(layers: Vec<Value>) -> Value {
	json!({ "data": { "Folder": { "next_assignment_id": layers.len(), "layer_ids": (0..layers.len()).collect::<Vec<_>>(), "layers": layers } } })
}

fn legacy_document(layers: Vec<Value>) -> LegacyDocumentSave {
	serde_json::from_value(json!({
		"document_legacy": {
			"root": { "data": { "Folder": { "next_assignment_id": layers.len(), "layer_ids": (0..layers.len()).collect::<Vec<_>>(), "layers": layers } } },
			"commit_hash": "0000000000000000000000000000000000000000"
		},
		"saved_document_identifier": 12,
		"name": "Legacy",
		"version": "0.0.17"
	}))
	.unwrap()
}

fn temp_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("document-upgrade-{}-{name}", std::process::id()))
}

#[test]
fn single_layer_document() {
	let document = upgrade_document(&legacy_document(vec![shape_layer()])).unwrap();
	let network = document.document_network();

	// 42 is the root folder, 43 its only child, 44..=46 the layer's nodes and 47 the shape moved behind the cull node
	let ids = network.nodes.keys().map(|id| id.0).collect::<Vec<_>>();
	assert_eq!(ids, vec![0, 42, 43, 44, 45, 46, 47]);
	assert!(network.dangling_references().is_empty());

	let names = network.nodes.values().map(|node| node.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, ["Output", "Layer", "Layer", "Cull", "Fill", "Transform", "Shape"]);

	assert_eq!(network.nodes[&NodeId(0)].inputs[0], NodeInput::node(NodeId(42), 0));
	assert_eq!(network.nodes[&NodeId(42)].inputs[0], NodeInput::node(NodeId(43), 0));
	assert_eq!(network.nodes[&NodeId(43)].inputs[0], NodeInput::node(NodeId(46), 0));
	assert_eq!(network.nodes[&NodeId(44)].inputs[0], NodeInput::node(NodeId(47), 0));
	assert_eq!(network.nodes[&NodeId(45)].inputs[0], NodeInput::node(NodeId(44), 0));
	assert_eq!(network.nodes[&NodeId(46)].inputs[0], NodeInput::node(NodeId(45), 0));
	assert_eq!(
		network.nodes[&NodeId(46)].implementation,
		DocumentNodeImplementation::proto("graphene_core::transform::TransformNode<_, _, _, _, _, _>")
	);

	// The child layer is on the second row, indented one folder level, with its nodes shifted left of the old output
	assert_eq!(network.nodes[&NodeId(42)].metadata.position.to_array(), [0, 7]);
	assert_eq!(network.nodes[&NodeId(43)].metadata.position.to_array(), [-5, 10]);
	assert_eq!(network.nodes[&NodeId(44)].metadata.position.to_array(), [10 - 45, 10]);
	assert_eq!(network.nodes[&NodeId(47)].metadata.position.to_array(), [10 - 53, 10]);
}

#[test]
fn single_node_document() {
	let document = upgrade_document(&legacy_document(vec![single_node_layer()])).unwrap();
	let network = document.document_network();

	assert_eq!(network.nodes.keys().map(|id| id.0).collect::<Vec<_>>(), vec![0, 42, 43, 44]);
	assert!(network.dangling_references().is_empty());

	assert_eq!(network.nodes[&NodeId(0)].inputs[0], NodeInput::node(NodeId(42), 0));
	assert_eq!(network.nodes[&NodeId(42)].inputs[0], NodeInput::node(NodeId(43), 0));
	assert_eq!(network.nodes[&NodeId(43)].inputs[0], NodeInput::node(NodeId(44), 0));

	let fill = &network.nodes[&NodeId(44)];
	assert_eq!(fill.name, "Fill");
	assert_eq!(fill.inputs, vec![NodeInput::value(TaggedValue::F32(0.5), true)]);
	assert_eq!(fill.metadata.position.to_array(), [100 - (100 + 5), 10]);
}

#[test]
fn nested_folders_indent_each_level() {
	let inner = folder(vec![shape_layer()]);
	let outer = folder(vec![shape_layer(), inner]);
	let document = upgrade_document(&legacy_document(vec![outer])).unwrap();
	let network = document.document_network();
	let node = |id: u64| &network.nodes[&NodeId(id)];
	let position = |id: u64| node(id).metadata.position.to_array();

	assert_eq!(network.nodes.len(), 14);
	assert!(network.dangling_references().is_empty());

	// 43 is the outer folder, which reserves 44 and 45 for its children and visits the inner folder (44) first
	assert_eq!(node(42).inputs[0], NodeInput::node(NodeId(43), 0));
	assert_eq!(node(43).inputs[0], NodeInput::node(NodeId(44), 0));
	assert_eq!(node(44).inputs[0], NodeInput::node(NodeId(46), 0));
	assert_eq!(node(44).inputs[7], NodeInput::node(NodeId(45), 0));
	assert_eq!(node(45).inputs[0], NodeInput::node(NodeId(53), 0));
	assert_eq!(node(46).inputs[0], NodeInput::node(NodeId(49), 0));
	assert_eq!([position(42), position(43), position(44), position(45), position(46)], [[0, 7], [-5, 10], [-10, 13], [-10, 19], [-15, 16]]);

	// The shape layer directly inside the outer folder sits at indent 10
	assert_eq!((node(51).name.as_str(), position(51)), ("Cull", [10 - (40 + 10), 19]));
	assert_eq!((node(54).name.as_str(), position(54)), ("Shape", [10 - (40 + 8 + 10), 19]));

	// The one inside the inner folder sits at indent 15
	assert_eq!((node(47).name.as_str(), position(47)), ("Cull", [10 - (40 + 15), 16]));
	assert_eq!((node(50).name.as_str(), position(50)), ("Shape", [10 - (40 + 8 + 15), 16]));
	assert_eq!(node(47).inputs, vec![NodeInput::node(NodeId(50), 0)]);
}

#[test]
fn editor_state_is_regenerated() {
	let document = upgrade_document(&legacy_document(vec![shape_layer()])).unwrap();
	let json = serde_json::to_value(&document).unwrap();

	assert_eq!(json["saved_document_identifier"], 0);
	assert_eq!(json["name"], "Untitled Document 10");
	assert_eq!(json["version"], "0.0.18");
	assert_eq!(json["document_legacy"]["commit_hash"], "ef46080400bc6c4e069765dd2127306abbc9a94b");
	assert_eq!(json["document_legacy"]["root"]["data"]["Folder"]["layers"], json!([]));
	assert_eq!(json["document_legacy"]["document_network"]["outputs"], json!([{ "node_id": 0, "node_output_index": 0 }]));
	assert!(json["document_legacy"]["document_network"]["nodes"]["42"].is_object());
}

#[test]
fn upgrading_twice_gives_identical_bytes() {
	let legacy = legacy_document(vec![shape_layer(), shape_layer(), shape_layer()]);
	let first = serialize_document(&upgrade_document(&legacy).unwrap()).unwrap();
	let second = serialize_document(&upgrade_document(&legacy).unwrap()).unwrap();

	assert_eq!(first, second);
}

#[test]
fn file_round_trip() {
	let input = temp_path("round-trip-input.graphite");
	let output = temp_path("round-trip-output.graphite");
	std::fs::write(&input, serde_json::to_string(&json!({ "document_legacy": { "root": { "data": { "Folder": { "layers": [shape_layer()] } } } } })).unwrap()).unwrap();

	let document = migrate_file(&input, &output).unwrap();
	let written = std::fs::read(&output).unwrap();
	assert_eq!(written, serialize_document(&document).unwrap());

	// The upgraded file is itself a readable document
	let reread: Value = serde_json::from_slice(&written).unwrap();
	assert_eq!(reread["document_legacy"]["document_network"]["nodes"].as_object().map(|nodes| nodes.len()), Some(7));

	std::fs::remove_file(input).unwrap();
	std::fs::remove_file(output).unwrap();
}

#[test]
fn failed_upgrade_writes_nothing() {
	let input = temp_path("broken-input.graphite");
	let output = temp_path("broken-output.graphite");

	let mut layer = shape_layer();
	layer["data"]["Layer"]["network"]["nodes"]["2"]["inputs"][0] = node_input(9);
	std::fs::write(&input, serde_json::to_string(&json!({ "document_legacy": { "root": { "data": { "Folder": { "layers": [layer] } } } } })).unwrap()).unwrap();

	let result = migrate_file(&input, &output);
	assert!(matches!(result, Err(UpgradeError::UnmappedReference { node: NodeId(2), reference: NodeId(9) })));
	assert!(!output.exists());

	std::fs::remove_file(input).unwrap();
}

#[test]
fn invalid_json_is_a_parse_error() {
	let input = temp_path("invalid-input.graphite");
	let output = temp_path("invalid-output.graphite");
	std::fs::write(&input, "{ \"document_legacy\": ").unwrap();

	assert!(matches!(migrate_file(&input, &output), Err(UpgradeError::Parse { .. })));
	assert!(!output.exists());

	std::fs::remove_file(input).unwrap();
}
