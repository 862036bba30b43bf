use crate::blend_mode::BlendMode;

use glam::{DVec2, IVec2};
use serde::{Deserialize, Deserializer, Serialize};

/// A stack of graphic elements composited in order.
///
/// The elements are kept as raw JSON because nothing in a document upgrade needs to look inside them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicGroup(pub Vec<serde_json::Value>);

impl GraphicGroup {
	pub const EMPTY: Self = Self(Vec::new());
}

/// A type that is known, allowing serialization (serde::Deserialize is not object safe)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TaggedValue {
	None,
	String(String),
	U32(u32),
	/// Numbers that would change when narrowed to `f32` are left to [`TaggedValue::Opaque`] instead.
	#[serde(deserialize_with = "deserialize_exact_f32")]
	F32(f32),
	F64(f64),
	Bool(bool),
	DVec2(DVec2),
	IVec2(IVec2),
	BlendMode(BlendMode),
	GraphicGroup(GraphicGroup),
	/// Any other tagged value, carried through byte-for-byte as `{"Tag": ...}`.
	#[serde(untagged)]
	Opaque(serde_json::Value),
}

/// Accepts a number only if writing it back as an `f32` reads as the same number.
fn deserialize_exact_f32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
	let value = f64::deserialize(deserializer)?;
	let narrowed = value as f32;
	if narrowed.is_finite() && narrowed.to_string().parse::<f64>().ok() == Some(value) {
		Ok(narrowed)
	} else {
		Err(serde::de::Error::custom(format!("{value} is not representable as f32")))
	}
}
