use serde::{Deserialize, Serialize};

/// Describes how overlapping layers should be blended together.
/// See the [MDN Docs](https://developer.mozilla.org/en-US/docs/Web/CSS/blend-mode#examples) for examples.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash, Serialize, Deserialize)]
pub enum BlendMode {
	// Basic group
	#[default]
	Normal,

	// Darken group
	Multiply,
	Darken,
	ColorBurn,

	// Lighten group
	Screen,
	Lighten,
	ColorDodge,

	// Contrast group
	Overlay,
	SoftLight,
	HardLight,

	// Inversion group
	Difference,
	Exclusion,

	// Component group
	Hue,
	Saturation,
	Color,
	Luminosity,
}
