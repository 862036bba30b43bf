use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::path::Path;

/// A `name=version` pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
	pub name: String,
	pub version: String,
}

impl std::str::FromStr for Dependency {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let (name, version) = s.split_once('=').ok_or_else(|| anyhow!("Expected NAME=VERSION, got '{s}'"))?;
		let (name, version) = (name.trim(), version.trim());
		if name.is_empty() || version.is_empty() {
			return Err(anyhow!("Expected NAME=VERSION, got '{s}'"));
		}

		Ok(Self {
			name: name.to_string(),
			version: version.to_string(),
		})
	}
}

/// Adds a `dependencies` field to the manifest object unless it already has one. Returns whether anything changed.
pub fn add_dependencies(manifest: &mut Value, dependencies: &[Dependency]) -> Result<bool> {
	let manifest = manifest.as_object_mut().ok_or_else(|| anyhow!("The manifest is not a JSON object"))?;
	if manifest.contains_key("dependencies") {
		return Ok(false);
	}

	let entries = dependencies.iter().map(|dependency| (dependency.name.clone(), Value::String(dependency.version.clone()))).collect::<Map<_, _>>();
	manifest.insert("dependencies".to_string(), Value::Object(entries));
	Ok(true)
}

/// Patches the manifest file at `path` in place, leaving the file untouched when it already lists dependencies.
pub fn patch_manifest(path: &Path, dependencies: &[Dependency]) -> Result<bool> {
	let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
	let mut manifest: Value = serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;

	if !add_dependencies(&mut manifest, dependencies)? {
		info!("{:?} already has dependencies, leaving it as is", path);
		return Ok(false);
	}

	let mut patched = serde_json::to_string_pretty(&manifest).context("Failed to serialize the patched manifest")?;
	patched.push('\n');
	std::fs::write(path, patched).with_context(|| format!("Failed to write {:?}", path))?;
	info!("Added {} dependencies to {:?}", dependencies.len(), path);
	Ok(true)
}
