use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Creates a [`Type::Concrete`] from a type name and its memory footprint.
#[macro_export]
macro_rules! concrete {
	($name:expr, $size:expr, $align:expr) => {
		$crate::Type::Concrete($crate::TypeDescriptor::new($name, $size, $align))
	};
}

#[macro_export]
macro_rules! fn_type {
	($input:expr, $output:expr) => {
		$crate::Type::Fn(Box::new($input), Box::new($output))
	};
}

/// The fully qualified name of the proto node a document node resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIdentifier {
	pub name: Cow<'static, str>,
}

impl NodeIdentifier {
	pub const fn new(name: &'static str) -> Self {
		Self { name: Cow::Borrowed(name) }
	}
}

/// Names a Rust type as it was laid out when the document was saved.
///
/// Documents only ever store the name, size and alignment, so descriptors compare by all three.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
	pub name: Cow<'static, str>,
	pub size: usize,
	pub align: usize,
}

impl TypeDescriptor {
	pub const fn new(name: &'static str, size: usize, align: usize) -> Self {
		Self {
			name: Cow::Borrowed(name),
			size,
			align,
		}
	}
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Generic(Cow<'static, str>),
	Concrete(TypeDescriptor),
	Fn(Box<Type>, Box<Type>),
}

impl Type {
	pub fn generic(name: &'static str) -> Self {
		Self::Generic(Cow::Borrowed(name))
	}
}

impl core::fmt::Debug for Type {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Generic(name) => write!(f, "Generic({name})"),
			Self::Concrete(ty) => write!(f, "Concrete({})", ty.name),
			Self::Fn(input, output) => write!(f, "({input:?} -> {output:?})"),
		}
	}
}
