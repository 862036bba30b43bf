#[macro_use]
extern crate log;

pub mod blend_mode;
pub mod document;
pub mod types;

pub use types::{NodeIdentifier, Type, TypeDescriptor};
