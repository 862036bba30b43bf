pub mod document;
pub mod error;
pub mod layers;

pub use error::DocumentError;
