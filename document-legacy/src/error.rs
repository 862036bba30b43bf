use crate::document::LayerId;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	#[error("The layer at {0:?} is not a folder")]
	NotFolder(Vec<LayerId>),
}
