#[macro_use]
extern crate log;

pub mod context;
pub mod document_save;
pub mod error;
pub mod flatten;
pub mod migrate;
pub mod templates;

pub use error::UpgradeError;
pub use migrate::{migrate_file, upgrade_document};
