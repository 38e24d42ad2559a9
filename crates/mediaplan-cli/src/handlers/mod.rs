//! Subcommand handlers

mod document;
mod validate;
mod versions;

pub use document::handle_document;
pub use validate::handle_validate;
pub use versions::handle_versions;
