//! Helpers shared by the CLI commands.

mod document;

pub use self::document::read_document;
