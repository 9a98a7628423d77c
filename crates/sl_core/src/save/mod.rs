// Export/import of the whole group state as one JSON document.

pub mod format;

pub use format::{parse_document, write_document, ExportDocument};
