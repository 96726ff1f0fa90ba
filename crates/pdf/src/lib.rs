//! PDF partitioning backend for document element extraction.
//!
//! Decodes PDF text with `pdf-extract` and splits it into classified
//! elements (titles, narrative text, list items, page numbers).

pub mod classify;
pub mod partition;

pub use classify::Classifier;
pub use partition::PdfPartitioner;
