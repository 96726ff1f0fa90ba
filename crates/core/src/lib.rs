//! Core document element types, report formatting, and output writers
//! for PDF text extraction.

pub mod element;
pub mod error;
pub mod format;
pub mod json;
pub mod normalize;
pub mod sink;
pub mod types;

pub use element::{Element, RawElement};
pub use error::{Error, Result};
pub use format::format_elements;
pub use normalize::TextCleaner;
pub use sink::{ConsoleWriter, FileWriter, ReportSink, Tee};
pub use types::{DocumentElement, ElementKind, ElementMetadata, InputFormat};
