//! Domain types for representing partitioned document content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified fragment of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentElement {
    /// Classification label, e.g. `Title` or `NarrativeText`.
    #[serde(rename = "type")]
    pub element_type: String,

    /// Extracted text content. May be empty.
    pub text: String,

    /// Where the element came from, when known.
    #[serde(default, skip_serializing_if = "ElementMetadata::is_empty")]
    pub metadata: ElementMetadata,
}

impl DocumentElement {
    /// Create an element with an arbitrary type label.
    pub fn new(element_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            text: text.into(),
            metadata: ElementMetadata::default(),
        }
    }

    /// Create an element from one of the known kinds.
    pub fn of_kind(kind: ElementKind, text: impl Into<String>) -> Self {
        Self::new(kind.as_str(), text)
    }

    /// Attach a 1-based page number.
    pub fn with_page_number(mut self, page: usize) -> Self {
        self.metadata.page_number = Some(page);
        self
    }

    /// Attach the source filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.metadata.filename = Some(filename.into());
        self
    }

    /// The known kind of this element, if its label is one of ours.
    pub fn kind(&self) -> Option<ElementKind> {
        ElementKind::from_label(&self.element_type)
    }
}

/// Provenance information for an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// 1-based page the element was found on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,

    /// Source filename (without path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ElementMetadata {
    /// True when no metadata has been recorded.
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none() && self.filename.is_none()
    }
}

/// Element labels emitted by the bundled partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Title,
    NarrativeText,
    ListItem,
    PageNumber,
    UncategorizedText,
    PageBreak,
}

impl ElementKind {
    /// The label string used in reports and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::NarrativeText => "NarrativeText",
            Self::ListItem => "ListItem",
            Self::PageNumber => "PageNumber",
            Self::UncategorizedText => "UncategorizedText",
            Self::PageBreak => "PageBreak",
        }
    }

    /// Parse a label string back into a kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Title" => Some(Self::Title),
            "NarrativeText" => Some(Self::NarrativeText),
            "ListItem" => Some(Self::ListItem),
            "PageNumber" => Some(Self::PageNumber),
            "UncategorizedText" => Some(Self::UncategorizedText),
            "PageBreak" => Some(Self::PageBreak),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A PDF document to be partitioned.
    Pdf,
    /// An already-partitioned element list serialized as JSON.
    Json,
}

impl InputFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from the first bytes of a file.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            return Some(Self::Pdf);
        }

        // A JSON element list starts with '[' after optional BOM/whitespace
        let body = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
        match body.iter().copied().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') => Some(Self::Json),
            _ => None,
        }
    }
}
