//! PDF partitioner implementation.
//!
//! Text decoding is delegated to `pdf-extract`. The returned text is cleaned,
//! split into pages on form feeds and into paragraphs on blank lines, and
//! each paragraph is classified into a [`DocumentElement`].

use crate::classify::{self, Classifier};
use elements_core::{DocumentElement, ElementKind, Error, Result, TextCleaner};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Partitioner turning PDF documents into classified elements.
#[derive(Debug, Clone, Default)]
pub struct PdfPartitioner {
    cleaner: TextCleaner,
    classifier: Classifier,
    /// Emit a `PageBreak` element between pages.
    include_page_breaks: bool,
}

impl PdfPartitioner {
    /// Create a partitioner with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit `PageBreak` elements between pages.
    pub fn with_page_breaks(mut self, include: bool) -> Self {
        self.include_page_breaks = include;
        self
    }

    /// Set the maximum word count for a fragment to be classified as a title.
    pub fn with_max_title_words(mut self, words: usize) -> Self {
        self.classifier = self.classifier.with_max_title_words(words);
        self
    }

    /// Replace the text cleaner.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Partition a PDF file on disk.
    pub fn partition_file(&self, path: &Path) -> Result<Vec<DocumentElement>> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.partition_bytes(&bytes, filename)
    }

    /// Partition an in-memory PDF.
    pub fn partition_bytes(&self, bytes: &[u8], filename: &str) -> Result<Vec<DocumentElement>> {
        let text = extract_text(bytes)?;

        if text.trim().is_empty() {
            log::warn!(
                "{} has no extractable text; it may be scanned and need OCR",
                display_name(filename)
            );
            return Ok(Vec::new());
        }

        Ok(self.partition_text(&text, filename))
    }

    /// Partition text that has already been extracted from a document.
    ///
    /// Pages are separated by form feeds.
    pub fn partition_text(&self, text: &str, filename: &str) -> Vec<DocumentElement> {
        let cleaned = self.cleaner.clean(text);
        let pages = self.cleaner.split_pages(&cleaned);
        log::debug!("Partitioning {} page(s)", pages.len());

        let mut elements = Vec::new();

        for (idx, page) in pages.iter().enumerate() {
            let page_number = idx + 1;

            if self.include_page_breaks && idx > 0 {
                let page_break = DocumentElement::of_kind(ElementKind::PageBreak, "");
                elements.push(self.tag(page_break, page_number - 1, filename));
            }

            for paragraph in paragraphs(page) {
                for element in self.partition_paragraph(&paragraph) {
                    elements.push(self.tag(element, page_number, filename));
                }
            }
        }

        log::debug!("Found {} elements", elements.len());
        elements
    }

    /// Classify one block of consecutive non-blank lines.
    ///
    /// Lines after the first list marker become list items; continuation
    /// lines without a marker are appended to the preceding item.
    fn partition_paragraph(&self, lines: &[&str]) -> Vec<DocumentElement> {
        // "- 4 -" footers look like dash bullets
        let list_start = lines
            .iter()
            .position(|l| classify::is_list_item(l) && !classify::is_page_number(l));

        let (lead, items) = match list_start {
            Some(pos) => lines.split_at(pos),
            None => (lines, &[][..]),
        };

        let mut elements = Vec::new();

        if !lead.is_empty() {
            let text = self.cleaner.join_lines(lead.iter().copied());
            let kind = self.classifier.classify(&text, lead.len());
            elements.push(DocumentElement::of_kind(kind, text));
        }

        let mut current: Vec<&str> = Vec::new();
        for &line in items {
            if classify::is_page_number(line) {
                if !current.is_empty() {
                    elements.push(self.list_item(&current));
                    current.clear();
                }
                elements.push(DocumentElement::of_kind(ElementKind::PageNumber, line.trim()));
            } else if let Some(item_text) = classify::strip_list_marker(line) {
                if !current.is_empty() {
                    elements.push(self.list_item(&current));
                    current.clear();
                }
                current.push(item_text);
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            elements.push(self.list_item(&current));
        }

        elements
    }

    fn list_item(&self, lines: &[&str]) -> DocumentElement {
        DocumentElement::of_kind(
            ElementKind::ListItem,
            self.cleaner.join_lines(lines.iter().copied()),
        )
    }

    fn tag(&self, element: DocumentElement, page_number: usize, filename: &str) -> DocumentElement {
        let element = element.with_page_number(page_number);
        if filename.is_empty() {
            element
        } else {
            element.with_filename(filename)
        }
    }
}

/// Group a page's lines into paragraphs separated by blank lines.
fn paragraphs(page: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for line in page.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Run `pdf-extract` over the bytes, turning both errors and panics from
/// malformed documents into [`Error::Pdf`].
fn extract_text(bytes: &[u8]) -> Result<String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(Error::Pdf(e.to_string())),
        Err(_) => Err(Error::Pdf(
            "text extraction panicked on a malformed document".to_string(),
        )),
    }
}

fn display_name(filename: &str) -> &str {
    if filename.is_empty() {
        "document"
    } else {
        filename
    }
}
