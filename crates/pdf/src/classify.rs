//! Heuristic classification of text fragments into element kinds.

use elements_core::ElementKind;
use regex::Regex;
use std::sync::LazyLock;

/// A bullet or enumeration marker at the start of a line, followed by the item text.
static LIST_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:[•●○◦▪▫■□‣⁃∙·*\-–]|\(?\d{1,3}[.)]|\(?[a-z][.)]|\((?:[ivx]{1,5})\))\s+(\S.*)$",
    )
    .unwrap()
});

/// Page number footers: `12`, `Page 3`, `Page 3 of 10`, `- 4 -`.
static PAGE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:page\s+)?\d{1,4}(?:\s*(?:of|/)\s*\d{1,4})?|[-–]\s*\d{1,4}\s*[-–])$")
        .unwrap()
});

/// Roman numeral page numbers up to 39 (front matter).
static ROMAN_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:x{0,3})(?:ix|iv|v?i{0,3})$").unwrap());

/// Single letters like `I` or `X` are words and axis labels more often than pages.
const MIN_ROMAN_PAGE_LEN: usize = 2;

/// Punctuation that ends a sentence (optionally followed by a closing quote or bracket).
static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?;,]["'”’)\]]*$"#).unwrap());

/// Default maximum number of words for a fragment to count as a title.
pub const DEFAULT_MAX_TITLE_WORDS: usize = 12;

/// Minimum share of alphabetic characters (among non-whitespace) for prose and titles.
const MIN_ALPHA_RATIO: f64 = 0.5;

/// Split a list item line into its text, if it starts with a list marker.
pub fn strip_list_marker(line: &str) -> Option<&str> {
    LIST_MARKER_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}

/// Check if a line starts with a list marker.
pub fn is_list_item(line: &str) -> bool {
    strip_list_marker(line).is_some()
}

/// Check if a fragment looks like a page number footer or header.
pub fn is_page_number(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    PAGE_NUMBER_REGEX.is_match(text)
        || (text.len() >= MIN_ROMAN_PAGE_LEN && ROMAN_PAGE_REGEX.is_match(text))
}

/// Share of alphabetic characters among non-whitespace characters.
fn alpha_ratio(text: &str) -> f64 {
    let mut letters = 0usize;
    let mut total = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if c.is_alphabetic() {
            letters += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    letters as f64 / total as f64
}

/// Classifier for paragraph-level fragments.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Fragments with more words than this are never titles.
    max_title_words: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            max_title_words: DEFAULT_MAX_TITLE_WORDS,
        }
    }
}

impl Classifier {
    /// Create a classifier with the default title threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum word count for titles.
    pub fn with_max_title_words(mut self, words: usize) -> Self {
        self.max_title_words = words.max(1); // At least one word
        self
    }

    /// Check if a fragment looks like a heading.
    ///
    /// `source_lines` is how many lines of the page the fragment spanned;
    /// headings fit on one line.
    pub fn is_title(&self, text: &str, source_lines: usize) -> bool {
        let text = text.trim();
        if text.is_empty() || source_lines > 1 {
            return false;
        }

        let words = text.split_whitespace().count();
        if words > self.max_title_words {
            return false;
        }

        if SENTENCE_END_REGEX.is_match(text) {
            return false;
        }

        // Headings don't start mid-sentence
        if text
            .chars()
            .find(|c| c.is_alphabetic())
            .map_or(true, |c| c.is_lowercase())
        {
            return false;
        }

        alpha_ratio(text) >= MIN_ALPHA_RATIO
    }

    /// Check if a fragment reads like running prose.
    pub fn is_narrative(&self, text: &str, source_lines: usize) -> bool {
        let text = text.trim();
        let words = text.split_whitespace().count();
        if words < 2 || alpha_ratio(text) < MIN_ALPHA_RATIO {
            return false;
        }

        SENTENCE_END_REGEX.is_match(text) || words > self.max_title_words || source_lines > 1
    }

    /// Classify a non-list fragment.
    pub fn classify(&self, text: &str, source_lines: usize) -> ElementKind {
        if is_page_number(text) {
            ElementKind::PageNumber
        } else if self.is_title(text, source_lines) {
            ElementKind::Title
        } else if self.is_narrative(text, source_lines) {
            ElementKind::NarrativeText
        } else {
            ElementKind::UncategorizedText
        }
    }
}
