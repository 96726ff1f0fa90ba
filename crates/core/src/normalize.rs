//! Text cleanup for raw PDF text.
//!
//! Applies Unicode compatibility normalization (ligatures, full-width forms),
//! removes stray control characters, rejoins words hyphenated across line
//! breaks, and collapses whitespace. Page breaks (form feeds) and line breaks
//! are preserved so the partitioner can still segment the text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse multiple whitespace characters into one.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").unwrap());

/// A word broken with a hyphen at the end of a line, continued on the next.
static HYPHENATED_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})[-\u{00AD}\u{2010}][ \t]*\n[ \t]*(\p{Ll})").unwrap());

/// Form feed, used by PDF text extractors as a page separator.
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Text cleaner applied to raw extracted text.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    /// Whether to rejoin words split by a hyphen at a line break.
    dehyphenate: bool,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self { dehyphenate: true }
    }
}

impl TextCleaner {
    /// Create a cleaner with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to rejoin hyphenated line breaks.
    pub fn with_dehyphenate(mut self, dehyphenate: bool) -> Self {
        self.dehyphenate = dehyphenate;
        self
    }

    /// Clean a block of text.
    ///
    /// - NFKC normalization (`ﬁ` becomes `fi`)
    /// - `\r\n` and `\r` become `\n`
    /// - Control characters other than `\n`, `\t` and form feed are dropped
    /// - Hyphenated line breaks are rejoined, if enabled
    /// - Each line has whitespace runs collapsed and is trimmed
    pub fn clean(&self, text: &str) -> String {
        let normalized: String = text.nfkc().collect();
        let normalized = normalized.replace("\r\n", "\n").replace('\r', "\n");

        let mut result: String = normalized
            .chars()
            .filter(|&c| !c.is_control() || c == '\n' || c == '\t' || c == PAGE_SEPARATOR)
            .filter(|&c| c != '\u{FEFF}')
            .collect();

        if self.dehyphenate {
            result = HYPHENATED_BREAK_REGEX
                .replace_all(&result, "$1$2")
                .into_owned();
        }

        result
            .split('\n')
            .map(|line| self.clean_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Collapse whitespace runs in one line and trim it.
    ///
    /// A form feed is kept so page boundaries survive cleaning.
    pub fn clean_line(&self, line: &str) -> String {
        line.split(PAGE_SEPARATOR)
            .map(|part| WHITESPACE_COLLAPSE_REGEX.replace_all(part, " ").trim().to_string())
            .collect::<Vec<_>>()
            .join(&PAGE_SEPARATOR.to_string())
    }

    /// Join the lines of a paragraph into a single line of text.
    pub fn join_lines<'a, I>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = lines
            .into_iter()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        WHITESPACE_COLLAPSE_REGEX.replace_all(&joined, " ").into_owned()
    }

    /// Split cleaned text into pages on form feeds.
    pub fn split_pages<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(PAGE_SEPARATOR).collect()
    }
}
