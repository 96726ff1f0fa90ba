//! Report output: one `"<type> | <text>"` line per element.
//!
//! Both fields are written verbatim, with no escaping, truncation, or
//! trimming, and in input order.
//!
//! # Example output
//! ```text
//! Title | Report
//! NarrativeText | Hello world
//! ```

use crate::element::Element;
use crate::{Error, Result};

/// Separator between the type label and the text on a report line.
pub const FIELD_SEPARATOR: &str = " | ";

/// Format a single element as a report line.
pub fn format_line<E: Element>(index: usize, element: &E) -> Result<String> {
    let element_type = element
        .element_type()
        .ok_or_else(|| Error::missing_field(index, "type"))?;
    let text = element
        .text()
        .ok_or_else(|| Error::missing_field(index, "text"))?;

    Ok(format!("{}{}{}", element_type, FIELD_SEPARATOR, text))
}

/// Format each element into its own line, in order.
pub fn report_lines<I>(elements: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Element,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| format_line(index, &element))
        .collect()
}

/// Format elements into newline-joined report lines.
///
/// An empty input produces an empty string. Fails with
/// [`Error::MissingField`] on the first element lacking a `type` or `text`;
/// nothing is returned in that case.
pub fn format_elements<I>(elements: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Element,
{
    Ok(report_lines(elements)?.join("\n"))
}
