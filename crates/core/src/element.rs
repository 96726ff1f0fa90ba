//! The capability every formattable element provides.

use crate::types::DocumentElement;
use std::borrow::Cow;

/// Anything exposing a type label and a text payload.
///
/// `None` means the field is absent; the formatter reports it as
/// [`Error::MissingField`](crate::Error::MissingField).
pub trait Element {
    /// The classification label.
    fn element_type(&self) -> Option<Cow<'_, str>>;

    /// The text content.
    fn text(&self) -> Option<Cow<'_, str>>;
}

impl Element for DocumentElement {
    fn element_type(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.element_type))
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.text))
    }
}

impl<E: Element + ?Sized> Element for &E {
    fn element_type(&self) -> Option<Cow<'_, str>> {
        (**self).element_type()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn element_type(&self) -> Option<Cow<'_, str>> {
        (**self).element_type()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

/// An element record loaded from an untyped source, where either field may
/// be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawElement {
    /// The `type` value, already coerced to a string.
    pub element_type: Option<String>,

    /// The `text` value, already coerced to a string.
    pub text: Option<String>,
}

impl RawElement {
    /// Create a record with both fields optional.
    pub fn new(element_type: Option<String>, text: Option<String>) -> Self {
        Self { element_type, text }
    }

    /// Convert into a typed element, failing on the first absent field.
    pub fn into_document_element(self, index: usize) -> crate::Result<DocumentElement> {
        let element_type = self
            .element_type
            .ok_or_else(|| crate::Error::missing_field(index, "type"))?;
        let text = self
            .text
            .ok_or_else(|| crate::Error::missing_field(index, "text"))?;
        Ok(DocumentElement::new(element_type, text))
    }
}

impl Element for RawElement {
    fn element_type(&self) -> Option<Cow<'_, str>> {
        self.element_type.as_deref().map(Cow::Borrowed)
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        self.text.as_deref().map(Cow::Borrowed)
    }
}
