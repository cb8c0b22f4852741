//! Streaming XML output shared by every generated document.

use crate::writer::WriterResult;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Write;

/// What precedes the root element of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Prolog {
    /// `<?xml version="1.0" encoding="UTF-8"?>`
    Xml,
    /// The XML declaration followed by `<!DOCTYPE html>`
    Xhtml,
}

pub(crate) struct XmlWriter<'a, W> {
    writer: quick_xml::Writer<W>,
    /// An element whose start tag is not written yet, still accepting attributes.
    pending: Option<BytesStart<'a>>,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer: quick_xml::Writer::new_with_indent(writer, b' ', 2),
            pending: None,
        }
    }

    pub(crate) fn write_prolog(&mut self, prolog: Prolog) -> WriterResult<()> {
        const XML_VERSION: &str = "1.0";
        const XML_ENCODING: &str = "UTF-8";
        const HTML_DOCTYPE: &str = "html";

        self.writer.write_event(Event::Decl(BytesDecl::new(
            XML_VERSION,
            Some(XML_ENCODING),
            None,
        )))?;

        if prolog == Prolog::Xhtml {
            self.writer
                .write_event(Event::DocType(BytesText::from_escaped(HTML_DOCTYPE)))?;
        }
        Ok(())
    }

    /// Begins an element: `<tag`
    ///
    /// The start tag of a pending parent element is completed first
    /// (e.g., `<parent><tag`).
    pub(crate) fn start_element(&mut self, tag: &'a str) -> WriterResult<&mut Self> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(tag));
        Ok(self)
    }

    /// Appends `name="value"` to the pending element.
    /// [`None`] values are skipped.
    pub(crate) fn add_attribute<'b>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'b str>>,
    ) -> &mut Self {
        if let (Some(element), Some(value)) = (&mut self.pending, value.into()) {
            let value = match escape(value) {
                Cow::Borrowed(borrowed) => Cow::Borrowed(borrowed.as_bytes()),
                Cow::Owned(owned) => Cow::Owned(owned.into_bytes()),
            };
            element.push_attribute(Attribute {
                key: QName(name.as_bytes()),
                value,
            });
        }
        self
    }

    /// Completes the start tag of the pending element: `<tag>`
    pub(crate) fn flush_pending(&mut self) -> WriterResult<()> {
        if let Some(element) = self.pending.take() {
            self.writer.write_event(Event::Start(element))?;
        }
        Ok(())
    }

    /// Writes a closing tag: `</tag>`
    pub(crate) fn end_element(&mut self, tag: &str) -> WriterResult<()> {
        self.flush_pending()?;
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Completes the pending element with **unescaped** `text`: `<tag>text</tag>`
    pub(crate) fn text_element(&mut self, text: &str) -> WriterResult<()> {
        if let Some(element) = self.pending.take() {
            self.writer.write_event(Event::Start(element.borrow()))?;
            self.writer
                .write_event(Event::Text(BytesText::from_escaped(escape(text))))?;
            self.writer.write_event(Event::End(element.to_end()))?;
        }
        Ok(())
    }

    /// Completes the pending element as self-closing: `<tag/>`
    pub(crate) fn empty_element(&mut self) -> WriterResult<()> {
        if let Some(element) = self.pending.take() {
            self.writer.write_event(Event::Empty(element))?;
        }
        Ok(())
    }
}

fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '&' => "&amp;",
        '\'' => "&apos;",
        // Whitespace is kept verbatim within attribute values
        '\t' => "&#9;",
        '\n' => "&#10;",
        '\r' => "&#13;",
        '\u{00A0}' => "&#160;",
        _ => return None,
    })
}

fn escape(input: &str) -> Cow<'_, str> {
    let Some(start) = input.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(input);
    };
    let mut escaped = String::with_capacity(input.len() + 16);
    escaped.push_str(&input[..start]);

    for c in input[start..].chars() {
        match entity(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Writes an element with optional attributes, in one of three shapes:
/// - Self-closing: `writer, tag, attributes`
/// - Text: `writer, tag, text, attributes`
/// - Parent: `writer, tag, attributes, inner_content`
///
/// Attribute values of [`None`] are omitted.
macro_rules! write_element {
    (writer: $w:expr, tag: $t:expr, $(attributes: { $($name:path => $val:expr,)* })?) => {
        $crate::writer::xml::write_element!(@start $w, $t, $($($name => $val,)*)?)
        .empty_element()
    };
    (writer: $w:expr, tag: $t:expr, text: $text:expr, $(attributes: { $($name:path => $val:expr,)* })?) => {
        $crate::writer::xml::write_element!(@start $w, $t, $($($name => $val,)*)?)
        .text_element($text)
    };
    (writer: $w:expr, tag: $t:expr, $(attributes: { $($name:path => $val:expr,)* })? inner_content: $inner:block) => {{
        let tag = $t;
        $crate::writer::xml::write_element!(@start $w, tag, $($($name => $val,)*)?);
        $w.flush_pending()?;
        $inner
        $w.end_element(tag)
    }};
    (@start $w:expr, $t:expr, $($name:path => $val:expr,)*) => {{
        let element = $w.start_element($t)?;
        $(element.add_attribute($name, $val);)*
        element
    }};
}

pub(crate) use write_element;
