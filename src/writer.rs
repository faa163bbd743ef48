//! Streaming XML writer with structural well-formedness checks
//!
//! The writer owns the nesting state (open-element stack, attribute window)
//! and serializes every call straight into the sink. Call sequences that
//! would produce malformed nesting are rejected with an [`XmlError`] before
//! any bytes for that call are emitted.

use std::io::Write;

use crate::error::{Result, XmlError};
use crate::types::XmlValue;

/// Whitespace mode for element markup
///
/// `Normal` appends a newline after an open tag and indents the matching
/// close tag; `Terse` keeps the whole element on one line. The mode only
/// affects whitespace, never structural validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Newline after the open tag, indentation before the close tag
    #[default]
    Normal,
    /// Single-line element markup
    Terse,
}

/// Streaming XML writer over any [`std::io::Write`] sink
///
/// Tracks the stack of open elements and the attribute window so the emitted
/// markup is well-formed by construction. Content is written verbatim: the
/// writer performs no entity escaping, so callers must pre-escape `<`, `>`,
/// `&` and `"` where needed.
///
/// # Examples
///
/// ```
/// use xmlstream::{Mode, XmlWriter};
///
/// # fn main() -> xmlstream::Result<()> {
/// let mut out = Vec::new();
/// let mut writer = XmlWriter::new(&mut out);
/// writer.start_element("root", Mode::Normal)?;
/// writer.write_element("child", 5)?;
/// writer.end_element(Mode::Normal)?;
/// writer.end_document()?;
///
/// assert_eq!(out, b"<root>\n\t<child>5</child>\n</root>\n");
/// # Ok(())
/// # }
/// ```
pub struct XmlWriter<W: Write> {
    sink: W,
    /// Stack of open element names; its length is the current nesting depth
    open_elements: Vec<String>,
    /// True exactly between `start_element_attrs` and the matching `end_attrs`
    in_attributes: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer bound to a sink, at depth 0 with no open elements
    ///
    /// The writer is generic over the sink; pass `&mut sink` to keep
    /// ownership on the caller's side.
    pub fn new(sink: W) -> Self {
        XmlWriter {
            sink,
            open_elements: Vec::new(),
            in_attributes: false,
        }
    }

    /// Consume the writer and return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Current nesting depth (number of open, unclosed elements)
    pub fn depth(&self) -> usize {
        self.open_elements.len()
    }

    #[inline]
    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.sink.write_all(data)?;
        Ok(())
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_raw(s.as_bytes())
    }

    /// Write one tab per unit of current depth
    fn indent(&mut self) -> Result<()> {
        for _ in 0..self.open_elements.len() {
            self.write_raw(b"\t")?;
        }
        Ok(())
    }

    fn newline_unless_terse(&mut self, mode: Mode) -> Result<()> {
        if mode != Mode::Terse {
            self.write_raw(b"\n")?;
        }
        Ok(())
    }

    /// Write the XML prologue
    ///
    /// Emits `<?xml version=".." encoding=".." standalone="yes|no"?>` and a
    /// newline. `version` and `encoding` must be non-empty and are inserted
    /// verbatim.
    pub fn start_document(&mut self, version: &str, encoding: &str, standalone: bool) -> Result<()> {
        if version.is_empty() {
            return Err(XmlError::Empty("version"));
        }
        if encoding.is_empty() {
            return Err(XmlError::Empty("encoding"));
        }

        self.write_str("<?xml version=\"")?;
        self.write_str(version)?;
        self.write_str("\" encoding=\"")?;
        self.write_str(encoding)?;
        self.write_str("\" standalone=\"")?;
        self.write_str(if standalone { "yes" } else { "no" })?;
        self.write_str("\"?>\n")
    }

    /// Assert that the document is complete
    ///
    /// Emits nothing. Errors if any element is still open or an attribute
    /// list was never closed.
    pub fn end_document(&mut self) -> Result<()> {
        if self.in_attributes {
            return Err(XmlError::AttributeListOpen("end_document"));
        }
        if !self.open_elements.is_empty() {
            return Err(XmlError::UnclosedElements(self.open_elements.len()));
        }
        Ok(())
    }

    /// Open an element: indentation, `<name>`, newline unless terse
    ///
    /// Indentation is emitted before the tag regardless of mode; terse only
    /// suppresses the trailing newline.
    pub fn start_element(&mut self, name: &str, mode: Mode) -> Result<()> {
        if self.in_attributes {
            return Err(XmlError::AttributeListOpen("start_element"));
        }
        if name.is_empty() {
            return Err(XmlError::Empty("element name"));
        }

        self.indent()?;
        self.write_raw(b"<")?;
        self.write_str(name)?;
        self.write_raw(b">")?;
        self.newline_unless_terse(mode)?;

        self.open_elements.push(name.to_string());
        Ok(())
    }

    /// Open an element and its attribute list: indentation, `<name`
    ///
    /// The start tag is left unterminated; only [`XmlWriter::write_attribute`]
    /// calls are valid until [`XmlWriter::end_attrs`] closes the list.
    pub fn start_element_attrs(&mut self, name: &str) -> Result<()> {
        if self.in_attributes {
            return Err(XmlError::AttributeListOpen("start_element_attrs"));
        }
        if name.is_empty() {
            return Err(XmlError::Empty("element name"));
        }

        self.indent()?;
        self.write_raw(b"<")?;
        self.write_str(name)?;

        self.in_attributes = true;
        self.open_elements.push(name.to_string());
        Ok(())
    }

    /// Close the open attribute list: `>`, newline unless terse
    pub fn end_attrs(&mut self, mode: Mode) -> Result<()> {
        if !self.in_attributes {
            return Err(XmlError::AttributeListClosed("end_attrs"));
        }

        self.in_attributes = false;
        self.write_raw(b">")?;
        self.newline_unless_terse(mode)
    }

    /// Close the most recently opened element
    ///
    /// The popped stack entry is authoritative for the closing tag name.
    /// Unless terse, indentation for the decremented depth precedes the tag;
    /// the closing tag is always newline-terminated.
    pub fn end_element(&mut self, mode: Mode) -> Result<()> {
        if self.in_attributes {
            return Err(XmlError::AttributeListOpen("end_element"));
        }
        let name = self.open_elements.pop().ok_or(XmlError::NoOpenElement)?;

        if mode != Mode::Terse {
            self.indent()?;
        }
        self.write_raw(b"</")?;
        self.write_str(&name)?;
        self.write_raw(b">\n")
    }

    /// Write a single-line text element: `<name>value</name>`
    ///
    /// Equivalent to a terse open, the formatted value, and a terse close.
    /// Accepts strings, signed and unsigned integers, floats and booleans.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlstream::XmlWriter;
    ///
    /// # fn main() -> xmlstream::Result<()> {
    /// let mut out = Vec::new();
    /// let mut writer = XmlWriter::new(&mut out);
    /// writer.write_element("enabled", true)?;
    ///
    /// assert_eq!(out, b"<enabled>True</enabled>\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_element<'v, V>(&mut self, name: &str, value: V) -> Result<()>
    where
        V: Into<XmlValue<'v>>,
    {
        self.start_element(name, Mode::Terse)?;
        value.into().render_to(&mut self.sink)?;
        self.end_element(Mode::Terse)
    }

    /// Write ` name="value"` into the open attribute list
    ///
    /// Valid only between [`XmlWriter::start_element_attrs`] and
    /// [`XmlWriter::end_attrs`]. The value is formatted per its kind and
    /// inserted verbatim, quotes included but not escaped.
    pub fn write_attribute<'v, V>(&mut self, name: &str, value: V) -> Result<()>
    where
        V: Into<XmlValue<'v>>,
    {
        if !self.in_attributes {
            return Err(XmlError::AttributeListClosed("write_attribute"));
        }
        if name.is_empty() {
            return Err(XmlError::Empty("attribute name"));
        }

        self.write_raw(b" ")?;
        self.write_str(name)?;
        self.write_raw(b"=\"")?;
        value.into().render_to(&mut self.sink)?;
        self.write_raw(b"\"")
    }
}
