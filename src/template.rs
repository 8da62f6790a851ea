//! Commit message templates
//!
//! A [`Template`] owns the verbatim bytes of a commit template. It may carry
//! a co-author trailer:
//!
//! ```text
//! Add secret message
//!
//!   Co-Authored-By: Alice <alice@example.com>
//! ```
//!
//! Only the first trailer is honored.
//!
//! # Examples
//!
//! ```
//! use cotemplate::Template;
//!
//! let mut template = Template::new();
//! let mut source = "Fix bug\n\nCo-Authored-By: Alice <alice@example.com>\n".as_bytes();
//! let read = template.read_from(&mut source).unwrap();
//! assert_eq!(read, template.len());
//! assert_eq!(template.co_author().as_deref(), Some("Alice <alice@example.com>"));
//!
//! let mut out = Vec::new();
//! template.write_to(&mut out).unwrap();
//! assert_eq!(out, template.content());
//! ```

use std::io::{Read, Write};

use crate::error::TemplateError;

/// Trailer key crediting an additional author (case-sensitive)
pub const CO_AUTHOR_TRAILER: &str = "Co-Authored-By:";

/// In-memory commit message template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    content: Vec<u8>,
}

impl Template {
    /// Create an empty template
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Read `reader` to end-of-stream, replacing the current content
    ///
    /// Returns the number of bytes consumed. After an error the content is
    /// unspecified.
    pub fn read_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<usize, TemplateError> {
        self.content.clear();
        let read = reader
            .read_to_end(&mut self.content)
            .map_err(TemplateError::Read)?;
        log::trace!("read {read} template bytes");
        Ok(read)
    }

    /// Write the content verbatim to `writer`
    ///
    /// Returns the number of bytes written, always `self.len()` on success.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, TemplateError> {
        writer
            .write_all(&self.content)
            .map_err(TemplateError::Write)?;
        log::trace!("wrote {} template bytes", self.content.len());
        Ok(self.content.len())
    }

    /// Identity credited by the first `Co-Authored-By:` trailer, if any
    ///
    /// Only CR and LF end a line. An identity holding invalid UTF-8 is
    /// decoded lossily; use [`Template::co_author_bytes`] for the exact bytes.
    #[must_use]
    pub fn co_author(&self) -> Option<String> {
        self.co_author_bytes()
            .map(|identity| String::from_utf8_lossy(identity).into_owned())
    }

    /// Verbatim bytes of the first `Co-Authored-By:` identity, if any
    ///
    /// Lines that are not valid UTF-8 are trimmed of ASCII whitespace only.
    #[must_use]
    pub fn co_author_bytes(&self) -> Option<&[u8]> {
        self.content
            .split(|&b| b == b'\n' || b == b'\r')
            .find_map(parse_co_author)
    }

    /// Raw template bytes
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Length of the content in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the template holds no bytes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<Vec<u8>> for Template {
    fn from(content: Vec<u8>) -> Self {
        Self { content }
    }
}

impl From<&str> for Template {
    fn from(content: &str) -> Self {
        Self::from(content.as_bytes().to_vec())
    }
}

/// Parse one line as a co-author trailer: `Co-Authored-By: <identity>`
///
/// The key must be followed by whitespace and a non-empty identity.
fn parse_co_author(line: &[u8]) -> Option<&[u8]> {
    let rest = trim_line(line).strip_prefix(CO_AUTHOR_TRAILER.as_bytes())?;
    if !starts_with_whitespace(rest) {
        return None;
    }
    let identity = trim_line(rest);
    (!identity.is_empty()).then_some(identity)
}

fn trim_line(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    }
}

fn starts_with_whitespace(bytes: &[u8]) -> bool {
    bytes
        .utf8_chunks()
        .next()
        .and_then(|chunk| chunk.valid().chars().next())
        .is_some_and(char::is_whitespace)
}
