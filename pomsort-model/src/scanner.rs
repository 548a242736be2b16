//! Low-level markup scanner.
//!
//! Yields element tags with their exact byte spans, skipping character
//! data, comments, CDATA sections, processing instructions, and doctype
//! declarations. This is not a general XML parser: it only has to be
//! precise about tag boundaries, because dependency spans are spliced
//! back into the document verbatim.

use crate::error::ParseError;
use pomsort_types::model::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Markup<'a> {
    Open { name: &'a str, span: Span },
    Close { name: &'a str, span: Span },
    SelfClose { name: &'a str, span: Span },
}

pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Advance to the next element tag, or `None` at end of input.
    pub(crate) fn next_tag(&mut self) -> Result<Option<Markup<'a>>, ParseError> {
        loop {
            let Some(rel) = self.text[self.pos..].find('<') else {
                self.pos = self.text.len();
                return Ok(None);
            };
            let start = self.pos + rel;
            let rest = &self.text[start..];

            if let Some(r) = rest.strip_prefix("<!--") {
                let Some(i) = r.find("-->") else {
                    return Err(ParseError::UnclosedMarkup { offset: start });
                };
                self.pos = start + 4 + i + 3;
                continue;
            }
            if let Some(r) = rest.strip_prefix("<![CDATA[") {
                let Some(i) = r.find("]]>") else {
                    return Err(ParseError::UnclosedMarkup { offset: start });
                };
                self.pos = start + 9 + i + 3;
                continue;
            }
            if rest.starts_with("<?") || rest.starts_with("<!") {
                let Some(i) = rest.find('>') else {
                    return Err(ParseError::UnclosedMarkup { offset: start });
                };
                self.pos = start + i + 1;
                continue;
            }

            return self.lex_tag(start).map(Some);
        }
    }

    fn lex_tag(&mut self, start: usize) -> Result<Markup<'a>, ParseError> {
        let bytes = self.text.as_bytes();
        let closing = bytes.get(start + 1) == Some(&b'/');
        let name_start = if closing { start + 2 } else { start + 1 };

        let mut i = name_start;
        while i < bytes.len() && !matches!(bytes[i], b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n') {
            i += 1;
        }
        let name = &self.text[name_start..i];

        // Find the terminating '>', honoring quoted attribute values.
        let mut quote: Option<u8> = None;
        let end = loop {
            if i >= bytes.len() {
                return Err(ParseError::UnclosedMarkup { offset: start });
            }
            match (quote, bytes[i]) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, b'"') => quote = Some(b'"'),
                (None, b'\'') => quote = Some(b'\''),
                (None, b'>') => break i + 1,
                (None, _) => {}
            }
            i += 1;
        };

        self.pos = end;
        let span = Span::new(start, end);
        if closing {
            Ok(Markup::Close { name, span })
        } else if end >= 2 && bytes[end - 2] == b'/' {
            Ok(Markup::SelfClose { name, span })
        } else {
            Ok(Markup::Open { name, span })
        }
    }
}
