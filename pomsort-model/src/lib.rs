//! Model parser: raw manifest text to dependency records with exact spans.
//!
//! This crate owns *what* a dependency list looks like in source text. It
//! does not decide whether the list is sorted (`pomsort-domain`) or how
//! spans are spliced back (`pomsort-edit`).
//!
//! Only the project-level `<dependencies>` container is inspected, i.e. the
//! direct child of the document root. Dependency lists nested under
//! `<dependencyManagement>`, profiles, or plugin configuration are not part
//! of the project dependency list and never participate.

mod error;
mod scanner;

pub use error::ParseError;

use pomsort_types::model::{DependencyList, DependencyRecord, Span};
use scanner::{Markup, Scanner};

/// Parse the project-level dependency list out of `text`.
///
/// Pure function of the input. A document with no dependency container
/// yields an empty list, which callers must treat the same as "already
/// sorted". Errors are reserved for structurally broken markup; an entry
/// missing `<groupId>` or `<artifactId>` is fine and defaults to `""`.
pub fn parse(text: &str) -> Result<DependencyList, ParseError> {
    let mut scanner = Scanner::new(text);
    let mut depth = 0usize;

    // Locate the container: an open <dependencies> whose parent is the
    // document root (depth 1 at the moment the tag is seen).
    let container_start = loop {
        match scanner.next_tag()? {
            None => return Ok(Vec::new()),
            Some(Markup::Open { name, span }) => {
                if depth == 1 && name == "dependencies" {
                    break span.start;
                }
                depth += 1;
            }
            Some(Markup::Close { .. }) => depth = depth.saturating_sub(1),
            Some(Markup::SelfClose { name, .. }) => {
                if depth == 1 && name == "dependencies" {
                    // <dependencies/> declares an empty list.
                    return Ok(Vec::new());
                }
            }
        }
    };

    let mut records = Vec::new();
    loop {
        match scanner.next_tag()? {
            None => return Err(ParseError::UnclosedContainer { offset: container_start }),
            Some(Markup::Open { name, span }) if name == "dependency" => {
                records.push(parse_entry(text, &mut scanner, span)?);
            }
            Some(Markup::Open { span, .. }) => skip_element(&mut scanner, span.start)?,
            Some(Markup::SelfClose { name, span }) if name == "dependency" => {
                records.push(record_for(text, Span::new(span.start, span.end), None, None));
            }
            Some(Markup::SelfClose { .. }) => {}
            Some(Markup::Close { name, .. }) if name == "dependencies" => break,
            Some(Markup::Close { .. }) => {}
        }
    }

    Ok(records)
}

/// Consume one `<dependency>` element, capturing its direct-child
/// `<groupId>`/`<artifactId>` text. Coordinates of excluded artifacts under
/// `<exclusions>` sit at a deeper level and are ignored.
fn parse_entry(
    text: &str,
    scanner: &mut Scanner<'_>,
    open: Span,
) -> Result<DependencyRecord, ParseError> {
    let mut depth = 0usize;
    let mut group_id: Option<String> = None;
    let mut artifact_id: Option<String> = None;
    // Field name and content start of a direct child currently being read.
    let mut pending: Option<(&str, usize)> = None;

    loop {
        match scanner.next_tag()? {
            None => return Err(ParseError::UnclosedEntry { offset: open.start }),
            Some(Markup::Open { name, span }) => {
                if depth == 0 {
                    pending = match name {
                        "groupId" | "artifactId" => Some((name, span.end)),
                        _ => None,
                    };
                }
                depth += 1;
            }
            Some(Markup::SelfClose { .. }) => {}
            Some(Markup::Close { name, span }) => {
                if depth == 0 {
                    if name == "dependency" {
                        let full = Span::new(open.start, span.end);
                        return Ok(record_for(text, full, group_id, artifact_id));
                    }
                    // Stray close tag; tolerate and keep scanning.
                    continue;
                }
                depth -= 1;
                if depth == 0
                    && let Some((field, content_start)) = pending.take()
                    && name == field
                {
                    // DOM string values are whitespace-trimmed.
                    let value = text[content_start..span.start].trim().to_string();
                    match field {
                        "groupId" => group_id.get_or_insert(value),
                        _ => artifact_id.get_or_insert(value),
                    };
                }
            }
        }
    }
}

/// Skip a non-dependency child element of the container, nested content
/// included.
fn skip_element(scanner: &mut Scanner<'_>, open_offset: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    loop {
        match scanner.next_tag()? {
            None => return Err(ParseError::UnclosedElement { offset: open_offset }),
            Some(Markup::Open { .. }) => depth += 1,
            Some(Markup::SelfClose { .. }) => {}
            Some(Markup::Close { .. }) => {
                if depth == 0 {
                    return Ok(());
                }
                depth -= 1;
            }
        }
    }
}

fn record_for(
    text: &str,
    span: Span,
    group_id: Option<String>,
    artifact_id: Option<String>,
) -> DependencyRecord {
    DependencyRecord {
        group_id: group_id.unwrap_or_default(),
        artifact_id: artifact_id.unwrap_or_default(),
        text: text[span.start..span.end].to_string(),
        span,
    }
}
