//! Error type for the model parser.
//!
//! Parse errors mean the dependency container could not be located
//! structurally. Missing fields inside a well-formed entry are never an
//! error; they default to empty strings so the entry still sorts
//! deterministically.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A comment, CDATA section, declaration, or tag is never terminated.
    #[error("markup starting at byte {offset} is never terminated")]
    UnclosedMarkup { offset: usize },

    /// The `<dependencies>` container has no matching close tag.
    #[error("the <dependencies> container at byte {offset} is never closed")]
    UnclosedContainer { offset: usize },

    /// A `<dependency>` entry has no matching close tag.
    #[error("the <dependency> entry at byte {offset} is never closed")]
    UnclosedEntry { offset: usize },

    /// Some other element inside the container has no matching close tag.
    #[error("the element at byte {offset} is never closed")]
    UnclosedElement { offset: usize },
}
