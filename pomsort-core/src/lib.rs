//! Check and fix pipelines, independent of any concrete host.
//!
//! All document access goes through the port traits: the host editor is a
//! [`TextBuffer`], and the file-type gate is [`is_project_manifest`]. The
//! pipelines themselves are strictly linear and synchronous:
//! parse → validate → (on fix) plan → apply, no retries, no caching — every
//! run reparses the document from scratch so it always reflects current
//! text.

mod pipeline;
mod ports;
mod settings;

pub use pipeline::{run_check, run_fix, CheckOutcome, FixOutcome, FixStatus, ToolError};
pub use ports::{is_project_manifest, FileBuffer, InMemoryBuffer, TextBuffer};
pub use settings::{CheckSettings, FixSettings};
