//! Port traits abstracting the host editor away from the pipelines.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;

/// The host text buffer.
///
/// The editor is responsible for exclusive write access for the duration of
/// a transaction; both in-repo implementations guarantee that the document
/// keeps its previous contents whenever the transaction returns an error,
/// on every exit path.
pub trait TextBuffer {
    /// Snapshot of the current document text.
    fn snapshot(&self) -> anyhow::Result<String>;

    /// Run `txn` with exclusive mutable access to the document text.
    /// The mutation commits only if `txn` returns `Ok`.
    fn with_write_txn(
        &mut self,
        txn: &mut dyn FnMut(&mut String) -> anyhow::Result<()>,
    ) -> anyhow::Result<()>;
}

/// The host file-type predicate: the inspection and fix apply only to
/// recognized project manifests.
pub fn is_project_manifest(path: &Utf8Path) -> bool {
    path.file_name() == Some("pom.xml")
}

/// In-memory buffer, used by tests and embedders.
#[derive(Debug, Clone)]
pub struct InMemoryBuffer {
    text: String,
}

impl InMemoryBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextBuffer for InMemoryBuffer {
    fn snapshot(&self) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }

    fn with_write_txn(
        &mut self,
        txn: &mut dyn FnMut(&mut String) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let mut staged = self.text.clone();
        txn(&mut staged)?;
        self.text = staged;
        Ok(())
    }
}

/// File-backed buffer used by the CLI. The write transaction stages the
/// mutation in memory and writes the file only on success.
#[derive(Debug, Clone)]
pub struct FileBuffer {
    path: Utf8PathBuf,
}

impl FileBuffer {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl TextBuffer for FileBuffer {
    fn snapshot(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("read {}", self.path))
    }

    fn with_write_txn(
        &mut self,
        txn: &mut dyn FnMut(&mut String) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let mut staged = self.snapshot()?;
        txn(&mut staged)?;
        fs::write(&self.path, staged.as_bytes()).with_context(|| format!("write {}", self.path))
    }
}
