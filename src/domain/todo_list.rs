//! Todo List State Container
//!
//! Append-only, in-memory list of entry texts. Created empty with the
//! panel, discarded with it; nothing is persisted.

/// Ordered collection of todo entry texts
///
/// Entries are append-only: once added they are never removed, reordered,
/// or edited. Duplicate texts are allowed.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    entries: Vec<String>,
}

impl TodoList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the list
    ///
    /// No validation is performed; the empty string is a valid entry.
    pub fn add(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// Read-only view of the entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
