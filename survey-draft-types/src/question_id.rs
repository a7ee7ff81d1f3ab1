use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a question within one question collection.
///
/// Ids are handed out by an [`IdSource`] when a question is created and are
/// never reassigned. Update, delete and drag-reorder all resolve questions by
/// this id, never by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

/// Source of fresh question ids.
///
/// Injected into a question collection at construction time. Implementations
/// must never return the same id twice.
pub trait IdSource {
    /// Produce the next unused id.
    fn next_id(&mut self) -> QuestionId;
}

/// Monotonically increasing counter, starting at 1.
///
/// The counter stops at `u64::MAX`: once that id has been handed out, every
/// later call returns it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a counter whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a counter whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> QuestionId {
        let id = QuestionId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl<S: IdSource + ?Sized> IdSource for &mut S {
    fn next_id(&mut self) -> QuestionId {
        (**self).next_id()
    }
}
