//! Test collaborators for exercising an editing session without a network.
//!
//! `TestGenerator` stands in for the generation service and `MemoryStore`
//! for draft storage. Both are deterministic.
//!
//! # Example
//!
//! ```rust
//! use survey_draft::{DraftEditor, PromptDescriptor, QuestionRecord, SurveyDraft, TestGenerator};
//!
//! let generator = TestGenerator::returning(SurveyDraft::new(
//!     "Pulse",
//!     vec![QuestionRecord::new("Anything to add?", "open_ended")],
//! ));
//!
//! let mut editor = DraftEditor::new();
//! editor
//!     .generate(&generator, &PromptDescriptor::new("Pulse", "Monthly team check-in"))
//!     .unwrap();
//!
//! assert_eq!(editor.questions().len(), 1);
//! ```

use survey_draft_types::{DraftStore, PromptDescriptor, SurveyDraft, SurveyGenerator};

/// A generator that returns a pre-configured draft or failure.
#[derive(Debug, Clone)]
pub struct TestGenerator {
    outcome: Result<SurveyDraft, String>,
}

/// Error type for TestGenerator.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TestGeneratorError(String);

impl TestGenerator {
    /// Always return `draft`.
    pub fn returning(draft: SurveyDraft) -> Self {
        Self { outcome: Ok(draft) }
    }

    /// Always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl SurveyGenerator for TestGenerator {
    type Error = TestGeneratorError;

    fn generate(&self, prompt: &PromptDescriptor) -> Result<SurveyDraft, Self::Error> {
        tracing::debug!(title = %prompt.title, "Test generator called");
        self.outcome.clone().map_err(TestGeneratorError)
    }
}

/// An in-memory draft store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    draft: Option<SurveyDraft>,
    unavailable: Option<String>,
}

/// Error type for MemoryStore.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("No draft has been stored")]
    Empty,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `draft`.
    pub fn with_draft(draft: SurveyDraft) -> Self {
        Self {
            draft: Some(draft),
            unavailable: None,
        }
    }

    /// Create a store whose every call fails with `message`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            draft: None,
            unavailable: Some(message.into()),
        }
    }

    /// Get the stored draft, if any.
    pub fn stored(&self) -> Option<&SurveyDraft> {
        self.draft.as_ref()
    }
}

impl DraftStore for MemoryStore {
    type Error = MemoryStoreError;

    fn load(&self) -> Result<SurveyDraft, Self::Error> {
        if let Some(message) = &self.unavailable {
            return Err(MemoryStoreError::Unavailable(message.clone()));
        }
        self.draft.clone().ok_or(MemoryStoreError::Empty)
    }

    fn save(&mut self, draft: &SurveyDraft) -> Result<(), Self::Error> {
        if let Some(message) = &self.unavailable {
            return Err(MemoryStoreError::Unavailable(message.clone()));
        }
        self.draft = Some(draft.clone());
        Ok(())
    }
}
