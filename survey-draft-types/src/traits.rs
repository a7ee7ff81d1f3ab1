use crate::{PromptDescriptor, SurveyDraft};

/// Trait for collaborators that generate a whole survey draft from a prompt.
///
/// The returned questions replace the editor's collection wholesale; any ids
/// the collaborator may have used are discarded.
pub trait SurveyGenerator {
    /// The error type for this generator. Only its message is surfaced.
    type Error: Into<anyhow::Error>;

    /// Generate a draft.
    ///
    /// # Returns
    /// * `Ok(draft)` on success
    /// * `Err` on any failure; the caller leaves its state untouched
    fn generate(&self, prompt: &PromptDescriptor) -> Result<SurveyDraft, Self::Error>;
}

/// Trait for collaborators that persist a survey draft for the current session.
pub trait DraftStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Fetch the stored draft.
    fn load(&self) -> Result<SurveyDraft, Self::Error>;

    /// Overwrite the stored draft.
    fn save(&mut self, draft: &SurveyDraft) -> Result<(), Self::Error>;
}
