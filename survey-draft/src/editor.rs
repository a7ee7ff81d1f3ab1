use survey_draft_types::{
    DraftStore, IdSource, ImportError, PromptDescriptor, PromptError, Question, QuestionId,
    QuestionType, SequentialIds, SurveyDraft, SurveyGenerator, SurveyMetadata,
};

use crate::QuestionCollection;
use crate::validation::{self, ValidationOptions, ValidationReport};

/// Error type for editing-session operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A generation request is in flight; the draft is locked.
    #[error("A survey generation is already in progress")]
    GenerationPending,

    /// A generation result arrived for a request that is no longer pending.
    #[error("Generation result does not belong to the pending request")]
    StaleGeneration,

    /// The prompt was rejected before reaching the generator.
    #[error(transparent)]
    InvalidPrompt(#[from] PromptError),

    /// A collaborator returned records that cannot become questions.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// The draft did not pass validation and was not submitted.
    #[error("Survey has {} validation problem(s)", .0.len())]
    Invalid(ValidationReport),

    /// The generation collaborator failed.
    #[error("Survey generation failed: {0}")]
    Generation(anyhow::Error),

    /// The storage collaborator failed.
    #[error("Draft storage failed: {0}")]
    Store(anyhow::Error),
}

impl EditorError {
    /// Create a generation error from any error type.
    pub fn generation(err: impl Into<anyhow::Error>) -> Self {
        Self::Generation(err.into())
    }

    /// Create a storage error from any error type.
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        Self::Store(err.into())
    }

    /// Check if this error was caused by the draft being locked by a generation.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::GenerationPending)
    }
}

/// Handle for one in-flight generation request.
///
/// Only the ticket returned by the most recent [`DraftEditor::begin_generation`]
/// can complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerationState {
    Idle,
    Pending(GenerationTicket),
}

/// One editing session over a survey draft.
///
/// Owns the survey metadata and the question collection. While a generation
/// request is in flight every mutation is refused, so a late bulk
/// replacement can never silently discard a manual edit.
#[derive(Debug, Clone)]
pub struct DraftEditor<I = SequentialIds> {
    metadata: SurveyMetadata,
    questions: QuestionCollection<I>,
    validation: ValidationOptions,
    generation: GenerationState,
    next_ticket: u64,
}

impl DraftEditor<SequentialIds> {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::with_id_source(SequentialIds::new())
    }
}

impl Default for DraftEditor<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> DraftEditor<I> {
    /// Create an empty draft drawing question ids from `ids`.
    pub fn with_id_source(ids: I) -> Self {
        Self {
            metadata: SurveyMetadata::default(),
            questions: QuestionCollection::with_id_source(ids),
            validation: ValidationOptions::new().require_title(true),
            generation: GenerationState::Idle,
            next_ticket: 1,
        }
    }

    /// Set the options used by [`DraftEditor::validate`] and [`DraftEditor::submit`].
    pub fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.validation = options;
        self
    }

    /// Get the survey metadata.
    pub fn metadata(&self) -> &SurveyMetadata {
        &self.metadata
    }

    /// Get the question collection.
    pub fn questions(&self) -> &QuestionCollection<I> {
        &self.questions
    }

    /// Check if a generation request is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(self.generation, GenerationState::Pending(_))
    }

    fn unlocked(&self, operation: &str) -> bool {
        if self.is_generating() {
            tracing::debug!(operation, "Ignoring edit while generation is pending");
            false
        } else {
            true
        }
    }

    /// Set the survey title.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        if !self.unlocked("set_title") {
            return false;
        }
        self.metadata.title = title.into();
        true
    }

    /// Set the survey description.
    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        if !self.unlocked("set_description") {
            return false;
        }
        self.metadata.description = description.into();
        true
    }

    /// Append a blank question. Returns `None` while generation is pending.
    pub fn add_question(&mut self) -> Option<QuestionId> {
        self.unlocked("add_question").then(|| self.questions.add())
    }

    /// See [`QuestionCollection::update`].
    pub fn update_question(&mut self, id: QuestionId, question: Question) -> bool {
        self.unlocked("update_question") && self.questions.update(id, question)
    }

    /// See [`QuestionCollection::set_text`].
    pub fn set_question_text(&mut self, id: QuestionId, text: impl Into<String>) -> bool {
        self.unlocked("set_question_text") && self.questions.set_text(id, text)
    }

    /// See [`QuestionCollection::set_required`].
    pub fn set_required(&mut self, id: QuestionId, required: bool) -> bool {
        self.unlocked("set_required") && self.questions.set_required(id, required)
    }

    /// See [`QuestionCollection::change_type`].
    pub fn change_type(&mut self, id: QuestionId, new_type: QuestionType) -> bool {
        self.unlocked("change_type") && self.questions.change_type(id, new_type)
    }

    /// See [`QuestionCollection::add_option`].
    pub fn add_option(&mut self, id: QuestionId) -> bool {
        self.unlocked("add_option") && self.questions.add_option(id)
    }

    /// See [`QuestionCollection::update_option`].
    pub fn update_option(
        &mut self,
        id: QuestionId,
        position: usize,
        text: impl Into<String>,
    ) -> bool {
        self.unlocked("update_option") && self.questions.update_option(id, position, text)
    }

    /// See [`QuestionCollection::remove_option`].
    pub fn remove_option(&mut self, id: QuestionId, position: usize) -> bool {
        self.unlocked("remove_option") && self.questions.remove_option(id, position)
    }

    /// See [`QuestionCollection::remove`].
    pub fn remove_question(&mut self, id: QuestionId) -> bool {
        self.unlocked("remove_question") && self.questions.remove(id)
    }

    /// See [`QuestionCollection::reorder`].
    pub fn reorder(&mut self, source: QuestionId, target: QuestionId) -> bool {
        self.unlocked("reorder") && self.questions.reorder(source, target)
    }

    /// Start a generation request and lock the draft until it is finished.
    pub fn begin_generation(
        &mut self,
        prompt: &PromptDescriptor,
    ) -> Result<GenerationTicket, EditorError> {
        if self.is_generating() {
            return Err(EditorError::GenerationPending);
        }
        prompt.check()?;

        let ticket = GenerationTicket(self.next_ticket);
        self.next_ticket += 1;
        self.generation = GenerationState::Pending(ticket);
        tracing::debug!(ticket = ticket.0, title = %prompt.title, "Started generation");
        Ok(ticket)
    }

    /// Complete the generation request identified by `ticket`.
    ///
    /// On success the metadata and every question are replaced wholesale. On
    /// failure nothing changes. Either way the draft is unlocked, unless the
    /// ticket is stale, in which case the result is dropped and the state
    /// left as it was.
    pub fn finish_generation<E: Into<anyhow::Error>>(
        &mut self,
        ticket: GenerationTicket,
        result: Result<SurveyDraft, E>,
    ) -> Result<(), EditorError> {
        if self.generation != GenerationState::Pending(ticket) {
            tracing::warn!(ticket = ticket.0, "Dropping stale generation result");
            return Err(EditorError::StaleGeneration);
        }
        self.generation = GenerationState::Idle;

        let draft = result.map_err(|err| {
            let err = EditorError::generation(err);
            tracing::warn!("{err}");
            err
        })?;
        self.replace_with(&draft)?;
        Ok(())
    }

    /// Run a generation request to completion against `generator`.
    pub fn generate<G: SurveyGenerator>(
        &mut self,
        generator: &G,
        prompt: &PromptDescriptor,
    ) -> Result<(), EditorError> {
        let ticket = self.begin_generation(prompt)?;
        let result = generator.generate(prompt);
        self.finish_generation(ticket, result)
    }

    /// Replace the draft with the one held by `store`.
    pub fn load<S: DraftStore>(&mut self, store: &S) -> Result<(), EditorError> {
        if self.is_generating() {
            return Err(EditorError::GenerationPending);
        }
        let draft = store.load().map_err(EditorError::store)?;
        self.replace_with(&draft)?;
        Ok(())
    }

    /// Write the draft to `store` as-is, without validation.
    pub fn save<S: DraftStore>(&self, store: &mut S) -> Result<(), EditorError> {
        store.save(&self.to_draft()).map_err(EditorError::store)
    }

    /// Validate the draft and write it to `store` only if it passes.
    pub fn submit<S: DraftStore>(&self, store: &mut S) -> Result<(), EditorError> {
        let report = self.validate();
        if !report.passed() {
            return Err(EditorError::Invalid(report));
        }
        self.save(store)
    }

    /// Discard the draft. A generation still in flight becomes stale.
    pub fn abandon(&mut self) {
        self.metadata = SurveyMetadata::default();
        self.questions.clear();
        self.generation = GenerationState::Idle;
        tracing::debug!("Abandoned draft");
    }

    fn replace_with(&mut self, draft: &SurveyDraft) -> Result<(), ImportError> {
        self.questions.replace_all(&draft.questions)?;
        self.metadata = draft.metadata();
        tracing::info!(
            title = %self.metadata.title,
            questions = self.questions.len(),
            "Replaced draft"
        );
        Ok(())
    }
}

impl<I> DraftEditor<I> {
    /// Validate the draft with the editor's validation options.
    pub fn validate(&self) -> ValidationReport {
        validation::validate_draft(&self.metadata, &self.questions, &self.validation)
    }

    /// Validate the draft with explicit options.
    pub fn validate_with(&self, options: &ValidationOptions) -> ValidationReport {
        validation::validate_draft(&self.metadata, &self.questions, options)
    }

    /// Export the draft in the shape collaborators exchange.
    pub fn to_draft(&self) -> SurveyDraft {
        SurveyDraft::new(self.metadata.title.clone(), self.questions.to_records())
            .with_description(self.metadata.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use survey_draft_types::QuestionRecord;

    use super::*;
    use crate::{MemoryStore, TestGenerator};

    fn prompt() -> PromptDescriptor {
        PromptDescriptor::new("Team pulse", "Monthly engagement check-in for the team")
    }

    fn generated() -> SurveyDraft {
        SurveyDraft::new(
            "Team pulse",
            vec![
                QuestionRecord::choice("How was your month?", ["Great", "Fine", "Rough"]),
                QuestionRecord::new("Would you recommend the team?", "boolean"),
                QuestionRecord::new("Rate your workload", "rating"),
            ],
        )
    }

    #[test]
    fn edits_are_refused_while_generating() {
        let mut editor = DraftEditor::new();
        let id = editor.add_question().unwrap();
        let other = editor.add_question().unwrap();
        editor.update_option(id, 0, "Red");
        let before = editor.to_draft();
        let _ticket = editor.begin_generation(&prompt()).unwrap();

        let mut replacement = editor.questions().get(id).unwrap().clone();
        replacement.set_text("late replacement");

        assert!(editor.add_question().is_none());
        assert!(!editor.set_title("late title"));
        assert!(!editor.set_description("late description"));
        assert!(!editor.set_question_text(id, "late edit"));
        assert!(!editor.update_question(id, replacement));
        assert!(!editor.set_required(id, false));
        assert!(!editor.change_type(id, QuestionType::Rating));
        assert!(!editor.add_option(id));
        assert!(!editor.update_option(id, 0, "Blue"));
        assert!(!editor.remove_option(id, 1));
        assert!(!editor.reorder(other, id));
        assert!(!editor.remove_question(id));

        assert_eq!(editor.questions().ids(), vec![id, other]);
        let texts: Vec<_> = editor
            .questions()
            .get(id)
            .unwrap()
            .options()
            .iter()
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Red", ""]);
        assert_eq!(editor.to_draft(), before);
    }

    #[test]
    fn second_generation_is_rejected() {
        let mut editor = DraftEditor::new();
        editor.begin_generation(&prompt()).unwrap();
        let err = editor.begin_generation(&prompt()).unwrap_err();
        assert!(err.is_pending());
    }

    #[test]
    fn successful_generation_replaces_everything() {
        let mut editor = DraftEditor::new();
        let old = editor.add_question().unwrap();

        let ticket = editor.begin_generation(&prompt()).unwrap();
        editor
            .finish_generation(ticket, Ok::<_, anyhow::Error>(generated()))
            .unwrap();

        assert!(!editor.is_generating());
        assert_eq!(editor.metadata().title, "Team pulse");
        assert_eq!(editor.questions().len(), 3);
        assert!(!editor.questions().contains(old));
        assert!(editor.add_question().is_some());
    }

    #[test]
    fn failed_generation_leaves_draft_untouched() {
        let mut editor = DraftEditor::new();
        editor.set_title("Mine");
        let id = editor.add_question().unwrap();
        let before = editor.to_draft();

        let ticket = editor.begin_generation(&prompt()).unwrap();
        let err = editor
            .finish_generation(ticket, Err(anyhow::anyhow!("service unavailable")))
            .unwrap_err();

        assert_eq!(err.to_string(), "Survey generation failed: service unavailable");
        assert_eq!(editor.to_draft(), before);
        assert!(editor.questions().contains(id));
        assert!(!editor.is_generating());
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut editor = DraftEditor::new();
        let first = editor.begin_generation(&prompt()).unwrap();
        editor.abandon();
        editor.add_question();

        let err = editor
            .finish_generation(first, Ok::<_, anyhow::Error>(generated()))
            .unwrap_err();
        assert!(matches!(err, EditorError::StaleGeneration));
        assert_eq!(editor.questions().len(), 1);
    }

    #[test]
    fn invalid_prompt_never_locks() {
        let mut editor = DraftEditor::new();
        let err = editor
            .begin_generation(&PromptDescriptor::new("", "context long enough"))
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidPrompt(PromptError::MissingTitle)));
        assert!(!editor.is_generating());
    }

    #[test]
    fn generate_with_collaborator() {
        let mut editor = DraftEditor::new();
        editor
            .generate(&TestGenerator::returning(generated()), &prompt())
            .unwrap();
        assert_eq!(editor.questions().len(), 3);

        let err = editor
            .generate(&TestGenerator::failing("quota exceeded"), &prompt())
            .unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(editor.questions().len(), 3);
    }

    #[test]
    fn submit_requires_valid_draft() {
        let mut store = MemoryStore::new();
        let mut editor = DraftEditor::new();
        let id = editor.add_question().unwrap();

        let err = editor.submit(&mut store).unwrap_err();
        let EditorError::Invalid(report) = err else {
            panic!("expected validation failure");
        };
        assert!(!report.for_question(id).is_empty());
        assert!(store.stored().is_none());

        editor.set_title("Colours");
        editor.set_question_text(id, "Favourite colour?");
        editor.update_option(id, 0, "Red");
        editor.update_option(id, 1, "Blue");
        editor.submit(&mut store).unwrap();
        assert_eq!(store.stored(), Some(&editor.to_draft()));
    }

    #[test]
    fn load_replaces_draft() {
        let store = MemoryStore::with_draft(generated());
        let mut editor = DraftEditor::new();
        editor.load(&store).unwrap();
        assert_eq!(editor.to_draft().questions, generated().questions);
    }
}
