//! Pre-submission validation of a survey draft.
//!
//! Validation is a pure function of the current collection (and metadata).
//! It produces per-field diagnostics that hosts show inline next to the
//! offending field; it never changes the draft.

use std::collections::HashMap;

use survey_draft_types::{MIN_OPTION_COUNT, QuestionId, QuestionKind, SurveyMetadata};

use crate::QuestionCollection;

/// Options for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Fewest options a choice question may have.
    pub min_choice_options: usize,
    /// Whether [`validate_draft`] requires a non-blank survey title.
    pub require_title: bool,
}

impl ValidationOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self {
            min_choice_options: MIN_OPTION_COUNT,
            require_title: false,
        }
    }

    /// Set the fewest options a choice question may have.
    pub fn with_min_choice_options(mut self, min: usize) -> Self {
        self.min_choice_options = min;
        self
    }

    /// Require a non-blank survey title.
    pub fn require_title(mut self, require: bool) -> Self {
        self.require_title = require;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One validation problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("Survey must contain at least one question")]
    NoQuestions,

    #[error("Survey title is required")]
    TitleRequired,

    #[error("Question text is required")]
    QuestionTextRequired,

    #[error("Option text is required")]
    OptionTextRequired,

    #[error("Question needs at least {min} option(s), has {actual}")]
    TooFewOptions { min: usize, actual: usize },
}

/// The field a diagnostic is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// The survey as a whole.
    Survey,
    /// The survey title.
    Title,
    /// A question, by id.
    Question(QuestionId),
    /// One option of a question, by id and 0-based position.
    Option(QuestionId, usize),
}

/// Result of validating a draft.
///
/// Diagnostics are kept in a deterministic order: survey-level first, then
/// questions in collection order, each followed by its options by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(FieldKey, Diagnostic)>,
}

impl ValidationReport {
    fn push(&mut self, field: FieldKey, diagnostic: Diagnostic) {
        self.entries.push((field, diagnostic));
    }

    /// Check if the draft may be submitted.
    pub fn passed(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get every diagnostic with its field.
    pub fn diagnostics(&self) -> &[(FieldKey, Diagnostic)] {
        &self.entries
    }

    /// Get the diagnostics attached to one field.
    pub fn for_field(&self, field: &FieldKey) -> Vec<&Diagnostic> {
        self.entries
            .iter()
            .filter(|(key, _)| key == field)
            .map(|(_, diagnostic)| diagnostic)
            .collect()
    }

    /// Get the diagnostics attached to a question itself (not its options).
    pub fn for_question(&self, id: QuestionId) -> Vec<&Diagnostic> {
        self.for_field(&FieldKey::Question(id))
    }

    /// Get the diagnostics attached to one option of a question.
    pub fn for_option(&self, id: QuestionId, position: usize) -> Vec<&Diagnostic> {
        self.for_field(&FieldKey::Option(id, position))
    }

    /// Group the diagnostic messages by field, as a host would render them.
    pub fn messages(&self) -> HashMap<FieldKey, Vec<String>> {
        let mut messages: HashMap<FieldKey, Vec<String>> = HashMap::new();
        for (field, diagnostic) in &self.entries {
            messages
                .entry(*field)
                .or_default()
                .push(diagnostic.to_string());
        }
        messages
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate a question collection with default options.
pub fn validate<I>(questions: &QuestionCollection<I>) -> ValidationReport {
    validate_with(questions, &ValidationOptions::default())
}

/// Validate a question collection.
pub fn validate_with<I>(
    questions: &QuestionCollection<I>,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_questions(questions, options, &mut report);
    report
}

/// Validate a question collection together with its survey metadata.
pub fn validate_draft<I>(
    metadata: &SurveyMetadata,
    questions: &QuestionCollection<I>,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    if options.require_title && metadata.title.trim().is_empty() {
        report.push(FieldKey::Title, Diagnostic::TitleRequired);
    }
    check_questions(questions, options, &mut report);
    report
}

fn check_questions<I>(
    questions: &QuestionCollection<I>,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) {
    if questions.is_empty() {
        report.push(FieldKey::Survey, Diagnostic::NoQuestions);
    }

    for question in questions {
        let id = question.id();

        if question.text().trim().is_empty() {
            report.push(FieldKey::Question(id), Diagnostic::QuestionTextRequired);
        }

        match question.kind() {
            QuestionKind::Choice(choices) => {
                if choices.len() < options.min_choice_options {
                    report.push(
                        FieldKey::Question(id),
                        Diagnostic::TooFewOptions {
                            min: options.min_choice_options,
                            actual: choices.len(),
                        },
                    );
                }
                for (position, choice) in choices.iter().enumerate() {
                    if choice.is_blank() {
                        report.push(
                            FieldKey::Option(id, position),
                            Diagnostic::OptionTextRequired,
                        );
                    }
                }
            }
            QuestionKind::OpenText | QuestionKind::Rating | QuestionKind::Boolean => {}
        }
    }

    if !report.passed() {
        tracing::debug!(problems = report.len(), "Draft failed validation");
    }
}
