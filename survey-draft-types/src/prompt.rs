use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Shortest accepted generation context, in characters after trimming.
pub const MIN_CONTEXT_CHARS: usize = 10;

/// Accepted number of questions to request from the generator.
pub const QUESTION_COUNT_RANGE: RangeInclusive<u8> = 3..=20;

/// Error type for prompt descriptors rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Survey title is required")]
    MissingTitle,

    #[error("Generation context is required")]
    MissingContext,

    #[error("Generation context must be at least {min} characters, got {actual}")]
    ContextTooShort { min: usize, actual: usize },

    #[error("Question count must be between {min} and {max}, got {actual}")]
    QuestionCountOutOfRange { min: u8, max: u8, actual: u8 },
}

/// What the generation collaborator is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDescriptor {
    /// Title of the survey to generate.
    pub title: String,

    /// Short description of the survey.
    #[serde(default)]
    pub description: String,

    /// Optional topic or category name.
    #[serde(default)]
    pub category: Option<String>,

    /// Free-form context the questions should be derived from.
    pub context: String,

    /// How many questions to ask for.
    pub question_count: u8,
}

impl PromptDescriptor {
    /// Create a descriptor asking for the smallest accepted number of questions.
    pub fn new(title: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: None,
            context: context.into(),
            question_count: *QUESTION_COUNT_RANGE.start(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the requested question count.
    pub fn with_question_count(mut self, question_count: u8) -> Self {
        self.question_count = question_count;
        self
    }

    /// Reject descriptors the generator should never see.
    pub fn check(&self) -> Result<(), PromptError> {
        if self.title.trim().is_empty() {
            return Err(PromptError::MissingTitle);
        }

        let context = self.context.trim();
        if context.is_empty() {
            return Err(PromptError::MissingContext);
        }
        let actual = context.chars().count();
        if actual < MIN_CONTEXT_CHARS {
            return Err(PromptError::ContextTooShort {
                min: MIN_CONTEXT_CHARS,
                actual,
            });
        }

        if !QUESTION_COUNT_RANGE.contains(&self.question_count) {
            return Err(PromptError::QuestionCountOutOfRange {
                min: *QUESTION_COUNT_RANGE.start(),
                max: *QUESTION_COUNT_RANGE.end(),
                actual: self.question_count,
            });
        }

        Ok(())
    }
}
