//! Core types for the survey-draft crate.
//!
//! This crate provides the foundational types for editing survey drafts:
//! - `Question`, `QuestionKind` and `QuestionType` - Individual questions and their types
//! - `OptionList` - The ordered options of a choice question
//! - `QuestionId` and `IdSource` - Stable question identity
//! - `SurveyDraft` and its records - The shape exchanged with collaborators
//! - `SurveyGenerator` and `DraftStore` traits - For implementing collaborators

mod question_id;
pub use question_id::{IdSource, QuestionId, SequentialIds};

mod question;
pub use question::{
    ChoiceOption, MIN_OPTION_COUNT, OptionList, Question, QuestionKind, QuestionType,
    SEEDED_OPTION_COUNT,
};

mod survey_draft;
pub use survey_draft::{OptionRecord, QuestionRecord, SurveyDraft, SurveyMetadata};

mod prompt;
pub use prompt::{MIN_CONTEXT_CHARS, PromptDescriptor, PromptError, QUESTION_COUNT_RANGE};

mod error;
pub use error::ImportError;

mod traits;
pub use traits::{DraftStore, SurveyGenerator};
