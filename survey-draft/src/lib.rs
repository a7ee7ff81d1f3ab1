//! # survey-draft
//!
//! In-memory editing model for survey drafts. Presentation-agnostic.
//!
//! A draft is an ordered [`QuestionCollection`] plus survey metadata. Hosts
//! feed user gestures (text edits, type changes, option edits, drag events
//! identified by source and target id) into a [`DraftEditor`] and re-render
//! from its state after every call.
//!
//! ## Usage
//!
//! ```rust
//! use survey_draft::{DraftEditor, QuestionType};
//!
//! let mut editor = DraftEditor::new();
//! editor.set_title("Lunch survey");
//!
//! let first = editor.add_question().unwrap();
//! editor.set_question_text(first, "Which dish?");
//! editor.update_option(first, 0, "Soup");
//! editor.update_option(first, 1, "Salad");
//!
//! let second = editor.add_question().unwrap();
//! editor.set_question_text(second, "Rate the food");
//! editor.change_type(second, QuestionType::Rating);
//!
//! editor.reorder(second, first);
//! assert_eq!(editor.questions().ids(), vec![second, first]);
//! assert!(editor.validate().passed());
//! ```
//!
//! ## Rules
//!
//! - Question ids come from an injected [`IdSource`] and are never reused.
//! - A choice question always has at least one option; other kinds have none.
//! - Operations on unknown ids or positions are silent no-ops returning `false`.
//! - Changing a question away from choice discards its options.
//! - While a generation request is pending, every edit is refused.

// Re-export all types from survey-draft-types
pub use survey_draft_types::*;

mod collection;
pub use collection::QuestionCollection;

pub mod reorder;
pub mod transition;

pub mod validation;
pub use validation::{
    Diagnostic, FieldKey, ValidationOptions, ValidationReport, validate, validate_draft,
    validate_with,
};

mod editor;
pub use editor::{DraftEditor, EditorError, GenerationTicket};

// Test collaborators for exercising sessions without external services
mod test_backend;
pub use test_backend::{MemoryStore, MemoryStoreError, TestGenerator, TestGeneratorError};
