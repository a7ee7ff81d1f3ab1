//! What happens to a question's payload when its type changes.

use survey_draft_types::{Question, QuestionKind, QuestionType};

/// Compute the payload for `kind` after switching to `new_type`.
///
/// Staying on choice keeps the existing options. Switching to choice from
/// anything else seeds two empty options. Switching to any other type drops
/// the options, so a later switch back to choice does not restore them.
pub fn transition(kind: &QuestionKind, new_type: QuestionType) -> QuestionKind {
    match (kind, new_type) {
        (QuestionKind::Choice(options), QuestionType::Choice) => {
            QuestionKind::Choice(options.clone())
        }
        (_, new_type) => QuestionKind::seeded(new_type),
    }
}

/// Apply [`transition`] to a question in place.
///
/// Returns `false` if the question already had `new_type`.
pub fn change_type(question: &mut Question, new_type: QuestionType) -> bool {
    if question.question_type() == new_type {
        return false;
    }
    let kind = transition(question.kind(), new_type);
    question.set_kind(kind);
    true
}
