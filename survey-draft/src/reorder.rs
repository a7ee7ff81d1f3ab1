//! Drag reorder: move one question to where another one currently sits.

use survey_draft_types::{Question, QuestionId};

/// Move the question `source` into the slot currently held by `target`.
///
/// The moved question lands exactly at the target's index; the target and
/// everything between the two shift by one slot towards the source's old
/// position. All other questions keep their relative order.
///
/// Returns `false` and leaves `questions` untouched if either id is absent or
/// both are the same.
pub fn reorder(questions: &mut Vec<Question>, source: QuestionId, target: QuestionId) -> bool {
    if source == target {
        return false;
    }

    let Some(source_index) = questions.iter().position(|q| q.id() == source) else {
        return false;
    };
    let Some(target_index) = questions.iter().position(|q| q.id() == target) else {
        return false;
    };

    move_item(questions, source_index, target_index);
    true
}

/// Remove the element at `from` and re-insert it at `to`.
///
/// `to` is interpreted as an index into the sequence before removal.
/// Out-of-range indices leave the sequence unchanged.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use survey_draft_types::QuestionKind;

    use super::*;

    fn questions(ids: &[u64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question::new(QuestionId::new(id), "", QuestionKind::Rating))
            .collect()
    }

    fn order(questions: &[Question]) -> Vec<u64> {
        questions.iter().map(|q| q.id().get()).collect()
    }

    #[test]
    fn forward_move_lands_on_target_slot() {
        // A=1, B=2, C=3, D=4
        let mut qs = questions(&[1, 2, 3, 4]);
        assert!(reorder(&mut qs, QuestionId::new(1), QuestionId::new(3)));
        assert_eq!(order(&qs), vec![2, 3, 1, 4]);

        assert!(reorder(&mut qs, QuestionId::new(1), QuestionId::new(2)));
        assert_eq!(order(&qs), vec![1, 2, 3, 4]);
    }

    #[test]
    fn backward_move_shifts_right() {
        let mut qs = questions(&[1, 2, 3, 4]);
        assert!(reorder(&mut qs, QuestionId::new(4), QuestionId::new(2)));
        assert_eq!(order(&qs), vec![1, 4, 2, 3]);
    }

    #[test]
    fn adjacent_moves_undo_each_other() {
        let mut qs = questions(&[1, 2, 3]);
        reorder(&mut qs, QuestionId::new(2), QuestionId::new(3));
        assert_eq!(order(&qs), vec![1, 3, 2]);
        reorder(&mut qs, QuestionId::new(3), QuestionId::new(2));
        assert_eq!(order(&qs), vec![1, 2, 3]);
    }

    #[test]
    fn same_or_missing_ids_are_noops() {
        let mut qs = questions(&[1, 2, 3]);
        assert!(!reorder(&mut qs, QuestionId::new(2), QuestionId::new(2)));
        assert!(!reorder(&mut qs, QuestionId::new(9), QuestionId::new(2)));
        assert!(!reorder(&mut qs, QuestionId::new(2), QuestionId::new(9)));
        assert_eq!(order(&qs), vec![1, 2, 3]);
    }

    #[test]
    fn move_item_ignores_out_of_range() {
        let mut items = vec!['a', 'b'];
        move_item(&mut items, 0, 5);
        assert_eq!(items, vec!['a', 'b']);
    }
}
