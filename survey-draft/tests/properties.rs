//! Property tests for question identity and ordering.

use std::collections::BTreeSet;

use proptest::prelude::*;
use survey_draft::{QuestionCollection, QuestionId};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Reorder(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => any::<usize>().prop_map(Op::Remove),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Reorder(a, b)),
    ]
}

/// Pick an id from the live ones, or one that was never handed out.
fn pick(ids: &[QuestionId], index: usize) -> QuestionId {
    if ids.is_empty() || index % (ids.len() + 1) == ids.len() {
        QuestionId::new(u64::MAX)
    } else {
        ids[index % ids.len()]
    }
}

proptest! {
    #[test]
    fn id_set_follows_operation_history(ops in prop::collection::vec(op(), 0..64)) {
        let mut questions = QuestionCollection::new();
        let mut expected = BTreeSet::new();
        let mut ever_issued = BTreeSet::new();

        for op in ops {
            let ids = questions.ids();
            match op {
                Op::Add => {
                    let id = questions.add();
                    prop_assert!(ever_issued.insert(id), "id {} reused", id);
                    expected.insert(id);
                }
                Op::Remove(index) => {
                    let id = pick(&ids, index);
                    let removed = questions.remove(id);
                    prop_assert_eq!(removed, expected.remove(&id));
                }
                Op::Reorder(a, b) => {
                    questions.reorder(pick(&ids, a), pick(&ids, b));
                }
            }

            let actual: BTreeSet<_> = questions.ids().into_iter().collect();
            prop_assert_eq!(actual.len(), questions.len());
            prop_assert_eq!(&actual, &expected);
        }
    }

    #[test]
    fn reorder_moves_only_the_source(len in 2usize..12, a in any::<usize>(), b in any::<usize>()) {
        let mut questions = QuestionCollection::new();
        for _ in 0..len {
            questions.add();
        }
        let before = questions.ids();
        let source = before[a % len];
        let target = before[b % len];

        questions.reorder(source, target);
        let after = questions.ids();

        let target_index = before.iter().position(|id| *id == target).unwrap();
        prop_assert_eq!(after[target_index], source);

        let others_before: Vec<_> = before.iter().filter(|id| **id != source).collect();
        let others_after: Vec<_> = after.iter().filter(|id| **id != source).collect();
        prop_assert_eq!(others_before, others_after);
    }
}
