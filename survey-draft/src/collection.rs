use survey_draft_types::{
    IdSource, ImportError, OptionList, Question, QuestionId, QuestionKind, QuestionRecord,
    QuestionType, SequentialIds,
};

use crate::{reorder, transition};

/// The ordered questions of one survey draft.
///
/// Order is the order respondents see. Every id is unique and comes from the
/// injected [`IdSource`]; ids are never reused, not even after removal or a
/// wholesale replacement.
///
/// All operations are total: referencing an unknown id (or an out-of-range
/// option position) is a silent no-op reported by a `false` return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCollection<I = SequentialIds> {
    questions: Vec<Question>,
    ids: I,
}

impl QuestionCollection<SequentialIds> {
    /// Create an empty collection numbering questions from 1.
    pub fn new() -> Self {
        Self::with_id_source(SequentialIds::new())
    }
}

impl Default for QuestionCollection<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> QuestionCollection<I> {
    /// Create an empty collection drawing ids from `ids`.
    pub fn with_id_source(ids: I) -> Self {
        Self {
            questions: Vec::new(),
            ids,
        }
    }

    /// Append a blank choice question with two empty options.
    pub fn add(&mut self) -> QuestionId {
        let id = self.ids.next_id();
        self.questions.push(Question::blank(id));
        tracing::debug!(%id, len = self.questions.len(), "Added question");
        id
    }

    /// Append a question with the given text and kind.
    pub fn push(&mut self, text: impl Into<String>, kind: QuestionKind) -> QuestionId {
        let id = self.ids.next_id();
        self.questions.push(Question::new(id, text, kind));
        id
    }

    /// Replace the question with id `id` by `question`.
    ///
    /// `question` must carry the same id; otherwise nothing changes. The
    /// caller is responsible for a consistent payload after a type change
    /// (see [`transition`](crate::transition)).
    pub fn update(&mut self, id: QuestionId, question: Question) -> bool {
        if question.id() != id {
            tracing::debug!(%id, other = %question.id(), "Ignoring update with mismatched id");
            return false;
        }
        match self.get_mut(id) {
            Some(slot) => {
                *slot = question;
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring update of unknown question");
                false
            }
        }
    }

    /// Mutate the question with id `id` in place.
    pub fn edit(&mut self, id: QuestionId, f: impl FnOnce(&mut Question)) -> bool {
        match self.get_mut(id) {
            Some(question) => {
                f(question);
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring edit of unknown question");
                false
            }
        }
    }

    /// Set the prompt text of a question.
    pub fn set_text(&mut self, id: QuestionId, text: impl Into<String>) -> bool {
        self.edit(id, |q| q.set_text(text))
    }

    /// Set whether a question is required.
    pub fn set_required(&mut self, id: QuestionId, required: bool) -> bool {
        self.edit(id, |q| q.set_required(required))
    }

    /// Change the type of a question, applying the type transition rule.
    ///
    /// Returns `false` for an unknown id or an unchanged type.
    pub fn change_type(&mut self, id: QuestionId, new_type: QuestionType) -> bool {
        self.get_mut(id)
            .is_some_and(|q| transition::change_type(q, new_type))
    }

    /// Append an empty option to a choice question.
    pub fn add_option(&mut self, id: QuestionId) -> bool {
        self.options_mut(id).map(OptionList::add).is_some()
    }

    /// Replace the text of one option of a choice question.
    pub fn update_option(
        &mut self,
        id: QuestionId,
        position: usize,
        text: impl Into<String>,
    ) -> bool {
        self.options_mut(id)
            .is_some_and(|options| options.update_at(position, text))
    }

    /// Remove one option of a choice question, never dropping below one option.
    pub fn remove_option(&mut self, id: QuestionId, position: usize) -> bool {
        self.options_mut(id)
            .is_some_and(|options| options.remove_at(position))
    }

    /// Remove the question with id `id`. Removing the last question is allowed.
    pub fn remove(&mut self, id: QuestionId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.questions.remove(index);
                tracing::debug!(%id, len = self.questions.len(), "Removed question");
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring removal of unknown question");
                false
            }
        }
    }

    /// Move `source` into the slot currently held by `target`.
    ///
    /// See [`reorder::reorder`] for the exact semantics.
    pub fn reorder(&mut self, source: QuestionId, target: QuestionId) -> bool {
        let moved = reorder::reorder(&mut self.questions, source, target);
        if moved {
            tracing::debug!(%source, %target, "Reordered question");
        } else {
            tracing::debug!(%source, %target, "Ignoring reorder");
        }
        moved
    }

    /// Replace every question with ones built from `records`.
    ///
    /// Each record gets a fresh id. A choice record without options is seeded
    /// with two empty ones, and options on any other kind are dropped. If any
    /// record has an unknown type tag the collection is left unchanged.
    pub fn replace_all(&mut self, records: &[QuestionRecord]) -> Result<(), ImportError> {
        let types = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .parsed_type()
                    .ok_or_else(|| ImportError::UnknownQuestionType {
                        index,
                        tag: record.question_type.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let questions = records
            .iter()
            .zip(types)
            .map(|(record, question_type)| {
                let kind = match question_type {
                    QuestionType::Choice => QuestionKind::Choice(OptionList::from_texts(
                        record.options.iter().map(|option| option.text.clone()),
                    )),
                    other => QuestionKind::seeded(other),
                };
                Question::new(self.ids.next_id(), record.text.clone(), kind)
                    .with_required(record.required)
            })
            .collect();

        self.questions = questions;
        tracing::info!(len = self.questions.len(), "Replaced all questions");
        Ok(())
    }

    /// Remove every question. Ids already handed out stay retired.
    pub fn clear(&mut self) {
        self.questions.clear();
    }

    fn get_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id() == id)
    }

    fn options_mut(&mut self, id: QuestionId) -> Option<&mut OptionList> {
        self.get_mut(id).and_then(Question::options_mut)
    }
}

impl<I> QuestionCollection<I> {
    /// Get the question with id `id`.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the current position of the question with id `id`.
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Check if a question with id `id` exists.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.position(id).is_some()
    }

    /// Get the questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over the questions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Get the ids in order.
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(Question::id).collect()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if there are no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Export the questions as stored records, in order.
    pub fn to_records(&self) -> Vec<QuestionRecord> {
        self.questions.iter().map(QuestionRecord::from).collect()
    }
}

impl<'a, I> IntoIterator for &'a QuestionCollection<I> {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
