use std::fmt;

use crate::QuestionId;

/// Number of empty options a freshly created choice question starts with.
pub const SEEDED_OPTION_COUNT: usize = 2;

/// A choice question can never drop below this many options.
pub const MIN_OPTION_COUNT: usize = 1;

/// A single question in a survey draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identity, assigned by the owning collection.
    id: QuestionId,

    /// The prompt text shown to respondents. May be empty while editing.
    text: String,

    /// The kind of question, carrying any type-dependent payload.
    kind: QuestionKind,

    /// Whether respondents must answer this question.
    required: bool,
}

impl Question {
    /// Create a new required question.
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            required: true,
        }
    }

    /// Create the question produced by an "add question" gesture: empty text,
    /// choice type with two empty options, required.
    pub fn blank(id: QuestionId) -> Self {
        Self::new(id, "", QuestionKind::Choice(OptionList::seeded()))
    }

    /// Set whether the question is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the prompt text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get a mutable reference to the question kind.
    pub fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }

    /// Replace the question kind wholesale.
    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
    }

    /// Get the type tag of this question.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Check whether respondents must answer this question.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Set whether respondents must answer this question.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Get the options of a choice question, or an empty slice for every other kind.
    pub fn options(&self) -> &[ChoiceOption] {
        self.kind.options()
    }

    /// Get the option sub-list of a choice question.
    pub fn options_mut(&mut self) -> Option<&mut OptionList> {
        self.kind.options_mut()
    }
}

/// The type tag of a question, without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// Pick exactly one of a list of options.
    Choice,

    /// Free-form, multi-line text answer.
    OpenText,

    /// Fixed 1-5 rating scale.
    Rating,

    /// Yes/no answer.
    Boolean,
}

impl QuestionType {
    /// Every question type, in the order an editor offers them.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Choice,
        QuestionType::OpenText,
        QuestionType::Rating,
        QuestionType::Boolean,
    ];

    /// The canonical tag used when writing stored records.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Choice => "multiple_choice",
            Self::OpenText => "open_ended",
            Self::Rating => "rating",
            Self::Boolean => "boolean",
        }
    }

    /// Parse a stored tag. Accepts the canonical tags plus the aliases
    /// produced by the generation service.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "multiple_choice" | "single_choice" | "choice" => Some(Self::Choice),
            "open_ended" | "open_text" | "text" => Some(Self::OpenText),
            "rating" => Some(Self::Rating),
            "boolean" | "boolean_" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The kind of question, determining the answer shape and its payload.
///
/// Only [`QuestionKind::Choice`] carries options, so a non-choice question
/// cannot hold options at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single selection among the listed options.
    Choice(OptionList),

    /// Free-form text.
    OpenText,

    /// 1-5 rating.
    Rating,

    /// Yes/no.
    Boolean,
}

impl QuestionKind {
    /// Build the freshly seeded payload for a question type.
    pub fn seeded(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Choice => Self::Choice(OptionList::seeded()),
            QuestionType::OpenText => Self::OpenText,
            QuestionType::Rating => Self::Rating,
            QuestionType::Boolean => Self::Boolean,
        }
    }

    /// Get the type tag.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Choice(_) => QuestionType::Choice,
            Self::OpenText => QuestionType::OpenText,
            Self::Rating => QuestionType::Rating,
            Self::Boolean => QuestionType::Boolean,
        }
    }

    /// Check if this is a choice question.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// Get the options, or an empty slice for non-choice kinds.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            Self::Choice(options) => options.as_slice(),
            Self::OpenText | Self::Rating | Self::Boolean => &[],
        }
    }

    /// Get the option sub-list, if this is a choice question.
    pub fn options_mut(&mut self) -> Option<&mut OptionList> {
        match self {
            Self::Choice(options) => Some(options),
            Self::OpenText | Self::Rating | Self::Boolean => None,
        }
    }
}

/// One selectable option of a choice question.
///
/// Options have no identity of their own; they are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The option label. May be empty while editing.
    pub text: String,
}

impl ChoiceOption {
    /// Create an option with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create an option with empty text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the text is blank after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Ordered options of a choice question.
///
/// Never holds fewer than [`MIN_OPTION_COUNT`] options: every constructor
/// yields at least one and [`OptionList::remove_at`] refuses to go below it.
/// Positions are 0-based and refer to the current order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<ChoiceOption>,
}

impl OptionList {
    /// Two empty options.
    pub fn seeded() -> Self {
        Self {
            options: vec![ChoiceOption::empty(); SEEDED_OPTION_COUNT],
        }
    }

    /// Build from option texts, falling back to [`OptionList::seeded`] when
    /// the iterator is empty.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<_> = texts.into_iter().map(ChoiceOption::new).collect();
        if options.is_empty() {
            Self::seeded()
        } else {
            Self { options }
        }
    }

    /// Append one empty option.
    pub fn add(&mut self) {
        self.options.push(ChoiceOption::empty());
    }

    /// Replace the text of the option at `position`.
    ///
    /// Returns `false` and changes nothing if `position` is out of bounds.
    pub fn update_at(&mut self, position: usize, text: impl Into<String>) -> bool {
        match self.options.get_mut(position) {
            Some(option) => {
                option.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Remove the option at `position`.
    ///
    /// Returns `false` and changes nothing if `position` is out of bounds or
    /// the list would drop below [`MIN_OPTION_COUNT`].
    pub fn remove_at(&mut self, position: usize) -> bool {
        if self.options.len() <= MIN_OPTION_COUNT || position >= self.options.len() {
            return false;
        }
        self.options.remove(position);
        true
    }

    /// Get the option at `position`.
    pub fn get(&self, position: usize) -> Option<&ChoiceOption> {
        self.options.get(position)
    }

    /// Get the options as a slice.
    pub fn as_slice(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Iterate over the options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChoiceOption> {
        self.options.iter()
    }

    /// Get the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the list has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for OptionList {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a ChoiceOption;
    type IntoIter = std::slice::Iter<'a, ChoiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &OptionList) -> Vec<&str> {
        list.iter().map(|o| o.text.as_str()).collect()
    }

    #[test]
    fn blank_question_defaults() {
        let question = Question::blank(QuestionId::new(1));
        assert_eq!(question.text(), "");
        assert!(question.is_required());
        assert_eq!(question.question_type(), QuestionType::Choice);
        assert_eq!(question.options().len(), 2);
        assert!(question.options().iter().all(ChoiceOption::is_blank));
    }

    #[test]
    fn non_choice_has_no_options() {
        let mut question = Question::new(QuestionId::new(1), "How?", QuestionKind::OpenText);
        assert!(question.options().is_empty());
        assert!(question.options_mut().is_none());
    }

    #[test]
    fn add_appends_empty_option() {
        let mut list = OptionList::from_texts(["a"]);
        list.add();
        assert_eq!(texts(&list), vec!["a", ""]);
    }

    #[test]
    fn update_at_out_of_bounds_is_noop() {
        let mut list = OptionList::from_texts(["a", "b"]);
        assert!(!list.update_at(2, "c"));
        assert_eq!(texts(&list), vec!["a", "b"]);

        assert!(list.update_at(1, "c"));
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn remove_at_keeps_last_option() {
        let mut list = OptionList::from_texts(["only"]);
        assert!(!list.remove_at(0));
        assert_eq!(texts(&list), vec!["only"]);
    }

    #[test]
    fn remove_at_shifts_positions() {
        let mut list = OptionList::from_texts(["a", "b", "c"]);
        assert!(list.remove_at(0));
        assert_eq!(texts(&list), vec!["b", "c"]);
        assert!(list.update_at(0, "B"));
        assert_eq!(texts(&list), vec!["B", "c"]);
        assert!(!list.remove_at(5));
    }

    #[test]
    fn from_empty_texts_is_seeded() {
        let list = OptionList::from_texts(Vec::<String>::new());
        assert_eq!(list, OptionList::seeded());
    }

    #[test]
    fn tag_aliases() {
        assert_eq!(QuestionType::from_tag("single_choice"), Some(QuestionType::Choice));
        assert_eq!(QuestionType::from_tag(" Multiple_Choice "), Some(QuestionType::Choice));
        assert_eq!(QuestionType::from_tag("text"), Some(QuestionType::OpenText));
        assert_eq!(QuestionType::from_tag("boolean_"), Some(QuestionType::Boolean));
        assert_eq!(QuestionType::from_tag("ranking"), None);
    }

    #[test]
    fn canonical_tags_round_trip() {
        for question_type in QuestionType::ALL {
            assert_eq!(QuestionType::from_tag(question_type.tag()), Some(question_type));
        }
    }
}
