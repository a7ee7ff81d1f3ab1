use serde::{Deserialize, Serialize};

use crate::{ChoiceOption, Question, QuestionType};

/// Survey-level metadata shown above the questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyMetadata {
    /// Survey title. May be empty while editing.
    pub title: String,

    /// Optional longer description.
    pub description: String,
}

impl SurveyMetadata {
    /// Create metadata with the given title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A survey draft as exchanged with collaborators (generation service, storage).
///
/// Questions are stored records, not live [`Question`]s: they carry no trusted
/// identity and their type tag is an unchecked string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    /// Survey title.
    #[serde(default)]
    pub title: String,

    /// Survey description.
    #[serde(default)]
    pub description: String,

    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl SurveyDraft {
    /// Create a draft with the given title and records.
    pub fn new(title: impl Into<String>, questions: Vec<QuestionRecord>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            questions,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Split off the survey-level metadata.
    pub fn metadata(&self) -> SurveyMetadata {
        SurveyMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// Check if the draft has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The prompt text.
    #[serde(rename = "question_text", default)]
    pub text: String,

    /// The raw type tag, e.g. `"multiple_choice"`.
    #[serde(rename = "question_type")]
    pub question_type: String,

    /// Whether an answer is required. Absent means required.
    #[serde(rename = "is_required", default = "required_by_default")]
    pub required: bool,

    /// Options, meaningful only for choice questions.
    #[serde(default)]
    pub options: Vec<OptionRecord>,
}

fn required_by_default() -> bool {
    true
}

impl QuestionRecord {
    /// Create a required record with the given tag and no options.
    pub fn new(text: impl Into<String>, question_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            question_type: question_type.into(),
            required: true,
            options: Vec::new(),
        }
    }

    /// Create a required choice record with the given option texts.
    pub fn choice<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(OptionRecord::new).collect(),
            ..Self::new(text, QuestionType::Choice.tag())
        }
    }

    /// Set whether an answer is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Resolve the type tag, if it is one we know.
    pub fn parsed_type(&self) -> Option<QuestionType> {
        QuestionType::from_tag(&self.question_type)
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            text: question.text().to_string(),
            question_type: question.question_type().tag().to_string(),
            required: question.is_required(),
            options: question.options().iter().map(OptionRecord::from).collect(),
        }
    }
}

/// A stored option of a choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    /// The option label.
    #[serde(rename = "option_text", default)]
    pub text: String,
}

impl OptionRecord {
    /// Create an option record.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&ChoiceOption> for OptionRecord {
    fn from(option: &ChoiceOption) -> Self {
        Self::new(option.text.clone())
    }
}
