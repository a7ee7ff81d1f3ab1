//! Projection of a survey draft into a [`RenderModel`].
//!
//! Projection is pure: it only reads its inputs, and projecting the same
//! input twice yields equal models.

use survey_draft::{
    QuestionCollection, QuestionId, QuestionRecord, QuestionType, SurveyDraft, SurveyMetadata,
};

use crate::model::{RenderModel, RenderedInput, RenderedQuestion, Selector};

/// Lowest and highest point of the rating scale.
pub const RATING_SCALE: std::ops::RangeInclusive<u8> = 1..=5;

/// Options for preview projection.
///
/// Holds every user-facing label the preview may show.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Title shown when the survey title is blank.
    pub untitled_survey: String,
    /// Text shown when a question's text is blank.
    pub untitled_question: String,
    /// Prefix of the fallback label for a blank option, followed by its 1-based position.
    pub option_label: String,
    /// Placeholder of the open-text area.
    pub open_text_placeholder: String,
    /// Rows of the open-text area.
    pub open_text_rows: u32,
    /// Label of the affirmative boolean selector.
    pub yes_label: String,
    /// Label of the negative boolean selector.
    pub no_label: String,
    /// Label under the low end of the rating scale.
    pub rating_low_label: String,
    /// Label under the high end of the rating scale.
    pub rating_high_label: String,
    /// Text shown for a stored type tag no renderer knows.
    pub unsupported_message: String,
    /// Message shown when there are no questions.
    pub empty_message: String,
    /// Estimated answering time per question, in minutes.
    pub minutes_per_question: f64,
}

impl PreviewOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self {
            untitled_survey: "Untitled survey".to_string(),
            untitled_question: "Untitled question".to_string(),
            option_label: "Option".to_string(),
            open_text_placeholder: "Type your answer...".to_string(),
            open_text_rows: 4,
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            rating_low_label: "Very dissatisfied".to_string(),
            rating_high_label: "Very satisfied".to_string(),
            unsupported_message: "Unsupported question type".to_string(),
            empty_message: "No questions yet. Add a question to preview the survey.".to_string(),
            minutes_per_question: 0.5,
        }
    }

    /// Set the labels of the boolean selectors.
    pub fn with_boolean_labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }

    /// Set the fallback option label prefix.
    pub fn with_option_label(mut self, label: impl Into<String>) -> Self {
        self.option_label = label.into();
        self
    }

    /// Set the estimated answering time per question.
    pub fn with_minutes_per_question(mut self, minutes: f64) -> Self {
        self.minutes_per_question = minutes;
        self
    }

    /// Set the title shown for an untitled survey.
    pub fn with_untitled_survey(mut self, title: impl Into<String>) -> Self {
        self.untitled_survey = title.into();
        self
    }

    /// Badge text for a question type.
    pub fn type_label(&self, question_type: QuestionType) -> &'static str {
        match question_type {
            QuestionType::Choice => "Multiple choice",
            QuestionType::OpenText => "Open-ended",
            QuestionType::Rating => "Rating",
            QuestionType::Boolean => "Yes/No",
        }
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Project live questions with default options.
pub fn project<I>(metadata: &SurveyMetadata, questions: &QuestionCollection<I>) -> RenderModel {
    project_with_options(metadata, questions, &PreviewOptions::default())
}

/// Project live questions.
pub fn project_with_options<I>(
    metadata: &SurveyMetadata,
    questions: &QuestionCollection<I>,
    options: &PreviewOptions,
) -> RenderModel {
    let rendered = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let texts: Vec<&str> =
                question.options().iter().map(|o| o.text.as_str()).collect();
            render_question(
                index + 1,
                Some(question.id()),
                question.text(),
                question.is_required(),
                Some(question.question_type()),
                question.question_type().tag(),
                &texts,
                options,
            )
        })
        .collect();

    assemble(metadata, rendered, options)
}

/// Project a stored draft, whose type tags may be unknown.
pub fn project_draft(draft: &SurveyDraft) -> RenderModel {
    project_draft_with_options(draft, &PreviewOptions::default())
}

/// Project a stored draft with custom options.
pub fn project_draft_with_options(draft: &SurveyDraft, options: &PreviewOptions) -> RenderModel {
    let rendered = draft
        .questions
        .iter()
        .enumerate()
        .map(|(index, record)| render_record(index + 1, record, options))
        .collect();

    assemble(&draft.metadata(), rendered, options)
}

fn render_record(
    number: usize,
    record: &QuestionRecord,
    options: &PreviewOptions,
) -> RenderedQuestion {
    let texts: Vec<&str> = record.options.iter().map(|o| o.text.as_str()).collect();
    let parsed = record.parsed_type();
    if parsed.is_none() {
        tracing::debug!(
            number,
            tag = %record.question_type,
            "Previewing unsupported question type"
        );
    }
    render_question(
        number,
        None,
        &record.text,
        record.required,
        parsed,
        &record.question_type,
        &texts,
        options,
    )
}

fn assemble(
    metadata: &SurveyMetadata,
    questions: Vec<RenderedQuestion>,
    options: &PreviewOptions,
) -> RenderModel {
    let title = if metadata.title.is_empty() {
        options.untitled_survey.clone()
    } else {
        metadata.title.clone()
    };
    let description =
        (!metadata.description.is_empty()).then(|| metadata.description.clone());
    let question_count = questions.len();
    let empty_message = questions.is_empty().then(|| options.empty_message.clone());

    RenderModel {
        title,
        description,
        question_count,
        estimated_minutes: estimated_minutes(question_count, options.minutes_per_question),
        questions,
        empty_message,
    }
}

fn estimated_minutes(question_count: usize, minutes_per_question: f64) -> u32 {
    (question_count as f64 * minutes_per_question).ceil().max(0.0) as u32
}

#[allow(clippy::too_many_arguments)]
fn render_question(
    number: usize,
    id: Option<QuestionId>,
    text: &str,
    required: bool,
    question_type: Option<QuestionType>,
    tag: &str,
    option_texts: &[&str],
    options: &PreviewOptions,
) -> RenderedQuestion {
    let group = match id {
        Some(id) => format!("question_{id}"),
        None => format!("record_{number}"),
    };
    let text_is_placeholder = text.is_empty();
    let text = if text_is_placeholder {
        options.untitled_question.clone()
    } else {
        text.to_string()
    };

    let (type_label, input) = match question_type {
        Some(question_type) => (
            options.type_label(question_type).to_string(),
            render_input(question_type, option_texts, options),
        ),
        None => (
            tag.to_string(),
            RenderedInput::Unsupported {
                tag: tag.to_string(),
                message: options.unsupported_message.clone(),
            },
        ),
    };

    RenderedQuestion {
        number,
        id,
        type_label,
        text,
        text_is_placeholder,
        required,
        group,
        input,
    }
}

fn render_input(
    question_type: QuestionType,
    option_texts: &[&str],
    options: &PreviewOptions,
) -> RenderedInput {
    match question_type {
        QuestionType::Choice => RenderedInput::Choice {
            selectors: option_texts
                .iter()
                .enumerate()
                .map(|(position, text)| {
                    if text.is_empty() {
                        let label = format!("{} {}", options.option_label, position + 1);
                        Selector::placeholder(label)
                    } else {
                        Selector::new(*text)
                    }
                })
                .collect(),
        },
        QuestionType::OpenText => RenderedInput::OpenText {
            placeholder: options.open_text_placeholder.clone(),
            rows: options.open_text_rows,
        },
        QuestionType::Rating => RenderedInput::Rating {
            scale: RATING_SCALE.map(|point| Selector::new(point.to_string())).collect(),
            low_label: options.rating_low_label.clone(),
            high_label: options.rating_high_label.clone(),
        },
        QuestionType::Boolean => RenderedInput::Boolean {
            yes: Selector::new(options.yes_label.clone()),
            no: Selector::new(options.no_label.clone()),
        },
    }
}
