use serde::Serialize;
use survey_draft::QuestionId;

/// Read-only rendering of a survey draft.
///
/// Built by [`project`](crate::project); hosts display it and never write
/// back through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// Survey title, or the untitled fallback.
    pub title: String,

    /// Survey description, omitted when blank.
    pub description: Option<String>,

    /// Number of questions.
    pub question_count: usize,

    /// Estimated minutes to complete the survey.
    pub estimated_minutes: u32,

    /// Questions in display order.
    pub questions: Vec<RenderedQuestion>,

    /// Message shown instead of questions when there are none.
    pub empty_message: Option<String>,
}

impl RenderModel {
    /// Check if the preview shows no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One question as shown in the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedQuestion {
    /// 1-based display number.
    pub number: usize,

    /// Question id, absent for stored records that have none.
    pub id: Option<QuestionId>,

    /// Badge naming the question type.
    pub type_label: String,

    /// Question text, or the untitled fallback.
    pub text: String,

    /// Whether `text` is the fallback rather than the question's own text.
    pub text_is_placeholder: bool,

    /// Whether the required marker is shown.
    pub required: bool,

    /// Name shared by every selector of this question.
    pub group: String,

    /// The disabled answer control.
    pub input: RenderedInput,
}

/// The answer control of a previewed question. Every control is disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedInput {
    /// Mutually exclusive selectors, one per option.
    Choice { selectors: Vec<Selector> },

    /// Multi-line text area.
    OpenText { placeholder: String, rows: u32 },

    /// Fixed 1-5 scale.
    Rating {
        scale: Vec<Selector>,
        low_label: String,
        high_label: String,
    },

    /// Fixed yes/no pair.
    Boolean { yes: Selector, no: Selector },

    /// Placeholder for a stored type tag no renderer knows.
    Unsupported { tag: String, message: String },
}

/// One disabled, mutually exclusive selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Text shown next to the selector.
    pub label: String,

    /// Whether `label` is a generated fallback.
    pub label_is_placeholder: bool,

    /// Always `true` in a preview.
    pub disabled: bool,
}

impl Selector {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            label_is_placeholder: false,
            disabled: true,
        }
    }

    pub(crate) fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label_is_placeholder: true,
            ..Self::new(label)
        }
    }
}
