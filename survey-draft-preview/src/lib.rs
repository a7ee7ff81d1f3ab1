//! Read-only preview of survey drafts.
//!
//! [`project`] turns the editor's metadata and questions into a
//! [`RenderModel`]; [`project_draft`] does the same for a stored draft whose
//! type tags may be unknown. [`to_html`] renders a model as a disabled HTML
//! form.
//!
//! ```rust
//! use survey_draft::{DraftEditor, QuestionType};
//! use survey_draft_preview::{RenderedInput, project};
//!
//! let mut editor = DraftEditor::new();
//! let id = editor.add_question().unwrap();
//! editor.change_type(id, QuestionType::Boolean);
//!
//! let model = project(editor.metadata(), editor.questions());
//! assert_eq!(model.title, "Untitled survey");
//! assert!(matches!(model.questions[0].input, RenderedInput::Boolean { .. }));
//! ```

mod html;
pub use html::{HtmlOptions, to_html, to_html_with_options};

mod model;
pub use model::{RenderModel, RenderedInput, RenderedQuestion, Selector};

mod projector;
pub use projector::{
    PreviewOptions, RATING_SCALE, project, project_draft, project_draft_with_options,
    project_with_options,
};
