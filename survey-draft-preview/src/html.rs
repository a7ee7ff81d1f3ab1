//! HTML rendering of a [`RenderModel`].
//!
//! Produces a read-only form: every control is disabled and the submit
//! button cannot be pressed.

use crate::model::{RenderModel, RenderedInput, RenderedQuestion, Selector};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            include_styles: true,
            full_document: true,
            class_prefix: "preview".to_string(),
        }
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render a preview as a complete HTML document with default styling.
pub fn to_html(model: &RenderModel) -> String {
    to_html_with_options(model, &HtmlOptions::new())
}

/// Render a preview as HTML with custom options.
pub fn to_html_with_options(model: &RenderModel, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&model.title)));

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));

    // Header
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-title\">{}</h1>\n",
        escape_html(&model.title)
    ));
    if let Some(description) = &model.description {
        html.push_str(&format!(
            "  <p class=\"{prefix}-description\">{}</p>\n",
            escape_html(description)
        ));
    }
    html.push_str(&format!(
        "  <div class=\"{prefix}-meta\">{} question(s) &middot; about {} min</div>\n",
        model.question_count, model.estimated_minutes
    ));

    // Questions
    if let Some(message) = &model.empty_message {
        html.push_str(&format!(
            "  <div class=\"{prefix}-empty\">{}</div>\n",
            escape_html(message)
        ));
    } else {
        html.push_str(&format!("  <div class=\"{prefix}-questions\">\n"));
        for question in &model.questions {
            html.push_str(&generate_question(question, prefix));
        }
        html.push_str("  </div>\n");
    }

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\" disabled>Submit (preview)</button>\n"
    ));
    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single question.
fn generate_question(question: &RenderedQuestion, prefix: &str) -> String {
    let ind = "    ";
    let group = &question.group;
    let mut html = String::new();

    html.push_str(&format!(
        "{ind}<fieldset class=\"{prefix}-question\" disabled>\n"
    ));
    html.push_str(&format!(
        "{ind}  <legend><span class=\"{prefix}-number\">{}</span> <span class=\"{prefix}-badge\">{}</span></legend>\n",
        question.number,
        escape_html(&question.type_label)
    ));

    let placeholder_class = if question.text_is_placeholder {
        format!(" {prefix}-placeholder")
    } else {
        String::new()
    };
    html.push_str(&format!(
        "{ind}  <h3 class=\"{prefix}-text{placeholder_class}\">{}</h3>\n",
        escape_html(&question.text)
    ));
    if question.required {
        html.push_str(&format!(
            "{ind}  <span class=\"{prefix}-required\">* Required</span>\n"
        ));
    }

    match &question.input {
        RenderedInput::Choice { selectors } => {
            for (idx, selector) in selectors.iter().enumerate() {
                html.push_str(&radio(selector, group, &format!("{group}-{idx}"), prefix));
            }
        }

        RenderedInput::OpenText { placeholder, rows } => {
            html.push_str(&format!(
                "{ind}  <textarea id=\"{group}\" name=\"{group}\" rows=\"{rows}\" placeholder=\"{}\" class=\"{prefix}-textarea\" disabled></textarea>\n",
                escape_html(placeholder)
            ));
        }

        RenderedInput::Rating {
            scale,
            low_label,
            high_label,
        } => {
            html.push_str(&format!("{ind}  <div class=\"{prefix}-rating\">\n"));
            for (idx, selector) in scale.iter().enumerate() {
                html.push_str(&radio(selector, group, &format!("{group}-{idx}"), prefix));
            }
            html.push_str(&format!(
                "{ind}    <span class=\"{prefix}-rating-low\">{}</span>\n",
                escape_html(low_label)
            ));
            html.push_str(&format!(
                "{ind}    <span class=\"{prefix}-rating-high\">{}</span>\n",
                escape_html(high_label)
            ));
            html.push_str(&format!("{ind}  </div>\n"));
        }

        RenderedInput::Boolean { yes, no } => {
            html.push_str(&radio(yes, group, &format!("{group}-yes"), prefix));
            html.push_str(&radio(no, group, &format!("{group}-no"), prefix));
        }

        RenderedInput::Unsupported { message, .. } => {
            html.push_str(&format!(
                "{ind}  <div class=\"{prefix}-unsupported\">{}</div>\n",
                escape_html(message)
            ));
        }
    }

    html.push_str(&format!("{ind}</fieldset>\n"));
    html
}

/// Generate one disabled radio button with its label.
fn radio(selector: &Selector, group: &str, id: &str, prefix: &str) -> String {
    let ind = "      ";
    let placeholder_class = if selector.label_is_placeholder {
        format!(" {prefix}-placeholder")
    } else {
        String::new()
    };
    let disabled = if selector.disabled { " disabled" } else { "" };

    format!(
        "{ind}<div class=\"{prefix}-radio-option\">\n\
         {ind}  <input type=\"radio\" id=\"{id}\" name=\"{group}\"{disabled}>\n\
         {ind}  <label for=\"{id}\" class=\"{prefix}-label{placeholder_class}\">{}</label>\n\
         {ind}</div>\n",
        escape_html(&selector.label)
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 640px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-description, .{prefix}-meta {{
      color: #555;
    }}
    .{prefix}-empty {{
      margin: 2rem 0;
      text-align: center;
      color: #777;
    }}
    .{prefix}-question {{
      margin: 1rem 0;
      padding: 1rem;
    }}
    .{prefix}-badge {{
      font-size: 0.8rem;
      padding: 0.1rem 0.4rem;
      background: #eef;
    }}
    .{prefix}-placeholder {{
      color: #999;
      font-style: italic;
    }}
    .{prefix}-required {{
      color: #b00;
      font-size: 0.8rem;
    }}
    .{prefix}-radio-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-textarea {{
      width: 100%;
      box-sizing: border-box;
    }}
    .{prefix}-rating {{
      display: flex;
      flex-wrap: wrap;
      gap: 0.5rem;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
  </style>
"#
    )
}
