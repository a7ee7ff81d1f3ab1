//! Integration tests for survey-draft-preview

use survey_draft::{
    DraftEditor, OptionList, PromptDescriptor, QuestionCollection, QuestionKind, SurveyMetadata,
    TestGenerator,
};
use survey_draft_preview::{
    HtmlOptions, PreviewOptions, RenderedInput, project, project_draft, project_with_options,
    to_html, to_html_with_options,
};

fn sample() -> (SurveyMetadata, QuestionCollection) {
    let metadata = SurveyMetadata::new("Lunch").with_description("Friday menu");
    let mut questions = QuestionCollection::new();
    questions.push(
        "Which dish?",
        QuestionKind::Choice(OptionList::from_texts(["Soup", ""])),
    );
    questions.push("Anything else?", QuestionKind::OpenText);
    questions.push("", QuestionKind::Rating);
    let happy = questions.push("Happy?", QuestionKind::Boolean);
    questions.set_required(happy, false);
    (metadata, questions)
}

#[test]
fn test_projection_is_pure_and_idempotent() {
    let (metadata, questions) = sample();
    let before = questions.clone();

    let first = project(&metadata, &questions);
    let second = project(&metadata, &questions);

    assert_eq!(first, second);
    assert_eq!(questions, before);
}

#[test]
fn test_header_and_numbers() {
    let (metadata, questions) = sample();
    let model = project(&metadata, &questions);

    assert_eq!(model.title, "Lunch");
    assert_eq!(model.description.as_deref(), Some("Friday menu"));
    assert_eq!(model.question_count, 4);
    assert_eq!(model.estimated_minutes, 2);
    assert!(model.empty_message.is_none());

    let numbers: Vec<_> = model.questions.iter().map(|q| q.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(model.questions[0].type_label, "Multiple choice");
    assert!(!model.questions[3].required);
}

#[test]
fn test_inputs_per_type() {
    let (metadata, questions) = sample();
    let model = project(&metadata, &questions);

    let RenderedInput::Choice { selectors } = &model.questions[0].input else {
        panic!("expected choice");
    };
    assert_eq!(selectors[0].label, "Soup");
    assert_eq!(selectors[1].label, "Option 2");

    assert!(matches!(
        &model.questions[1].input,
        RenderedInput::OpenText { rows: 4, .. }
    ));

    let rating = &model.questions[2];
    assert!(rating.text_is_placeholder);
    assert_eq!(rating.text, "Untitled question");
    let RenderedInput::Rating { scale, .. } = &rating.input else {
        panic!("expected rating");
    };
    assert_eq!(scale.len(), 5);

    let RenderedInput::Boolean { yes, no } = &model.questions[3].input else {
        panic!("expected boolean");
    };
    assert_eq!((yes.label.as_str(), no.label.as_str()), ("Yes", "No"));
    assert!(yes.disabled && no.disabled);
}

#[test]
fn test_empty_collection_preview() {
    let model = project(&SurveyMetadata::default(), &QuestionCollection::new());

    assert!(model.is_empty());
    assert_eq!(model.title, "Untitled survey");
    assert_eq!(model.description, None);
    assert_eq!(model.estimated_minutes, 0);
    assert!(model.empty_message.is_some());
}

#[test]
fn test_custom_labels() {
    let (metadata, questions) = sample();
    let options = PreviewOptions::new()
        .with_boolean_labels("Oui", "Non")
        .with_option_label("Choix");
    let model = project_with_options(&metadata, &questions, &options);

    let RenderedInput::Choice { selectors } = &model.questions[0].input else {
        panic!("expected choice");
    };
    assert_eq!(selectors[1].label, "Choix 2");
}

#[test]
fn test_unknown_stored_type_renders_placeholder() {
    let draft = example_drafts::team_pulse_with_foreign_type();
    let model = project_draft(&draft);

    let foreign = &model.questions[1];
    assert_eq!(foreign.id, None);
    assert_eq!(
        foreign.input,
        RenderedInput::Unsupported {
            tag: "ranking".into(),
            message: "Unsupported question type".into(),
        }
    );
    assert_eq!(model.question_count, 5);
}

#[test]
fn test_stored_and_live_previews_agree() {
    let draft = example_drafts::team_pulse();
    let mut editor = DraftEditor::new();
    editor
        .generate(
            &TestGenerator::returning(draft.clone()),
            &PromptDescriptor::new("Team pulse", "Monthly engagement check-in"),
        )
        .unwrap();

    let live = project(editor.metadata(), editor.questions());
    let stored = project_draft(&draft);

    let inputs = |model: &survey_draft_preview::RenderModel| {
        model
            .questions
            .iter()
            .map(|q| q.input.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(inputs(&live), inputs(&stored));
}

#[test]
fn test_html_is_read_only_and_escaped() {
    let metadata = SurveyMetadata::new("Fish & <Chips>");
    let mut questions = QuestionCollection::new();
    questions.push("Salt?", QuestionKind::Boolean);

    let html = to_html(&project(&metadata, &questions));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
    assert!(html.contains("name=\"question_1\" disabled"));
    assert!(html.contains("disabled>Submit (preview)</button>"));
}

#[test]
fn test_html_fragment_for_empty_survey() {
    let model = project(&SurveyMetadata::default(), &QuestionCollection::new());
    let options = HtmlOptions::new().full_document(false).with_class_prefix("s");
    let html = to_html_with_options(&model, &options);

    assert!(html.starts_with("<form class=\"s-form\">"));
    assert!(html.contains("class=\"s-empty\""));
    assert!(!html.contains("<html"));
}

#[test]
fn test_model_serializes_for_hosts() {
    let (metadata, questions) = sample();
    let json = serde_json::to_value(project(&metadata, &questions)).unwrap();

    assert_eq!(json["questions"][0]["input"]["kind"], "choice");
    assert_eq!(json["questions"][0]["group"], "question_1");
    assert_eq!(json["questions"][3]["input"]["kind"], "boolean");
}
