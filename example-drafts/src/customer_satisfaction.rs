//! A draft shaped like a generation-service response, using its tag aliases.

use survey_draft::{QuestionRecord, SurveyDraft};

pub fn customer_satisfaction() -> SurveyDraft {
    SurveyDraft::new(
        "Customer satisfaction",
        vec![
            QuestionRecord {
                question_type: "single_choice".into(),
                ..QuestionRecord::choice("Have you used our product before?", ["Yes", "Not yet"])
            },
            QuestionRecord {
                question_type: "single_choice".into(),
                ..QuestionRecord::choice(
                    "How would you rate our service quality?",
                    ["Very good", "Good", "Average", "Poor"],
                )
            },
            QuestionRecord::choice(
                "When do you usually use our product?",
                ["Early morning", "Midday", "Evening", "Weekends", "No fixed time"],
            )
            .with_required(false),
            QuestionRecord::new("Did you run into any difficulties?", "text").with_required(false),
            QuestionRecord::new("Would you recommend us to a friend?", "rating"),
            QuestionRecord::new("Are you a loyalty programme member?", "boolean_"),
        ],
    )
    .with_description("Suggested from the prompt: quarterly customer feedback")
}
