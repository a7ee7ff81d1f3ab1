use survey_draft::{QuestionRecord, SurveyDraft};

/// A small, fully valid draft using canonical tags.
pub fn team_pulse() -> SurveyDraft {
    SurveyDraft::new(
        "Team pulse",
        vec![
            QuestionRecord::choice("How was your month?", ["Great", "Fine", "Rough"]),
            QuestionRecord::new("Rate your workload", "rating"),
            QuestionRecord::new("Do you feel heard?", "boolean"),
            QuestionRecord::new("Anything else?", "open_ended").with_required(false),
        ],
    )
}

/// Like [`team_pulse`], but with one question whose type no editor knows.
pub fn team_pulse_with_foreign_type() -> SurveyDraft {
    let mut draft = team_pulse();
    draft
        .questions
        .insert(1, QuestionRecord::new("Rank these perks", "ranking"));
    draft
}
