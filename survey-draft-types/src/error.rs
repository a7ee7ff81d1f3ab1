/// Error type for turning stored records into live questions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// A record carries a type tag no question kind corresponds to.
    #[error("Unknown question type '{tag}' for question {}", .index + 1)]
    UnknownQuestionType {
        /// 0-based position of the offending record.
        index: usize,
        /// The tag as stored.
        tag: String,
    },
}

impl ImportError {
    /// Position of the offending record.
    pub fn index(&self) -> usize {
        match self {
            Self::UnknownQuestionType { index, .. } => *index,
        }
    }
}
