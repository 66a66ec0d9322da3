use serde::{Deserialize, Serialize};

/// A question row of one course, as handed over by the question repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub id: i64,
    pub number: i32,
    pub section: String,
    pub question: String,
}

/// Consumer-facing projection of an [`ExamQuestion`]; carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: i32,
    pub section: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub number: usize,
    pub questions: Vec<Question>,
}

impl From<&ExamQuestion> for Question {
    fn from(source: &ExamQuestion) -> Self {
        Self {
            number: source.number,
            section: source.section.clone(),
            question: source.question.clone(),
        }
    }
}
