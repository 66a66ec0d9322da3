use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamQuestionImport {
    pub number: i32,
    #[validate(length(min = 1, message = "section must not be empty"))]
    pub section: String,
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct ExamQuestionImportFile {
    pub questions: Vec<ExamQuestionImport>,
}

impl ExamQuestionImport {
    pub(crate) fn trimmed(self) -> Self {
        Self {
            number: self.number,
            section: self.section.trim().to_string(),
            question: self.question.trim().to_string(),
        }
    }
}
