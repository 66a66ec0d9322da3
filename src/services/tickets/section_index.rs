use std::collections::HashMap;

use crate::db::models::ExamQuestion;

/// Section labels keep first-appearance order; questions keep input order.
#[derive(Debug)]
pub(crate) struct SectionIndex<'a> {
    sections: Vec<&'a str>,
    by_section: HashMap<&'a str, Vec<&'a ExamQuestion>>,
    pool: &'a [ExamQuestion],
}

impl<'a> SectionIndex<'a> {
    pub(crate) fn build(questions: &'a [ExamQuestion]) -> Self {
        let mut sections = Vec::new();
        let mut by_section: HashMap<&'a str, Vec<&'a ExamQuestion>> = HashMap::new();

        for question in questions {
            let label = question.section.as_str();
            by_section
                .entry(label)
                .or_insert_with(|| {
                    sections.push(label);
                    Vec::new()
                })
                .push(question);
        }

        Self { sections, by_section, pool: questions }
    }

    pub(crate) fn sections(&self) -> &[&'a str] {
        &self.sections
    }

    pub(crate) fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub(crate) fn question_count(&self) -> usize {
        self.pool.len()
    }

    pub(crate) fn questions_in(&self, section: &str) -> &[&'a ExamQuestion] {
        self.by_section.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn pool(&self) -> &'a [ExamQuestion] {
        self.pool
    }
}
