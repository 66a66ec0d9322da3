use std::collections::HashMap;

use crate::db::models::ExamQuestion;

#[derive(Debug, Default)]
pub(crate) struct UsageCounter {
    counts: HashMap<i64, u32>,
}

impl UsageCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self, question: &ExamQuestion) -> u32 {
        self.counts.get(&question.id).copied().unwrap_or(0)
    }

    pub(crate) fn record(&mut self, placed: &[&ExamQuestion]) {
        for question in placed {
            *self.counts.entry(question.id).or_insert(0) += 1;
        }
    }
}
