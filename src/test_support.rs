use crate::db::models::ExamQuestion;

pub(crate) fn question(id: i64, section: &str, text: &str) -> ExamQuestion {
    ExamQuestion {
        id,
        number: i32::try_from(id).unwrap_or(i32::MAX),
        section: section.to_string(),
        question: text.to_string(),
    }
}

/// Builds a pool with `count` questions per section, ids assigned in order
/// and texts unique across the pool.
pub(crate) fn pool_with_sections(layout: &[(&str, usize)]) -> Vec<ExamQuestion> {
    let mut pool = Vec::new();
    let mut next_id = 1;
    for (section, count) in layout {
        for ordinal in 1..=*count {
            pool.push(ExamQuestion {
                id: next_id,
                number: ordinal as i32,
                section: section.to_string(),
                question: format!("{section} question {ordinal}"),
            });
            next_id += 1;
        }
    }
    pool
}
