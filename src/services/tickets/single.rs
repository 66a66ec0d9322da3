use rand::Rng;

use super::section_index::SectionIndex;
use super::selection::{pick_random, pick_random_excluding, pick_random_sections, Selection};
use crate::db::models::ExamQuestion;

/// The caller guarantees the pool holds at least `count` questions.
pub(crate) fn compose_ticket<'a, R: Rng + ?Sized>(
    index: &SectionIndex<'a>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExamQuestion> {
    let mut selection = Selection::with_capacity(count);
    let section_count = index.section_count();

    if count >= section_count {
        for section in index.sections() {
            match pick_random(index.questions_in(section), rng) {
                Some(question) => {
                    selection.push(question);
                }
                None => tracing::warn!(section = %section, "Skipping empty section"),
            }
        }

        let remaining = count.saturating_sub(selection.len());
        if remaining > 0 {
            let fill = pick_random_excluding(index.pool(), remaining, &selection, rng);
            if fill.len() < remaining {
                tracing::warn!(
                    requested = remaining,
                    available = fill.len(),
                    "Question pool exhausted during random fill"
                );
            }
            selection.extend(fill);
        }
    } else {
        for section in pick_random_sections(index.sections(), count, rng) {
            match pick_random(index.questions_in(section), rng) {
                Some(question) => {
                    selection.push(question);
                }
                None => tracing::warn!(section = %section, "Skipping empty section"),
            }
        }
    }

    tracing::debug!(
        pool_size = index.question_count(),
        sections = section_count,
        requested = count,
        selected = selection.len(),
        coverage_first = count >= section_count,
        "Composed ticket"
    );

    selection.into_shuffled(rng)
}
