use rand::Rng;

use super::section_index::SectionIndex;
use super::selection::{least_used, least_used_excluding, pick_random_sections, Selection};
use super::usage::UsageCounter;
use super::into_ticket;
use crate::db::models::{ExamQuestion, Ticket};

/// Every least-used step sees the counts left by the tickets before it.
pub(crate) fn compose_batch<R: Rng + ?Sized>(
    index: &SectionIndex<'_>,
    ticket_count: usize,
    per_ticket: usize,
    rng: &mut R,
) -> Vec<Ticket> {
    let mut usage = UsageCounter::new();
    let mut tickets = Vec::with_capacity(ticket_count);

    for number in 1..=ticket_count {
        let questions = compose_balanced(index, per_ticket, &usage, rng);
        usage.record(&questions);
        tickets.push(into_ticket(number, &questions));
    }

    tracing::debug!(
        pool_size = index.question_count(),
        sections = index.section_count(),
        tickets = ticket_count,
        per_ticket,
        "Composed ticket batch"
    );

    tickets
}

fn compose_balanced<'a, R: Rng + ?Sized>(
    index: &SectionIndex<'a>,
    count: usize,
    usage: &UsageCounter,
    rng: &mut R,
) -> Vec<&'a ExamQuestion> {
    let mut selection = Selection::with_capacity(count);

    if count >= index.section_count() {
        for section in index.sections() {
            push_least_used(&mut selection, index, section, usage);
        }

        let remaining = count.saturating_sub(selection.len());
        if remaining > 0 {
            let fill = least_used_excluding(index.pool(), remaining, &selection, usage);
            if fill.len() < remaining {
                tracing::warn!(
                    requested = remaining,
                    available = fill.len(),
                    "Question pool exhausted during least-used fill"
                );
            }
            selection.extend(fill);
        }
    } else {
        for section in pick_random_sections(index.sections(), count, rng) {
            push_least_used(&mut selection, index, section, usage);
        }
    }

    selection.into_shuffled(rng)
}

fn push_least_used<'a>(
    selection: &mut Selection<'a>,
    index: &SectionIndex<'a>,
    section: &str,
    usage: &UsageCounter,
) {
    match least_used(index.questions_in(section), usage) {
        Some(question) => {
            selection.push(question);
        }
        None => tracing::warn!(section = %section, "Skipping empty section"),
    }
}
