//! Exam-ticket generation.
//!
//! The engine works on the full question pool of one course, already loaded
//! by the caller, and never performs I/O. All working state (section index,
//! usage counter) is created per call, so concurrent callers do not affect
//! each other.

mod batch;
mod section_index;
mod selection;
mod single;
mod usage;

use rand::Rng;
use thiserror::Error;

use crate::db::models::{ExamQuestion, Question, Ticket};
use section_index::SectionIndex;

pub const MIN_QUESTIONS_PER_TICKET: usize = 1;
pub const MAX_QUESTIONS_PER_TICKET: usize = 50;
pub const MIN_TICKET_COUNT: usize = 1;
pub const MAX_TICKET_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("{field} must be between {min} and {max}")]
    InvalidRange { field: &'static str, min: usize, max: usize, value: usize },
    #[error("not enough questions: have {have}, need {need}")]
    InsufficientQuestions { have: usize, need: usize },
}

/// Generates one ticket of `count` questions using the thread-local RNG.
pub fn generate_ticket(questions: &[ExamQuestion], count: usize) -> Result<Ticket, TicketError> {
    generate_ticket_with_rng(questions, count, &mut rand::thread_rng())
}

pub fn generate_ticket_with_rng<R: Rng + ?Sized>(
    questions: &[ExamQuestion],
    count: usize,
    rng: &mut R,
) -> Result<Ticket, TicketError> {
    check_range("questions count", count, MIN_QUESTIONS_PER_TICKET, MAX_QUESTIONS_PER_TICKET)?;
    check_pool(questions, count)?;

    let index = SectionIndex::build(questions);
    let selected = single::compose_ticket(&index, count, rng);

    Ok(into_ticket(1, &selected))
}

/// Generates `ticket_count` tickets that reuse questions as little as the
/// pool allows, using the thread-local RNG.
pub fn generate_batch(
    questions: &[ExamQuestion],
    ticket_count: usize,
    per_ticket: usize,
) -> Result<Vec<Ticket>, TicketError> {
    generate_batch_with_rng(questions, ticket_count, per_ticket, &mut rand::thread_rng())
}

pub fn generate_batch_with_rng<R: Rng + ?Sized>(
    questions: &[ExamQuestion],
    ticket_count: usize,
    per_ticket: usize,
    rng: &mut R,
) -> Result<Vec<Ticket>, TicketError> {
    check_range("ticket count", ticket_count, MIN_TICKET_COUNT, MAX_TICKET_COUNT)?;
    check_range(
        "questions per ticket",
        per_ticket,
        MIN_QUESTIONS_PER_TICKET,
        MAX_QUESTIONS_PER_TICKET,
    )?;
    check_pool(questions, per_ticket)?;

    let index = SectionIndex::build(questions);
    Ok(batch::compose_batch(&index, ticket_count, per_ticket, rng))
}

fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), TicketError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TicketError::InvalidRange { field, min, max, value })
    }
}

fn check_pool(questions: &[ExamQuestion], need: usize) -> Result<(), TicketError> {
    if questions.len() < need {
        return Err(TicketError::InsufficientQuestions { have: questions.len(), need });
    }
    Ok(())
}

fn into_ticket(number: usize, selected: &[&ExamQuestion]) -> Ticket {
    Ticket { number, questions: selected.iter().map(|question| Question::from(*question)).collect() }
}
