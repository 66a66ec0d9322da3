use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::Ticket;

pub const DEFAULT_RANDOM_TICKET_QUESTIONS: usize = 10;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TicketGenerationRequest {
    #[serde(alias = "questionsPerTicket")]
    #[validate(range(min = 1, max = 50, message = "questions per ticket must be between 1 and 50"))]
    pub questions_per_ticket: usize,
    #[serde(alias = "ticketCount")]
    #[validate(range(min = 1, max = 100, message = "ticket count must be between 1 and 100"))]
    pub ticket_count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RandomTicketQuery {
    #[serde(default = "default_random_questions")]
    #[validate(range(min = 1, max = 50, message = "questions count must be between 1 and 50"))]
    pub questions: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RandomTicketResponse {
    pub ticket: Ticket,
}

fn default_random_questions() -> usize {
    DEFAULT_RANDOM_TICKET_QUESTIONS
}
