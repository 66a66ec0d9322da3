//! Plain-text rendering of generated tickets.

use std::fmt::Write as _;

use crate::db::models::Ticket;

const TICKET_HEADER: &str = "Билет №";

/// A ticket recovered from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBlock {
    pub number: Option<usize>,
    pub questions: Vec<String>,
}

/// Renders tickets one block each, questions re-numbered from 1 inside every
/// block, blocks separated by a single blank line.
pub fn render_tickets(tickets: &[Ticket]) -> String {
    let mut output = String::new();

    for (index, ticket) in tickets.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "{TICKET_HEADER} {}", ticket.number);
        for (position, question) in ticket.questions.iter().enumerate() {
            let _ = writeln!(output, "{}. {}", position + 1, single_line(&question.question));
        }
    }

    output
}

/// Splits a rendered document back into ticket blocks on blank lines.
pub fn parse_ticket_blocks(document: &str) -> Vec<TicketBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(parse_block(&current));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(parse_block(&current));
    }

    blocks
}

/// `tickets_<slug>.txt` for a course name.
pub fn document_filename(course_name: &str) -> String {
    let slug = course_name.trim().to_lowercase().replace([' ', '/'], "_");
    format!("tickets_{slug}.txt")
}

fn parse_block(lines: &[&str]) -> TicketBlock {
    let (number, body) = match lines.split_first() {
        Some((first, rest)) => match first.strip_prefix(TICKET_HEADER) {
            Some(tail) => (tail.trim().parse::<usize>().ok(), rest),
            None => (None, lines),
        },
        None => (None, lines),
    };

    let questions = body
        .iter()
        .map(|line| match line.split_once(". ") {
            Some((position, text)) if position.chars().all(|ch| ch.is_ascii_digit()) => {
                text.to_string()
            }
            _ => line.to_string(),
        })
        .collect();

    TicketBlock { number, questions }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
