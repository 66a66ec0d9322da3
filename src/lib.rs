pub(crate) mod core;
pub mod db;
pub mod schemas;
pub mod services;

#[cfg(test)]
mod test_support;

use std::fs;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::config::{GenerationMode, OutputTarget, Settings};
use crate::db::models::ExamQuestion;
use crate::core::telemetry;
use crate::schemas::ticket::RandomTicketResponse;
use crate::services::question_import::{import_questions, QuestionFileFormat};
use crate::services::{ticket_document, tickets};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;

    let input = settings.input();
    let format = QuestionFileFormat::from_path(&input.questions_file)?;
    let raw = fs::read_to_string(&input.questions_file).with_context(|| {
        format!("failed to read questions file: {}", input.questions_file.display())
    })?;
    let questions = import_questions(format, &raw).context("questions file has invalid format")?;

    tracing::info!(
        course = %input.course_name,
        questions = questions.len(),
        mode = settings.generation().mode.as_str(),
        environment = settings.runtime().environment.as_str(),
        "Question pool loaded"
    );

    let mode = &settings.generation().mode;
    let output = if let Some(seed) = mode.seed() {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_output(mode, &questions, &mut rng)?
    } else {
        let mut rng = rand::thread_rng();
        generate_output(mode, &questions, &mut rng)?
    };

    match settings.output() {
        OutputTarget::Stdout => print!("{output}"),
        OutputTarget::File(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = output.len(), "Output written");
        }
    }

    Ok(())
}

fn generate_output<R: Rng + ?Sized>(
    mode: &GenerationMode,
    questions: &[ExamQuestion],
    rng: &mut R,
) -> anyhow::Result<String> {
    match mode {
        GenerationMode::Document(request) => {
            let batch = tickets::generate_batch_with_rng(
                questions,
                request.ticket_count,
                request.questions_per_ticket,
                rng,
            )
            .context("failed to generate tickets")?;
            tracing::info!(ticket_count = batch.len(), "Tickets generated");
            Ok(ticket_document::render_tickets(&batch))
        }
        GenerationMode::Random(query) => {
            let ticket = tickets::generate_ticket_with_rng(questions, query.questions, rng)
                .context("failed to generate ticket")?;
            let mut body = serde_json::to_string_pretty(&RandomTicketResponse { ticket })?;
            body.push('\n');
            Ok(body)
        }
    }
}
