use std::path::PathBuf;

use validator::Validate;

use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_environment, parse_output, parse_u64,
    parse_usize,
};
use super::types::{
    ConfigError, GenerationMode, GenerationSettings, InputSettings, OutputTarget,
    RuntimeSettings, Settings, TelemetrySettings,
};
use crate::schemas::ticket::{
    RandomTicketQuery, TicketGenerationRequest, DEFAULT_RANDOM_TICKET_QUESTIONS,
};
use crate::services::ticket_document::document_filename;
use crate::services::tickets::{MAX_TICKET_COUNT, MIN_TICKET_COUNT};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let environment =
            parse_environment(env_optional("TICKETS_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("TICKETS_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let questions_file = env_optional("TICKETS_QUESTIONS_FILE")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingValue("TICKETS_QUESTIONS_FILE"))?;
        let course_name = env_or_default("TICKETS_COURSE_NAME", "course");

        let seed =
            env_optional("TICKETS_SEED").map(|value| parse_u64("TICKETS_SEED", value)).transpose()?;

        let mode = match env_or_default("TICKETS_MODE", "document").to_lowercase().as_str() {
            "document" => GenerationMode::Document(TicketGenerationRequest {
                questions_per_ticket: parse_usize(
                    "TICKETS_QUESTIONS_PER_TICKET",
                    env_or_default("TICKETS_QUESTIONS_PER_TICKET", "10"),
                )?,
                ticket_count: parse_usize(
                    "TICKETS_TICKET_COUNT",
                    env_or_default("TICKETS_TICKET_COUNT", "1"),
                )?,
                seed,
            }),
            "random" => GenerationMode::Random(RandomTicketQuery {
                questions: parse_usize(
                    "TICKETS_QUESTIONS",
                    env_or_default(
                        "TICKETS_QUESTIONS",
                        &DEFAULT_RANDOM_TICKET_QUESTIONS.to_string(),
                    ),
                )?,
                seed,
            }),
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "TICKETS_MODE",
                    value: other.to_string(),
                })
            }
        };

        let output = match env_optional("TICKETS_OUTPUT") {
            Some(value) => parse_output(&value),
            None => match mode {
                GenerationMode::Document(_) => {
                    OutputTarget::File(PathBuf::from(document_filename(&course_name)))
                }
                GenerationMode::Random(_) => OutputTarget::Stdout,
            },
        };

        let log_level = env_or_default("TICKETS_LOG_LEVEL", "info");
        let json = env_optional("TICKETS_LOG_JSON")
            .map(|value| parse_bool(&value))
            .unwrap_or(environment.is_production());

        let settings = Self {
            runtime: RuntimeSettings { environment, strict_config },
            input: InputSettings { questions_file, course_name },
            output,
            generation: GenerationSettings { mode },
            telemetry: TelemetrySettings { log_level, json },
        };

        settings.validate()?;

        Ok(settings)
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    pub(crate) fn input(&self) -> &InputSettings {
        &self.input
    }

    pub(crate) fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub(crate) fn generation(&self) -> &GenerationSettings {
        &self.generation
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.generation.mode {
            GenerationMode::Document(request) => {
                if request.validate().is_err() {
                    let ticket_count_ok =
                        (MIN_TICKET_COUNT..=MAX_TICKET_COUNT).contains(&request.ticket_count);
                    let (field, value) = if ticket_count_ok {
                        ("TICKETS_QUESTIONS_PER_TICKET", request.questions_per_ticket)
                    } else {
                        ("TICKETS_TICKET_COUNT", request.ticket_count)
                    };
                    return Err(ConfigError::InvalidValue { field, value: value.to_string() });
                }
            }
            GenerationMode::Random(query) => {
                if query.validate().is_err() {
                    return Err(ConfigError::InvalidValue {
                        field: "TICKETS_QUESTIONS",
                        value: query.questions.to_string(),
                    });
                }
            }
        }

        if !self.runtime.strict_config {
            return Ok(());
        }

        if !self.input.questions_file.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "TICKETS_QUESTIONS_FILE",
                value: self.input.questions_file.display().to_string(),
            });
        }

        Ok(())
    }
}
