use std::path::PathBuf;

use thiserror::Error;

use crate::schemas::ticket::{RandomTicketQuery, TicketGenerationRequest};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(super) runtime: RuntimeSettings,
    pub(super) input: InputSettings,
    pub(super) output: OutputTarget,
    pub(super) generation: GenerationSettings,
    pub(super) telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub(crate) struct RuntimeSettings {
    pub(crate) environment: Environment,
    pub(crate) strict_config: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct InputSettings {
    pub(crate) questions_file: PathBuf,
    pub(crate) course_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub(crate) struct GenerationSettings {
    pub(crate) mode: GenerationMode,
}

/// What one run produces: a downloadable batch document or a single
/// random ticket as JSON.
#[derive(Debug, Clone)]
pub(crate) enum GenerationMode {
    Document(TicketGenerationRequest),
    Random(RandomTicketQuery),
}

#[derive(Debug, Clone)]
pub(crate) struct TelemetrySettings {
    pub(crate) log_level: String,
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Environment {
    Development,
    Production,
    Staging,
    Test,
}

impl Environment {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Test => "test",
        }
    }

    pub(super) fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl GenerationMode {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Document(_) => "document",
            Self::Random(_) => "random",
        }
    }

    pub(crate) fn seed(&self) -> Option<u64> {
        match self {
            Self::Document(request) => request.seed,
            Self::Random(query) => query.seed,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("missing required setting {0}")]
    MissingValue(&'static str),
}
