mod parsing;
mod settings;
mod types;

pub(crate) use types::{GenerationMode, OutputTarget, Settings};
