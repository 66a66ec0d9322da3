use std::path::Path;

use thiserror::Error;
use validator::Validate;

use crate::db::models::ExamQuestion;
use crate::schemas::exam_question::{ExamQuestionImport, ExamQuestionImportFile};

const CSV_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFileFormat {
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("only .json and .csv files are supported, got {0:?}")]
    UnsupportedFormat(String),
    #[error("invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read CSV file: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV file must contain header and at least one data row")]
    MissingCsvRows,
    #[error("CSV must contain columns: number,section,question. Row {row} has {columns} columns")]
    MissingColumns { row: usize, columns: usize },
    #[error("invalid number format in row {row}: {value:?}")]
    InvalidNumber { row: usize, value: String },
    #[error("invalid question {position}: {message}")]
    InvalidQuestion { position: usize, message: String },
    #[error("no questions found for import")]
    Empty,
}

impl QuestionFileFormat {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses a question file and assigns identities `1..=N` in file order.
pub fn import_questions(
    format: QuestionFileFormat,
    raw: &str,
) -> Result<Vec<ExamQuestion>, ImportError> {
    let entries = match format {
        QuestionFileFormat::Json => parse_json(raw)?,
        QuestionFileFormat::Csv => parse_csv(raw)?,
    };

    if entries.is_empty() {
        return Err(ImportError::Empty);
    }

    let mut questions = Vec::with_capacity(entries.len());
    for (offset, entry) in entries.into_iter().enumerate() {
        let entry = entry.trimmed();
        entry.validate().map_err(|err| ImportError::InvalidQuestion {
            position: offset + 1,
            message: err.to_string(),
        })?;

        questions.push(ExamQuestion {
            id: offset as i64 + 1,
            number: entry.number,
            section: entry.section,
            question: entry.question,
        });
    }

    tracing::debug!(count = questions.len(), ?format, "Parsed exam questions");
    Ok(questions)
}

fn parse_json(raw: &str) -> Result<Vec<ExamQuestionImport>, ImportError> {
    let file: ExamQuestionImportFile = serde_json::from_str(raw)?;
    Ok(file.questions)
}

fn parse_csv(raw: &str) -> Result<Vec<ExamQuestionImport>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut entries = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        // Header is row 1.
        let row = offset + 2;
        if record.len() < CSV_COLUMNS {
            return Err(ImportError::MissingColumns { row, columns: record.len() });
        }

        let raw_number = &record[0];
        let number = raw_number
            .parse::<i32>()
            .map_err(|_| ImportError::InvalidNumber { row, value: raw_number.to_string() })?;

        entries.push(ExamQuestionImport {
            number,
            section: record[1].to_string(),
            question: record[2].to_string(),
        });
    }

    if entries.is_empty() {
        return Err(ImportError::MissingCsvRows);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            QuestionFileFormat::from_path(Path::new("pool.JSON")).expect("json"),
            QuestionFileFormat::Json
        );
        assert_eq!(
            QuestionFileFormat::from_path(Path::new("dir/pool.csv")).expect("csv"),
            QuestionFileFormat::Csv
        );
        assert!(matches!(
            QuestionFileFormat::from_path(Path::new("pool.xlsx")),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            QuestionFileFormat::from_path(Path::new("pool")),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn json_import_assigns_ids_in_file_order() {
        let raw = r#"{"questions": [
            {"number": 1, "section": "Basics", "question": "What is Rust?"},
            {"number": 2, "section": " Ownership ", "question": " What is a borrow? "}
        ]}"#;

        let questions = import_questions(QuestionFileFormat::Json, raw).expect("questions");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
        assert_eq!(questions[1].section, "Ownership");
        assert_eq!(questions[1].question, "What is a borrow?");
    }

    #[test]
    fn json_without_questions_field_is_rejected() {
        let result = import_questions(QuestionFileFormat::Json, r#"{"items": []}"#);
        assert!(matches!(result, Err(ImportError::Json(_))));
    }

    #[test]
    fn json_with_empty_list_is_rejected() {
        let result = import_questions(QuestionFileFormat::Json, r#"{"questions": []}"#);
        assert!(matches!(result, Err(ImportError::Empty)));
    }

    #[test]
    fn blank_section_is_rejected_with_position() {
        let raw = r#"{"questions": [
            {"number": 1, "section": "A", "question": "q1"},
            {"number": 2, "section": "   ", "question": "q2"}
        ]}"#;

        let err = import_questions(QuestionFileFormat::Json, raw).expect_err("blank section");
        assert!(matches!(err, ImportError::InvalidQuestion { position: 2, .. }));
    }

    #[test]
    fn csv_import_skips_header() {
        let raw = "number,section,question\n1,Basics,What is Cargo?\n2,Basics,\"What is a crate, really?\"\n";

        let questions = import_questions(QuestionFileFormat::Csv, raw).expect("questions");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].number, 2);
        assert_eq!(questions[1].question, "What is a crate, really?");
    }

    #[test]
    fn csv_header_only_is_rejected() {
        let result = import_questions(QuestionFileFormat::Csv, "number,section,question\n");
        assert!(matches!(result, Err(ImportError::MissingCsvRows)));
    }

    #[test]
    fn csv_short_row_reports_row_number() {
        let raw = "number,section,question\n1,A,q1\n2,B\n";
        let err = import_questions(QuestionFileFormat::Csv, raw).expect_err("short row");
        assert!(matches!(err, ImportError::MissingColumns { row: 3, columns: 2 }));
    }

    #[test]
    fn csv_bad_number_reports_row_number() {
        let raw = "number,section,question\nfirst,A,q1\n";
        let err = import_questions(QuestionFileFormat::Csv, raw).expect_err("bad number");
        assert!(matches!(err, ImportError::InvalidNumber { row: 2, .. }));
    }
}
