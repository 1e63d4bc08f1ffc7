// Tabular loader for question and glossary CSV files.
// Handles text decoding, header-based schema resolution, and record building.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

use super::records::{GlossaryRecord, QuestionBank, QuestionNumber, QuestionRecord};

/// Bytes Windows-1252 leaves undefined.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

const SECTION_NAMES: &[&str] = &["section"];
const NUMBER_NAMES: &[&str] = &["question number", "question num", "question no", "number"];
const QUESTION_NAMES: &[&str] = &["question"];
const ANSWER_NAMES: &[&str] = &["answer"];

/// How question file columns are mapped onto record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Resolve columns by header name; fail when a required one is missing.
    #[default]
    Declared,
    /// Legacy column-count heuristic for files with unreliable headers.
    Positional,
}

/// Column indices for the question fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct QuestionColumns {
    section: Option<usize>,
    number: Option<usize>,
    question: Option<usize>,
    answer: Option<usize>,
}

/// Load the question bank from a cp1252-encoded CSV file.
pub fn load_questions(path: &Path, policy: SchemaPolicy) -> Result<QuestionBank, LoadError> {
    let bytes = read_file(path)?;
    let result = read_questions(&bytes, policy);
    match &result {
        Ok(bank) => tracing::info!(
            path = %path.display(),
            records = bank.len(),
            sections = bank.sections.len(),
            ?policy,
            "loaded questions"
        ),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "question load failed"),
    }
    result
}

/// Load glossary entries from a UTF-8 CSV file.
pub fn load_glossary(path: &Path) -> Result<Vec<GlossaryRecord>, LoadError> {
    let bytes = read_file(path)?;
    let result = read_glossary(&bytes);
    match &result {
        Ok(records) => {
            tracing::info!(path = %path.display(), records = records.len(), "loaded glossary")
        }
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "glossary load failed"),
    }
    result
}

/// Parse question data from raw cp1252 bytes.
pub fn read_questions(bytes: &[u8], policy: SchemaPolicy) -> Result<QuestionBank, LoadError> {
    let text = decode_cp1252(bytes)?;
    let mut reader = csv_reader(&text);
    let headers = reader.headers()?.clone();

    let columns = match policy {
        SchemaPolicy::Declared => declared_columns(&headers)?,
        SchemaPolicy::Positional => positional_columns(&headers),
    };
    tracing::debug!(?columns, headers = headers.len(), "resolved question columns");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).unwrap_or("");

        // A blank cell under a section column stays distinct from the implicit section.
        let section = columns.section.map(|_| cell(columns.section).to_string());

        records.push(QuestionRecord {
            section,
            question_number: QuestionNumber::parse(cell(columns.number)),
            question_text: cell(columns.question).to_string(),
            answer_text: cell(columns.answer).to_string(),
        });
    }

    if records.is_empty() {
        return Err(LoadError::NoRecords);
    }
    Ok(QuestionBank::new(records))
}

/// Parse glossary data from raw UTF-8 bytes.
pub fn read_glossary(bytes: &[u8]) -> Result<Vec<GlossaryRecord>, LoadError> {
    let text = decode_utf8(bytes)?;
    let mut reader = csv_reader(&text);
    let headers = reader.headers()?.clone();

    let term = find_column(&headers, &["term"]).ok_or(LoadError::MissingColumn { column: "Term" })?;
    let definition = find_column(&headers, &["definition"])
        .ok_or(LoadError::MissingColumn { column: "Definition" })?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(GlossaryRecord {
            term: row.get(term).unwrap_or("").to_string(),
            definition: row.get(definition).unwrap_or("").to_string(),
        });
    }

    if records.is_empty() {
        return Err(LoadError::NoRecords);
    }
    Ok(records)
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// Decode Windows-1252, rejecting the bytes the codepage leaves undefined.
fn decode_cp1252(bytes: &[u8]) -> Result<String, LoadError> {
    if let Some(offset) = bytes.iter().position(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(LoadError::Encoding {
            encoding: "cp1252",
            offset,
        });
    }
    let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}

/// Decode UTF-8, stripping a leading BOM.
fn decode_utf8(bytes: &[u8]) -> Result<String, LoadError> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        let offset = std::str::from_utf8(bytes)
            .err()
            .map(|e| e.valid_up_to())
            .unwrap_or(0);
        return Err(LoadError::Encoding {
            encoding: "utf-8",
            offset,
        });
    }
    Ok(text.into_owned())
}

/// Normalize a header for matching: lowercase, `_`/`-` as spaces, single-spaced.
fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.contains(&normalize_header(h).as_str()))
}

fn named_columns(headers: &csv::StringRecord) -> QuestionColumns {
    QuestionColumns {
        section: find_column(headers, SECTION_NAMES),
        number: find_column(headers, NUMBER_NAMES),
        question: find_column(headers, QUESTION_NAMES),
        answer: find_column(headers, ANSWER_NAMES),
    }
}

fn declared_columns(headers: &csv::StringRecord) -> Result<QuestionColumns, LoadError> {
    let columns = named_columns(headers);
    if columns.question.is_none() {
        return Err(LoadError::MissingColumn { column: "Question" });
    }
    if columns.answer.is_none() {
        return Err(LoadError::MissingColumn { column: "Answer" });
    }
    Ok(columns)
}

fn positional_columns(headers: &csv::StringRecord) -> QuestionColumns {
    if headers.iter().any(|h| h == "Question Number") {
        return named_columns(headers);
    }
    match headers.len() {
        4 => QuestionColumns {
            section: Some(0),
            number: Some(1),
            question: Some(2),
            answer: Some(3),
        },
        3 => QuestionColumns {
            section: None,
            number: Some(0),
            question: Some(1),
            answer: Some(2),
        },
        _ => named_columns(headers),
    }
}
