// Data module for question and glossary records.
// Loads the two CSV files the application reviews.

#![allow(dead_code, unused_imports)]

pub mod loader;
pub mod records;

pub use loader::{SchemaPolicy, load_glossary, load_questions, read_glossary, read_questions};
pub use records::{GlossaryRecord, IMPLICIT_SECTION, QuestionBank, QuestionNumber, QuestionRecord};
