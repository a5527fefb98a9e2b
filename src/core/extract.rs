use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::extract::{ExtractOptions, Extraction, extract_report};
use crate::models::event::Event;
use crate::ui::messages::warning;
use std::fs;
use std::io::{self, Read};

/// Name used for standard input in messages and in the audit log.
pub const STDIN_NAME: &str = "<stdin>";

/// One text document to run through the engine.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Extraction result for one input.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub extraction: Extraction,
}

pub struct ExtractLogic;

impl ExtractLogic {
    /// Read every file in `files` (stdin when empty or `-`).
    pub fn read_inputs(files: &[String]) -> AppResult<Vec<Input>> {
        if files.is_empty() {
            return Ok(vec![Self::read_stdin()?]);
        }

        files
            .iter()
            .map(|f| {
                if f == "-" {
                    return Self::read_stdin();
                }
                let bytes = fs::read(f).map_err(|e| AppError::Input(f.clone(), e.to_string()))?;
                // OCR output is not always valid UTF-8
                Ok(Input::new(f.clone(), String::from_utf8_lossy(&bytes)))
            })
            .collect()
    }

    fn read_stdin() -> AppResult<Input> {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| AppError::Input(STDIN_NAME.to_string(), e.to_string()))?;
        Ok(Input::new(STDIN_NAME, String::from_utf8_lossy(&buf)))
    }

    /// Run the engine on each input, in order. Each input is an independent
    /// extraction; nothing is shared between them.
    pub fn run(inputs: &[Input], opts: &ExtractOptions) -> Vec<Document> {
        inputs
            .iter()
            .map(|input| Document {
                source: input.name.clone(),
                extraction: extract_report(&input.text, opts),
            })
            .collect()
    }

    /// Append one audit line per document. Failures only produce a warning.
    pub fn audit(pool: &DbPool, docs: &[Document]) {
        for doc in docs {
            let n = doc.extraction.events.len();
            let message = format!(
                "{n} event(s) via {} detector",
                doc.extraction.strategy.as_str()
            );
            if let Err(e) = ttlog(&pool.conn, "extract", &doc.source, &message) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }
    }

    /// All events of all documents, in input order.
    pub fn flatten(docs: &[Document]) -> Vec<Event> {
        docs.iter()
            .flat_map(|d| d.extraction.events.iter().cloned())
            .collect()
    }
}
