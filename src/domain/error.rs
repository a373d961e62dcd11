use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Corpus is empty: at least one entry is required")]
    EmptyCorpus,

    #[error("Dimension mismatch{}: expected {expected}, got {actual}", entry_suffix(.index))]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        /// Offending corpus entry; `None` when the query itself is off.
        index: Option<usize>,
    },

    #[error("Invalid k: {0} (must be at least 1)")]
    InvalidK(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

fn entry_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at entry {i}"),
        None => String::new(),
    }
}
