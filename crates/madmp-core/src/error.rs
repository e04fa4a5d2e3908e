use thiserror::Error;

use crate::vocabulary::VocabularyTable;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No {table} mapping for option '{path}'")]
    UnmappedOption {
        table: VocabularyTable,
        path: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
