use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuttForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Incomplete card: distance or putts missing on hole(s) {}", format_holes(.holes))]
    IncompleteInput { holes: Vec<u8> },

    #[error("Corrupt session record at row {row}: {reason}")]
    CorruptRecord { row: usize, reason: String },
}

fn format_holes(holes: &[u8]) -> String {
    holes
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type PfResult<T> = Result<T, PuttForgeError>;
