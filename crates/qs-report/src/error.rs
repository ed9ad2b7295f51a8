use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("[R001] Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("[R002] Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
