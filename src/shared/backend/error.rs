#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// A single-row read matched no row.
    #[error("Row not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}
