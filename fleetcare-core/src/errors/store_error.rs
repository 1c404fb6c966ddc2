/// Errors surfaced by host-provided store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("write failed: {message}")]
    WriteFailed { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}
