use thiserror::Error;

/// Errors surfaced through the client capability set.
///
/// The disconnected client never produces any of these; they exist for
/// endpoint composition, settings parsing and clients that do talk to a
/// cluster.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error("transport error: {0}")]
    Transport(String),
}
