use thiserror::Error;

/// Errors surfaced by place-search operations.
///
/// User cancellation is not an error: the interactive flow resolves with
/// `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// An operation was invoked before the process-wide client was
    /// initialised.
    #[error("place client not initialised; call initialize() first")]
    NotInitialized,

    /// A required argument was missing or malformed; no wire call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backend service reported a failure. The message is passed
    /// through verbatim.
    #[error("place service error: {0}")]
    Api(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
