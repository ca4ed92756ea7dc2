#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A caller-supplied argument was rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A server payload did not match the declared shape. The serde error
    /// names the offending field and its position in the document.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// Wrap a serde error with the operation it occurred in.
    pub fn decode(context: &'static str, source: serde_json::Error) -> Self {
        CoreError::Decode { context, source }
    }
}
