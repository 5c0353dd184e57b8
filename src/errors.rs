/// Custom error types for the CereVoice Cloud client
#[derive(Debug, thiserror::Error)]
pub enum CereError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML encoding error: {0}")]
    Encode(#[from] quick_xml::SeError),

    #[error("XML decoding error: {0}")]
    Decode(#[from] quick_xml::DeError),
}

impl CereError {
    /// True for failures of the HTTP transport itself (DNS, connect, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// True when the response body could not be decoded against the
    /// operation's schema.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CereError>;
