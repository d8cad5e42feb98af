use thiserror::Error;

/// Fatal failure categories for one analysis run. Field-level extraction
/// problems degrade to placeholders instead and never surface here.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid channel address '{input}': {source}")]
    Address {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no videos could be extracted from {url}")]
    NoVideos { url: String },
}
