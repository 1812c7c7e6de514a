use thiserror::Error;

/// Transport-level failure for one lookup.
///
/// Parse problems never surface here: malformed structured data is skipped
/// and missing sections fall through to the next strategy.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Transport failure reported by a non-HTTP fetcher.
    #[error("could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl LookupError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
            }
        } else {
            Self::Http {
                url: url.to_owned(),
                source,
            }
        }
    }
}
