use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("{0}")]
    Config(String),

    #[error("error creating YouTube client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("error during {stage}: {source}")]
    Transport {
        stage: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("playlist not found: {playlist_id}")]
    NotFound { playlist_id: String },

    #[error("error parsing date {value:?} of video {video_id}: {source}")]
    Parse {
        video_id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("error serializing report: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lower-level failure of a single API call.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    #[error("api error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl TransportError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() { TransportError::Timeout } else { TransportError::Http(err) }
    }
}

impl DigestError {
    pub fn transport(stage: &'static str, source: impl Into<TransportError>) -> Self {
        DigestError::Transport { stage, source: source.into() }
    }
}
