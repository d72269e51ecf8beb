use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("bad source url: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("{0} is not a local file url")]
    NotLocalFile(String),

    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("{location} answered with {status}")]
    Status {
        status: StatusCode,
        location: String,
    },

    #[error("cannot read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}
