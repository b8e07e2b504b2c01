use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum H2wError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read token file {}", path.display())]
    TokenRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write token file {}", path.display())]
    TokenWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not delete token file {}", path.display())]
    TokenDelete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {what} from the terminal")]
    Prompt {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("unexpected response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, H2wError>;
