use thiserror::Error;

use crate::form::FormErrors;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("Api error: code({status}) {message}")]
    Api { status: u16, message: String },
    #[error("Not auth")]
    NotAuth,
    #[error("Not Found")]
    NotFound,
    #[error("User not found: {0}")]
    UnknownUser(String),
    #[error(transparent)]
    Form(#[from] FormErrors),
    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
