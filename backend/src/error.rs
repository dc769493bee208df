use std::path::PathBuf;

use foodify_core::form::FormErrors;
use foodify_core::session::SessionError;
use foodify_core::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Form(#[from] FormErrors),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Invalid recipe file {}: {err}", .path.display())]
    RecipeFile {
        path: PathBuf,
        #[source]
        err: serde_json::Error,
    },
    #[error("Not logged in, run `foodify login` first")]
    NotLoggedIn,
    #[error("Session expired, log in again")]
    SessionExpired,
}
