use jwt_simple::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{auth::SessionUser, Role};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Token belongs to user {token_user}, session is for user {session_user}")]
    UserMismatch { token_user: i64, session_user: i64 },
}

/// Logged in state, created by a successful login and passed explicitly to
/// every call that needs authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: String, refresh_token: Option<String>, user: SessionUser) -> Self {
        Self {
            token,
            refresh_token,
            user,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Checks the token signature and expiry, then that it was issued for
    /// the stored user.
    pub fn verify(&self, verifier: &TokenVerifier) -> Result<TokenClaims, SessionError> {
        let claims = verifier.verify(&self.token)?;
        if claims.id != self.user.id {
            return Err(SessionError::UserMismatch {
                token_user: claims.id,
                session_user: self.user.id,
            });
        }
        Ok(claims)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// HS256 verification of access tokens. Claims are only handed out after
/// the signature and expiry have been checked.
pub struct TokenVerifier {
    key: HS256Key,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: HS256Key::from_bytes(secret),
        }
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, SessionError> {
        let options = VerificationOptions {
            time_tolerance: Some(Duration::from_secs(30)),
            ..Default::default()
        };
        self.key
            .verify_token::<TokenClaims>(token, Some(options))
            .map(|c| c.custom)
            .map_err(|e| {
                log::debug!("token rejected: {}", e);
                SessionError::InvalidToken(e.to_string())
            })
    }

    #[cfg(test)]
    pub(crate) fn sign(&self, claims: JWTClaims<TokenClaims>) -> String {
        self.key.authenticate(claims).unwrap()
    }
}

/// Persists a [`Session`] as JSON in the data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(session)?;
        open_private(&self.path)?.write_all(data.as_bytes())?;
        log::info!("session saved for user {}", session.user.id);
        Ok(())
    }

    /// Returns whether a session was present.
    pub fn clear(&self) -> Result<bool, SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("session cleared");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

// the file holds a bearer token, keep it owner-only
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}
