pub use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
pub use reqwest::Client as HttpClient;
pub use reqwest::ClientBuilder as HttpClientBuilder;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::Session;

pub fn client_builder(config: &ClientConfig) -> HttpClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    HttpClientBuilder::new()
        .default_headers(headers)
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
}

/// Attaches `Authorization: Bearer <token>` when a session is present.
pub fn authorize(
    builder: reqwest::RequestBuilder,
    session: Option<&Session>,
) -> Result<reqwest::RequestBuilder> {
    Ok(match session {
        Some(s) => builder.header(AUTHORIZATION, HeaderValue::from_str(&s.bearer())?),
        None => builder,
    })
}

pub fn join_url(base: &Url, path: &str) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(base.to_string()))?;
        segments.pop_if_empty();
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a status code and body to a decoded value or a [`ClientError`].
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

    match status {
        StatusCode::UNAUTHORIZED => {
            log::warn!("token invalid or expired: {}", message);
            Err(ClientError::NotAuth)
        }
        StatusCode::NOT_FOUND => {
            log::debug!("not found: {}", message);
            Err(ClientError::NotFound)
        }
        _ => Err(ClientError::Api {
            status: status.as_u16(),
            message,
        }),
    }
}

pub async fn read<T: DeserializeOwned>(rsp: reqwest::Response) -> Result<T> {
    let status = rsp.status();
    let url = rsp.url().clone();
    let body = rsp.text().await?;
    log::debug!("{} {}", status.as_u16(), url);
    decode(status, &body)
}
