use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com";
pub const RECIPES_PER_PAGE: u64 = 8;
pub const USERS_PER_PAGE: u64 = 6;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Lifetime requested for new access tokens.
    pub token_ttl_mins: u32,
    /// HS256 secret used to verify access tokens, if known.
    pub token_secret: Option<String>,
    pub recipes_per_page: u64,
    pub users_per_page: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: format!("foodify/{}", env!("CARGO_PKG_VERSION")),
            token_ttl_mins: 60,
            token_secret: None,
            recipes_per_page: RECIPES_PER_PAGE,
            users_per_page: USERS_PER_PAGE,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_token_secret(mut self, secret: Option<String>) -> Self {
        self.token_secret = secret.filter(|s| !s.is_empty());
        self
    }
}
