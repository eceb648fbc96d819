/// Configuration for bearer token issuance and validation.
pub struct AuthConfig {
    pub token_secret: String,
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_TOKEN_SECRET: HMAC secret for signing tokens (required)
    /// - AUTH_TOKEN_TTL_SECS: Token lifetime in seconds (default: 86400)
    pub fn from_env() -> Self {
        let token_secret =
            std::env::var("AUTH_TOKEN_SECRET").expect("AUTH_TOKEN_SECRET must be set");
        let token_ttl_secs = std::env::var("AUTH_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);
        Self {
            token_secret,
            token_ttl_secs,
        }
    }
}
