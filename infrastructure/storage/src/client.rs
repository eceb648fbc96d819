use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

use business::domain::image::errors::ImageError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TRANSPORT_RETRIES: u32 = 2;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

/// Shared client for the object storage API. One session is established
/// per process on first use and reused until the provider rejects it;
/// individual requests never re-authenticate up front.
pub struct StorageClient {
    client: Client,
    api_url: String,
    bucket: String,
    access_key: String,
    access_secret: String,
    session: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    access_token: String,
}

impl StorageClient {
    pub fn new(api_url: String, bucket: String, access_key: String, access_secret: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bucket,
            access_key,
            access_secret,
            session: RwLock::new(None),
        }
    }

    fn auth_url(&self) -> String {
        format!("{}/auth/token", self.api_url)
    }

    fn object_url(&self, object_path: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.api_url,
            self.bucket,
            object_path.trim_start_matches('/')
        )
    }

    /// Returns the cached session token, authenticating on first use.
    async fn session_token(&self) -> Result<String, ImageError> {
        if let Some(token) = self.session.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut session = self.session.write().await;
        // Another request may have authenticated while we waited.
        if let Some(token) = session.as_ref() {
            return Ok(token.clone());
        }

        let token = self.authenticate().await?;
        *session = Some(token.clone());
        Ok(token)
    }

    async fn invalidate_session(&self) {
        *self.session.write().await = None;
    }

    async fn authenticate(&self) -> Result<String, ImageError> {
        tracing::debug!("Authenticating storage session at {}", self.auth_url());
        let response = self
            .client
            .post(self.auth_url())
            .json(&json!({
                "access_key": self.access_key,
                "access_secret": self.access_secret,
            }))
            .send()
            .await
            .map_err(|_| ImageError::AuthFailed)?;

        if !response.status().is_success() {
            tracing::warn!("Storage authentication rejected: {}", response.status());
            return Err(ImageError::AuthFailed);
        }

        let session: SessionResponse =
            response.json().await.map_err(|_| ImageError::AuthFailed)?;
        Ok(session.access_token)
    }

    /// Sends a request, retrying transport-level failures with a doubling
    /// delay. HTTP error statuses are never retried here.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response, reqwest::Error>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut delay = RETRY_BASE_DELAY;
        let mut attempt = 0;
        loop {
            match build().send().await {
                Ok(response) => return Ok(response),
                Err(err)
                    if attempt < MAX_TRANSPORT_RETRIES
                        && (err.is_timeout() || err.is_connect()) =>
                {
                    attempt += 1;
                    tracing::debug!("Storage request retry {} after {:?}", attempt, delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Downloads an object, re-authenticating once when the session has
    /// expired.
    pub async fn get_object(&self, object_path: &str) -> Result<Response, ImageError> {
        let url = self.object_url(object_path);
        let mut token = self.session_token().await?;

        let mut response = self
            .send_with_retry(|| self.client.get(&url).bearer_auth(&token))
            .await
            .map_err(|_| ImageError::FetchFailed)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.invalidate_session().await;
            token = self.session_token().await?;
            response = self
                .send_with_retry(|| self.client.get(&url).bearer_auth(&token))
                .await
                .map_err(|_| ImageError::FetchFailed)?;
        }

        if !response.status().is_success() {
            tracing::warn!("Object download failed with {}: {}", response.status(), url);
            return Err(ImageError::FetchFailed);
        }
        Ok(response)
    }

    /// Uploads an object, re-authenticating once when the session has
    /// expired.
    pub async fn put_object(
        &self,
        object_path: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), ImageError> {
        let url = self.object_url(object_path);
        let content_type = content_type.unwrap_or("application/octet-stream").to_string();
        let mut token = self.session_token().await?;

        let build = |token: &str| {
            self.client
                .post(&url)
                .bearer_auth(token)
                .header(reqwest::header::CONTENT_TYPE, content_type.clone())
                .body(bytes.clone())
        };

        let mut response = self
            .send_with_retry(|| build(&token))
            .await
            .map_err(|_| ImageError::UploadFailed)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.invalidate_session().await;
            token = self.session_token().await?;
            response = self
                .send_with_retry(|| build(&token))
                .await
                .map_err(|_| ImageError::UploadFailed)?;
        }

        if !response.status().is_success() {
            tracing::warn!("Object upload failed with {}: {}", response.status(), url);
            return Err(ImageError::UploadFailed);
        }
        Ok(())
    }
}
