use crate::api::error::ApiError;
use crate::api::session::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default timeout for backend requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated client for the fleet backend
///
/// One instance is built per session and shared by every resource module.
/// The bearer token is attached here, centrally; resource calls only name
/// the path and body.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Build a client for `base_url`, authorizing every request with the
    /// given session's token.
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn check(response: reqwest::Response, path: &str) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        let response = Self::check(response, path)?;
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// POST a JSON body, returning the JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.session.token())
            .json(body)
            .send()
            .await?;
        let response = Self::check(response, path)?;
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// PATCH a JSON body, returning the JSON response
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(self.session.token())
            .json(body)
            .send()
            .await?;
        let response = Self::check(response, path)?;
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::check(response, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_bad_base_url() {
        let result = ApiClient::new("not a url", Session::new("tok"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = ApiClient::new("https://fleet.example.com/api/", Session::new("tok")).unwrap();
        assert_eq!(
            client.url("/trips/42/positions"),
            "https://fleet.example.com/api/trips/42/positions"
        );
        assert_eq!(client.url("trips"), "https://fleet.example.com/api/trips");
    }
}
