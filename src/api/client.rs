use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use crate::api::error::ApiError;
use crate::config::{ApiConfig, ConfigError};
use crate::model::{EditDraft, UserProfile};

const USER_PATH: &str = "/user";
const USER_EDIT_PATH: &str = "/user/edit";

/// Body of a successful `GET /user`.
#[derive(serde::Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

/// HTTP adapter for the profile service.
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /user`.
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(USER_PATH);
        tracing::debug!(%url, "fetching profile");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        let status = response.status();
        let body = read_success(response).await?;

        let envelope: UserEnvelope =
            serde_json::from_slice(&body).map_err(|e| ApiError::Client {
                status: Some(status.as_u16()),
                message: format!("unexpected response from server: {}", e),
            })?;
        Ok(envelope.user)
    }

    /// `PUT /user/edit` as multipart: `name`, `image` (only when a candidate
    /// image is present) and `validUntil`.
    pub async fn save_profile(&self, draft: &EditDraft, valid_until: &str) -> Result<(), ApiError> {
        let url = self.endpoint(USER_EDIT_PATH);
        let form = build_form(draft, valid_until).await?;
        tracing::debug!(
            %url,
            has_image = draft.image.is_some(),
            valid_until,
            "saving profile"
        );

        let response = self
            .client
            .put(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        read_success(response).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn build_form(draft: &EditDraft, valid_until: &str) -> Result<Form, ApiError> {
    let mut form = Form::new().text("name", draft.name.clone());

    if let Some(image) = &draft.image {
        let bytes = tokio::fs::read(image.path())
            .await
            .map_err(|source| ApiError::Image {
                path: image.path().to_path_buf(),
                source,
            })?;
        let part = Part::bytes(bytes)
            .file_name(image.file_name())
            .mime_str(image.media_type())
            .map_err(ApiError::from_transport)?;
        form = form.part("image", part);
    }

    Ok(form.text("validUntil", valid_until.to_string()))
}

/// Returns the body of a 2xx response, or the normalized error otherwise.
async fn read_success(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await;

    if !status.is_success() {
        let body = body.map(|b| b.to_vec()).unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }

    body.map(|b| b.to_vec()).map_err(ApiError::from_transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ApiConfig {
        ApiConfig {
            base_url: Some(url.to_string()),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ProfileClient::new(&config("http://localhost:3000/")).unwrap();
        assert_eq!(client.endpoint(USER_PATH), "http://localhost:3000/user");
        assert_eq!(client.endpoint(USER_EDIT_PATH), "http://localhost:3000/user/edit");
    }

    #[test]
    fn missing_base_url_is_config_error() {
        let result = ProfileClient::new(&ApiConfig::default());
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }
}
