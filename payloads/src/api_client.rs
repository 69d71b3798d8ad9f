use crate::{
    AdDraft, AdId, BearerToken,
    requests::{self, ImageUpload},
    responses,
};
use reqwest::{
    RequestBuilder,
    header::AUTHORIZATION,
    multipart::{Form, Part},
};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// The bearer token is passed in explicitly; methods that need it fail with
/// [`ClientError::Unauthorized`] before building a request when it is
/// missing.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub token: Option<BearerToken>,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<BearerToken>) -> Self {
        self.token = token;
        self
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_ref().ok_or(ClientError::Unauthorized)?;
        Ok(request.header(AUTHORIZATION, format!("Bearer {}", token.expose())))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn authed_post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        Ok(self.authorize(request)?.send().await?)
    }

    async fn authed_get(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.get(self.format_url(path));
        Ok(self.authorize(request)?.send().await?)
    }

    async fn authed_put(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.put(self.format_url(path)).json(body);
        Ok(self.authorize(request)?.send().await?)
    }
}

/// Methods on the backend API
impl APIClient {
    /// Exchange credentials for a bearer token.
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<BearerToken, ClientError> {
        let response = self.post("auth/login", details).await?;
        let body: responses::LoginResponse = ok_body(response).await?;
        Ok(BearerToken::new(body.access_token))
    }

    /// Create an account. The caller signs in separately afterwards.
    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.post("users", details).await?;
        ok_body(response).await
    }

    /// Get the signed-in user's profile.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.authed_get("auth/profile").await?;
        ok_body(response).await
    }

    pub async fn update_user_profile(
        &self,
        details: &requests::UpdateProfile,
    ) -> Result<(), ClientError> {
        let response = self.authed_put("users/profile", details).await?;
        ok_empty(response).await
    }

    pub async fn change_password(
        &self,
        details: &requests::ChangePassword,
    ) -> Result<(), ClientError> {
        let response = self.authed_put("users/profile", details).await?;
        ok_empty(response).await
    }

    /// Public, paginated listing of active ads.
    pub async fn list_ads(
        &self,
        query: &requests::AdQuery,
    ) -> Result<responses::AdPage, ClientError> {
        let response = self
            .inner_client
            .get(self.format_url("ads"))
            .query(query)
            .send()
            .await?;
        ok_body(response).await
    }

    pub async fn create_ad(
        &self,
        details: &AdDraft,
    ) -> Result<responses::Ad, ClientError> {
        let response = self.authed_post("ads", details).await?;
        ok_body(response).await
    }

    pub async fn update_ad(
        &self,
        ad_id: &AdId,
        details: &AdDraft,
    ) -> Result<responses::Ad, ClientError> {
        let response = self.authed_put(&format!("ads/{ad_id}"), details).await?;
        ok_body(response).await
    }

    /// Public ad lookup; no token required.
    pub async fn get_ad(
        &self,
        ad_id: &AdId,
    ) -> Result<responses::Ad, ClientError> {
        let response = self.empty_get(&format!("ads/{ad_id}")).await?;
        ok_body(response).await
    }

    /// Upload every image in a single multipart request, one `images` part
    /// per file.
    pub async fn upload_ad_images(
        &self,
        ad_id: &AdId,
        images: Vec<ImageUpload>,
    ) -> Result<(), ClientError> {
        let request =
            self.inner_client.post(self.format_url(&format!("ads/{ad_id}/images")));
        let request = self.authorize(request)?;

        let mut form = Form::new();
        for image in images {
            let part = Part::bytes(image.data)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("images", part);
        }

        let response = request.multipart(form).send().await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(reqwest::StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("You need to sign in first.")]
    Unauthorized,
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
