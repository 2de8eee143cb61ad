use crate::domain::{NewFood, PatchOperation};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("The authentication request could not be completed.")]
    Transport(#[from] reqwest::Error),
    #[error("The authentication endpoint rejected the credentials with status {0}.")]
    Rejected(StatusCode),
    #[error("The authentication response carried no usable access token.")]
    MissingToken,
    #[error("The access token is not a valid header value.")]
    InvalidToken(#[source] InvalidHeaderValue),
}

#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ClientError(#[from] reqwest::Error);

/// A response captured for assertion purposes: the exact status plus the raw
/// body text, read once.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
impl ApiResponse {
    pub(crate) fn for_tests(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }
}

#[derive(serde::Serialize)]
struct AuthenticationRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct AuthenticationResponse {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// Shared client for the Foody service. Built once by [`authenticate`] and
/// borrowed by every call afterwards; the bearer token travels as a default
/// header, so no call site re-specifies it.
///
/// [`authenticate`]: FoodApiClient::authenticate
#[derive(Clone, Debug)]
pub struct FoodApiClient {
    base_url: String,
    http_client: Client,
}

impl FoodApiClient {
    /// Performs the single login call and builds the authenticated client.
    ///
    /// A login response without a non-empty `accessToken` fails the bootstrap
    /// here, with its own diagnostic, instead of surfacing later as a wall of
    /// authorization failures.
    #[tracing::instrument(name = "Authenticating against the Foody API", skip(credentials))]
    pub async fn authenticate(
        base_url: String,
        credentials: &Credentials,
        timeout: std::time::Duration,
    ) -> Result<Self, AuthError> {
        let login_client = Client::builder().timeout(timeout).build().unwrap();
        let url = format!("{}/api/User/Authentication", base_url);
        let response = login_client
            .post(&url)
            .json(&AuthenticationRequest {
                username: &credentials.username,
                password: credentials.password.expose_secret(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::Rejected(response.status()));
        }
        let body: AuthenticationResponse = response.json().await?;
        let token = body
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(AuthError::InvalidToken)?;
        bearer.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        let http_client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .unwrap();

        Ok(Self {
            base_url,
            http_client,
        })
    }

    #[tracing::instrument(name = "Creating a food revue", skip(self, food))]
    pub async fn create_food(&self, food: &NewFood<'_>) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/Food/Create", self.base_url);
        let response = self.http_client.post(&url).json(food).send().await?;
        Ok(ApiResponse::read(response).await?)
    }

    #[tracing::instrument(name = "Editing a food revue", skip(self, patch))]
    pub async fn edit_food(
        &self,
        food_id: &str,
        patch: &[PatchOperation<'_>],
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/Food/Edit/{}", self.base_url, food_id);
        let response = self.http_client.patch(&url).json(&patch).send().await?;
        Ok(ApiResponse::read(response).await?)
    }

    #[tracing::instrument(name = "Listing all food revues", skip(self))]
    pub async fn get_all_foods(&self) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/Food/All", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        Ok(ApiResponse::read(response).await?)
    }

    #[tracing::instrument(name = "Deleting a food revue", skip(self))]
    pub async fn delete_food(&self, food_id: &str) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/Food/Delete/{}", self.base_url, food_id);
        let response = self.http_client.delete(&url).send().await?;
        Ok(ApiResponse::read(response).await?)
    }
}
