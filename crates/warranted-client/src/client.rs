//! Warranted HTTP client implementation.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};

use warranted_core::{verify_signature, WarrantedError};

use crate::error::ClientError;
use crate::types::{
    AccountInfo, ApiErrorResponse, Decision, DecisionList, Deleted, LawEnforcementRequest,
    LawEnforcementRequestList, ListParams,
};

/// Production API host.
const DEFAULT_BASE_URL: &str = "https://app.warranted.io";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("warranted-rust/", env!("CARGO_PKG_VERSION"));

/// Warranted API client.
///
/// Authenticates every request with HTTP basic auth using the account id and
/// auth token. The auth token doubles as the HMAC key for webhook signature
/// validation, see [`WarrantedClient::validate_request`].
#[derive(Debug, Clone)]
pub struct WarrantedClient {
    client: Client,
    base_url: String,
    account_id: String,
    auth_token: String,
}

impl WarrantedClient {
    /// Create a new Warranted client against the production API.
    ///
    /// # Errors
    ///
    /// Returns [`WarrantedError::MissingCredential`] (wrapped in
    /// [`ClientError::Core`]) if the account id or auth token is empty.
    pub fn new(
        account_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_options(account_id, auth_token, ClientOptions::default())
    }

    /// Create a new Warranted client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is empty or the HTTP client cannot
    /// be built.
    pub fn with_options(
        account_id: impl Into<String>,
        auth_token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let account_id = account_id.into();
        let auth_token = auth_token.into();

        if account_id.is_empty() {
            return Err(WarrantedError::MissingCredential { field: "account_id" }.into());
        }
        if auth_token.is_empty() {
            return Err(WarrantedError::MissingCredential { field: "auth_token" }.into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            account_id,
            auth_token,
        })
    }

    /// Access the decisions resource.
    #[must_use]
    pub const fn decisions(&self) -> Decisions<'_> {
        Decisions { client: self }
    }

    /// Access the law enforcement requests resource.
    #[must_use]
    pub const fn law_enforcement_requests(&self) -> LawEnforcementRequests<'_> {
        LawEnforcementRequests { client: self }
    }

    /// Access the account info resource.
    #[must_use]
    pub const fn me(&self) -> Me<'_> {
        Me { client: self }
    }

    /// Access the decision schema resource.
    #[must_use]
    pub const fn schema(&self) -> Schema<'_> {
        Schema { client: self }
    }

    /// Validate the signature of an inbound webhook request.
    ///
    /// `signature` is the value of the `X-Warranted-Signature` header, `url`
    /// the URL that received the request, and `body` the raw JSON body
    /// exactly as received. Returns whether the signature is authentic.
    #[must_use]
    pub fn validate_request(&self, signature: &str, url: &str, body: &str) -> bool {
        verify_signature(signature, url, body, &self.auth_token)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        self.client
            .request(method, url)
            .basic_auth(&self.account_id, Some(&self.auth_token))
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the error envelope
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                tracing::warn!(
                    code = %api_error.error.code,
                    status = status.as_u16(),
                    "Warranted API error"
                );
                Err(ClientError::Api {
                    code: api_error.error.code,
                    message: api_error.error.message,
                    status: status.as_u16(),
                })
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the Warranted API (default: `https://app.warranted.io`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ClientOptions {
    /// Create options with a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Decisions made by Warranted for the account's law enforcement requests.
#[derive(Debug, Clone, Copy)]
pub struct Decisions<'a> {
    client: &'a WarrantedClient,
}

impl Decisions<'_> {
    /// List decisions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self, params: ListParams) -> Result<DecisionList, ClientError> {
        let response = self
            .client
            .request(reqwest::Method::GET, "/api/v1/decisions")
            .query(&params.to_query())
            .send()
            .await?;

        self.client.handle_response(response).await
    }

    /// Fetch a single decision by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, id: &str) -> Result<Decision, ClientError> {
        let response = self
            .client
            .request(reqwest::Method::GET, &format!("/api/v1/decisions/{id}"))
            .send()
            .await?;

        self.client.handle_response(response).await
    }
}

/// Law enforcement requests uploaded to Warranted for processing.
#[derive(Debug, Clone, Copy)]
pub struct LawEnforcementRequests<'a> {
    client: &'a WarrantedClient,
}

impl LawEnforcementRequests<'_> {
    /// List law enforcement requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: ListParams,
    ) -> Result<LawEnforcementRequestList, ClientError> {
        let response = self
            .client
            .request(reqwest::Method::GET, "/api/v1/lawEnforcementRequests")
            .query(&params.to_query())
            .send()
            .await?;

        self.client.handle_response(response).await
    }

    /// Fetch a single law enforcement request by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, id: &str) -> Result<LawEnforcementRequest, ClientError> {
        let response = self
            .client
            .request(
                reqwest::Method::GET,
                &format!("/api/v1/lawEnforcementRequests/{id}"),
            )
            .send()
            .await?;

        self.client.handle_response(response).await
    }

    /// Upload a new law enforcement request document.
    ///
    /// `file` is the raw document bytes, sent as a multipart form upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn add(
        &self,
        file_name: impl Into<String>,
        file: Vec<u8>,
    ) -> Result<LawEnforcementRequest, ClientError> {
        let form = Form::new().part("file", Part::bytes(file).file_name(file_name.into()));

        let response = self
            .client
            .request(reqwest::Method::POST, "/api/v1/lawEnforcementRequests")
            .multipart(form)
            .send()
            .await?;

        self.client.handle_response(response).await
    }

    /// Replace the document of an existing law enforcement request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        id: &str,
        file_name: impl Into<String>,
        file: Vec<u8>,
    ) -> Result<LawEnforcementRequest, ClientError> {
        let form = Form::new().part("file", Part::bytes(file).file_name(file_name.into()));

        let response = self
            .client
            .request(
                reqwest::Method::PUT,
                &format!("/api/v1/lawEnforcementRequests/{id}"),
            )
            .multipart(form)
            .send()
            .await?;

        self.client.handle_response(response).await
    }

    /// Delete a law enforcement request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, id: &str) -> Result<Deleted, ClientError> {
        let response = self
            .client
            .request(
                reqwest::Method::DELETE,
                &format!("/api/v1/lawEnforcementRequests/{id}"),
            )
            .send()
            .await?;

        self.client.handle_response(response).await
    }
}

/// Details about the authenticated account.
#[derive(Debug, Clone, Copy)]
pub struct Me<'a> {
    client: &'a WarrantedClient,
}

impl Me<'_> {
    /// Fetch the authenticated account's details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self) -> Result<AccountInfo, ClientError> {
        let response = self
            .client
            .request(reqwest::Method::GET, "/api/v1/me")
            .send()
            .await?;

        self.client.handle_response(response).await
    }
}

/// The account's decision schema.
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    client: &'a WarrantedClient,
}

impl Schema<'_> {
    /// Fetch the decision schema as raw JSON.
    ///
    /// The schema shape is account-specific, so it is passed through as a
    /// [`serde_json::Value`] rather than a typed struct.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self) -> Result<serde_json::Value, ClientError> {
        let response = self
            .client
            .request(reqwest::Method::GET, "/api/v1/schema")
            .send()
            .await?;

        self.client.handle_response(response).await
    }
}
