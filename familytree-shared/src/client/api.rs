use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use super::ClientError;
use crate::models::{
    PersonCreate, PersonResponse, RelationshipCreate, RelationshipResponse, SigninRequest,
    SignupRequest, TokenResponse, TreeCreate, TreeId, TreeResponse,
};

/// Header carrying the session token. Sent verbatim, no auth scheme.
pub const TOKEN_HEADER: &str = "token";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Lightweight API client for the family-tree server.
///
/// The client holds no credentials of its own: every call takes the token to
/// send, so the caller's [`Session`](super::Session) stays the only owner.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] when `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client reusing an existing `reqwest` client.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] when `base_url` is not an absolute URL.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ClientError> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The token actually put on the wire: empty tokens are never sent.
    fn sent_token(token: Option<&str>) -> Option<&str> {
        token.filter(|value| !value.is_empty())
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Send `body` as JSON to `path` and decode the JSON reply.
    ///
    /// A non-success status fails with [`ClientError::Api`] carrying the raw
    /// response text.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server rejects it, or the
    /// reply is not the expected JSON.
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = Self::sent_token(token);
        debug!(method = "POST", path, authenticated = token.is_some(), "sending request");
        let request = Self::authorize(self.client.post(self.api_url(path)).json(body), token);
        let response = request.send().await?;
        Self::read_json(path, response).await
    }

    /// Fetch `path` and decode the JSON reply, with the same error rules as [`post`](Self::post).
    ///
    /// # Errors
    /// Returns an error if the request fails, the server rejects it, or the
    /// reply is not the expected JSON.
    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_get(path, token).await?;
        Self::read_json(path, response).await
    }

    async fn send_get(&self, path: &str, token: Option<&str>) -> Result<Response, ClientError> {
        let token = Self::sent_token(token);
        debug!(method = "GET", path, authenticated = token.is_some(), "sending request");
        let request = Self::authorize(self.client.get(self.api_url(path)), token);
        Ok(request.send().await?)
    }

    async fn read_json<T>(path: &str, response: Response) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            debug!(path, status = status.as_u16(), %message, "request rejected");
            return Err(ClientError::Api { status, message });
        }
        Ok(response.json().await?)
    }

    /// Register a new account.
    ///
    /// # Errors
    /// See [`post`](Self::post).
    pub async fn signup(
        &self,
        request: &SignupRequest,
        token: Option<&str>,
    ) -> Result<TokenResponse, ClientError> {
        self.post("auth/signup", request, token).await
    }

    /// Sign in to an existing account.
    ///
    /// # Errors
    /// See [`post`](Self::post).
    pub async fn signin(
        &self,
        request: &SigninRequest,
        token: Option<&str>,
    ) -> Result<TokenResponse, ClientError> {
        self.post("auth/signin", request, token).await
    }

    /// Create a tree owned by the authenticated account.
    ///
    /// # Errors
    /// See [`post`](Self::post).
    pub async fn create_tree(
        &self,
        request: &TreeCreate,
        token: Option<&str>,
    ) -> Result<TreeResponse, ClientError> {
        self.post("trees", request, token).await
    }

    /// # Errors
    /// See [`get`](Self::get).
    pub async fn get_tree(
        &self,
        tree_id: TreeId,
        token: Option<&str>,
    ) -> Result<TreeResponse, ClientError> {
        self.get(&format!("trees/{tree_id}"), token).await
    }

    /// Add a person to a tree.
    ///
    /// # Errors
    /// See [`post`](Self::post).
    pub async fn create_person(
        &self,
        tree_id: TreeId,
        person: &PersonCreate,
        token: Option<&str>,
    ) -> Result<PersonResponse, ClientError> {
        self.post(&format!("trees/{tree_id}/persons"), person, token)
            .await
    }

    /// List the people of a tree, failing on any non-success status.
    ///
    /// # Errors
    /// See [`get`](Self::get).
    pub async fn list_persons(
        &self,
        tree_id: TreeId,
        token: Option<&str>,
    ) -> Result<Vec<PersonResponse>, ClientError> {
        self.get(&format!("trees/{tree_id}/persons"), token).await
    }

    /// List the people of a tree, returning `None` when the server answers
    /// with a non-success status.
    ///
    /// # Errors
    /// Returns an error only when the request cannot be sent or a success
    /// reply does not decode.
    pub async fn try_list_persons(
        &self,
        tree_id: TreeId,
        token: Option<&str>,
    ) -> Result<Option<Vec<PersonResponse>>, ClientError> {
        let path = format!("trees/{tree_id}/persons");
        let response = self.send_get(&path, token).await?;
        if !response.status().is_success() {
            debug!(path = %path, status = response.status().as_u16(), "person list unavailable");
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Link two people of a tree.
    ///
    /// # Errors
    /// See [`post`](Self::post).
    pub async fn add_relationship(
        &self,
        tree_id: TreeId,
        relationship: &RelationshipCreate,
        token: Option<&str>,
    ) -> Result<RelationshipResponse, ClientError> {
        self.post(&format!("trees/{tree_id}/relationships"), relationship, token)
            .await
    }
}
