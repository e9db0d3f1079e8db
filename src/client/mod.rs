//! Typed HTTP client for the admin API, shared by the console pages.

pub mod resources;
pub mod transport;

pub use resources::*;
pub use transport::*;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::error::ErrorBody;
use crate::models::{LoginRequest, LoginResponse};

/// Shown when the server gave no usable `erro`.
pub const FALLBACK_MESSAGE: &str = "Erro de comunicação com o servidor.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{erro} (HTTP {status})")]
    Api { status: u16, erro: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// The server's `erro` when there is one, otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { erro, .. } => erro.clone(),
            ClientError::Transport(_) | ClientError::Decode(_) => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Holds the bearer token and speaks JSON over a [`Transport`].
pub struct ApiClient<T> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    #[instrument(skip(self, body))]
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        let response = self
            .transport
            .send(method, path, self.token.as_deref(), payload)
            .await?;

        if !(200..300).contains(&response.status) {
            let erro = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.erro)
                .unwrap_or_else(|_| FALLBACK_MESSAGE.to_string());
            warn!(status = response.status, %erro, "API request failed");
            return Err(ClientError::Api {
                status: response.status,
                erro,
            });
        }

        debug!(status = response.status, "API request succeeded");
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.request::<(), R>(Method::Get, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.request::<(), R>(Method::Delete, path, None).await
    }

    /// Logs in and keeps the returned token for later requests.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };

        let response: LoginResponse = self.post("/login", &body).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }
}
