use crate::client::ClientError;
use crate::config::ClientConfig;
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Raw backend answer; status handling lives with the caller.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries one request to the backend. `path` is relative to the backend
/// root, e.g. `roomchange/approve/7`.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        (**self).send(method, path, body)
    }
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("{}: {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Config(format!("{path}: {e}")))?;

        let mut builder = self.client.request(method.into(), url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| ClientError::Network(e.to_string()))?
            .to_vec();

        tracing::debug!(method = method.as_str(), path, status, "backend call");
        Ok(ApiResponse { status, body })
    }
}
