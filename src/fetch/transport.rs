//! HTTP transport
//!
//! Every page is requested with a form-encoded POST to the same endpoint;
//! the form fields select between the catalog of a cycle and the timetable
//! of a program. The core only sees the response body.

use crate::config::HttpConfig;
use crate::model::{ProgramId, SemesterCycle};
use crate::TransportError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// A page request understood by the timetable endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormRequest {
    /// The program catalog of one semester cycle
    Catalog(SemesterCycle),
    /// The weekly timetable of one program
    Timetable(ProgramId),
}

impl FormRequest {
    /// Returns the form fields to post for this request
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Catalog(cycle) => vec![
                ("Lage", cycle.form_value().to_string()),
                ("fkt", "SR".to_string()),
                ("clear", "false".to_string()),
            ],
            Self::Timetable(id) => vec![
                ("fkt", "SR".to_string()),
                ("SR", id.to_string()),
                ("mode", "SR".to_string()),
                ("clear", "false".to_string()),
            ],
        }
    }
}

/// The outbound boundary: one request in, one raw document out
///
/// Implementations own connections, timeouts and headers. Errors are passed
/// to the caller unchanged and never retried.
pub trait Transport {
    fn fetch(
        &self,
        request: &FormRequest,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The outbound request configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Transport`] posting forms with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport from the `[http]` configuration section
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = build_http_client(config).map_err(|source| TransportError::Http {
            url: config.endpoint.clone(),
            source,
        })?;
        Ok(Self::with_client(client, &config.endpoint))
    }

    /// Creates a transport around an existing client
    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, request: &FormRequest) -> Result<String, TransportError> {
        tracing::debug!("POST {} {:?}", self.endpoint, request);

        let http_error = |source| TransportError::Http {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .form(&request.form_params())
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(http_error)
    }
}
