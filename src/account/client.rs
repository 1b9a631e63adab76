use crate::account::error::{ApiError, ErrorCode};
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountRecord {
    pub id: String,
}

/// Boundary to the remote account service. The workflows only see this
/// trait; tests swap in doubles, the binary wires up [`HttpAccountClient`].
pub trait AccountClient: Send + Sync {
    fn create_account(&self, request: &CreateAccountRequest) -> Result<AccountRecord, ApiError>;
    fn sign_in(&self, request: &SignInRequest) -> Result<AccountRecord, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: WireError,
}

#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    #[serde(default)]
    message: Option<String>,
}

pub struct HttpAccountClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpAccountClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.timeout())
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<AccountRecord, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        match self.agent.post(&url).send_json(body) {
            Ok(response) => response
                .into_json::<AccountRecord>()
                .map_err(|err| ApiError::Unexpected(format!("malformed success body: {err}"))),
            Err(ureq::Error::Status(status, response)) => {
                Err(decode_error_response(status, response))
            }
            Err(ureq::Error::Transport(transport)) => Err(ApiError::network(transport.to_string())),
        }
    }
}

impl AccountClient for HttpAccountClient {
    fn create_account(&self, request: &CreateAccountRequest) -> Result<AccountRecord, ApiError> {
        self.post("/accounts", request)
    }

    fn sign_in(&self, request: &SignInRequest) -> Result<AccountRecord, ApiError> {
        self.post("/accounts/signin", request)
    }
}

fn decode_error_response(status: u16, response: ureq::Response) -> ApiError {
    decode_error_body(status, response.into_json::<ErrorEnvelope>().ok())
}

fn decode_error_body(status: u16, envelope: Option<ErrorEnvelope>) -> ApiError {
    match envelope {
        Some(envelope) => ApiError::api(
            ErrorCode::parse(&envelope.error.code),
            envelope.error.message,
        ),
        // No recognizable envelope: keep the status visible as an opaque code.
        None => ApiError::api(ErrorCode::Other(format!("http:{status}")), None),
    }
}
