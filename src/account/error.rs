use std::fmt;
use thiserror::Error;

/// Machine-readable codes the account service may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
    Network,
    NoSuchUser,
    DuplicateAccount,
    Other(String),
}

impl ErrorCode {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "invalid_argument" => Self::InvalidArgument,
            "network" => Self::Network,
            "account:no_such_user" => Self::NoSuchUser,
            "account:duplicate" => Self::DuplicateAccount,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Network => "network",
            Self::NoSuchUser => "account:no_such_user",
            Self::DuplicateAccount => "account:duplicate",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with a structured error envelope.
    #[error("account service error: {code}")]
    Api {
        code: ErrorCode,
        message: Option<String>,
    },
    /// Anything the workflow has no mapping for: malformed bodies, panics in
    /// the client, broken invariants. Rendered as one generic failure.
    #[error("unexpected account client failure: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn api(code: ErrorCode, message: Option<String>) -> Self {
        Self::Api { code, message }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Api {
            code: ErrorCode::Network,
            message: Some(detail.into()),
        }
    }
}
