//! User-visible strings for settled submissions. Each mapping is a total
//! function over the code enum; every error path ends in one of these.

use crate::account::client::AccountRecord;
use crate::account::error::{ApiError, ErrorCode};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

pub fn signin_success(record: &AccountRecord) -> String {
    format!("Signed in. Account id: {}", record.id)
}

pub fn signup_success(record: &AccountRecord) -> String {
    format!("Account created. Account id: {}", record.id)
}

pub fn signin_failure(error: &ApiError) -> String {
    let ApiError::Api { code, message } = error else {
        return GENERIC_FAILURE.to_string();
    };
    match code {
        ErrorCode::NoSuchUser => "No account with that name exists. Sign up first.".to_string(),
        ErrorCode::InvalidArgument => "Some of the entered values were not accepted.".to_string(),
        ErrorCode::Network => {
            "Could not reach the account service. Check your connection.".to_string()
        }
        ErrorCode::DuplicateAccount | ErrorCode::Other(_) => fallback("Sign-in failed", message),
    }
}

pub fn signup_failure(error: &ApiError) -> String {
    let ApiError::Api { code, message } = error else {
        return GENERIC_FAILURE.to_string();
    };
    match code {
        ErrorCode::DuplicateAccount => {
            "An account with that name already exists. Sign in instead.".to_string()
        }
        ErrorCode::InvalidArgument => "Some of the entered values were not accepted.".to_string(),
        ErrorCode::Network => {
            "Could not reach the account service. Check your connection.".to_string()
        }
        ErrorCode::NoSuchUser | ErrorCode::Other(_) => fallback("Sign-up failed", message),
    }
}

// An absent server message renders a fixed clause rather than an empty one.
fn fallback(prefix: &str, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(detail) if !detail.is_empty() => format!("{prefix}: {detail}"),
        _ => format!("{prefix}: unknown error"),
    }
}
