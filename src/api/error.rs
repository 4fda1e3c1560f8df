//! API Errors
//!
//! Typed view of backend failures. The backend answers errors with
//! `{ "message": "<CODE>" }`; codes are parsed into [`ErrorCode`].

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Error codes emitted by the parking backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ErrorCode {
    ParkingAlreadyExists,
    ParkingNotFound,
    OwnerNotFound,
    PersonNotFound,
    CarAlreadyExists,
    CarNotFound,
    CarAlreadyParked,
    SpotNotFound,
    SpotAlreadyTaken,
    SpotNotTaken,
    SpotAlreadyReserved,
    SubscriptionNotFound,
    NoData,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::ParkingAlreadyExists => "PARKING_ALREADY_EXISTS",
            ErrorCode::ParkingNotFound => "PARKING_NOT_FOUND",
            ErrorCode::OwnerNotFound => "OWNER_NOT_FOUND",
            ErrorCode::PersonNotFound => "PERSON_NOT_FOUND",
            ErrorCode::CarAlreadyExists => "CAR_ALREADY_EXISTS",
            ErrorCode::CarNotFound => "CAR_NOT_FOUND",
            ErrorCode::CarAlreadyParked => "CAR_ALREADY_PARKED",
            ErrorCode::SpotNotFound => "SPOT_NOT_FOUND",
            ErrorCode::SpotAlreadyTaken => "SPOT_ALREADY_TAKEN",
            ErrorCode::SpotNotTaken => "SPOT_NOT_TAKEN",
            ErrorCode::SpotAlreadyReserved => "SPOT_ALREADY_RESERVED",
            ErrorCode::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            ErrorCode::NoData => "NO_DATA",
            ErrorCode::Other(code) => code,
        }
    }

    pub fn unknown() -> Self {
        ErrorCode::Other("UNKNOWN_ERROR".to_string())
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "PARKING_ALREADY_EXISTS" => ErrorCode::ParkingAlreadyExists,
            "PARKING_NOT_FOUND" => ErrorCode::ParkingNotFound,
            "OWNER_NOT_FOUND" => ErrorCode::OwnerNotFound,
            "PERSON_NOT_FOUND" => ErrorCode::PersonNotFound,
            "CAR_ALREADY_EXISTS" => ErrorCode::CarAlreadyExists,
            "CAR_NOT_FOUND" => ErrorCode::CarNotFound,
            "CAR_ALREADY_PARKED" => ErrorCode::CarAlreadyParked,
            "SPOT_NOT_FOUND" => ErrorCode::SpotNotFound,
            "SPOT_ALREADY_TAKEN" => ErrorCode::SpotAlreadyTaken,
            "SPOT_NOT_TAKEN" => ErrorCode::SpotNotTaken,
            "SPOT_ALREADY_RESERVED" => ErrorCode::SpotAlreadyReserved,
            "SUBSCRIPTION_NOT_FOUND" => ErrorCode::SubscriptionNotFound,
            "NO_DATA" => ErrorCode::NoData,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: ErrorCode,
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend answered {status}: {code}")]
    Backend { status: u16, code: ErrorCode },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a backend error from a status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let code = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| ErrorCode::unknown());
        ApiError::Backend { status, code }
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            ApiError::Backend { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Code shown to the operator in generic toasts
    pub fn code_label(&self) -> String {
        self.code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "UNKNOWN_ERROR".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_parse() {
        let err = ApiError::from_response(409, r#"{"message":"PARKING_ALREADY_EXISTS"}"#);
        assert_eq!(err.code(), Some(&ErrorCode::ParkingAlreadyExists));

        let err = ApiError::from_response(400, r#"{"message":"SPOT_NOT_TAKEN"}"#);
        assert_eq!(err.code(), Some(&ErrorCode::SpotNotTaken));
    }

    #[test]
    fn test_unknown_code_is_kept_verbatim() {
        let err = ApiError::from_response(500, r#"{"message":"DATABASE_LOCKED"}"#);
        assert_eq!(err.code(), Some(&ErrorCode::Other("DATABASE_LOCKED".to_string())));
        assert_eq!(err.code_label(), "DATABASE_LOCKED");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_unknown() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.code(), Some(&ErrorCode::unknown()));
        assert_eq!(ApiError::Network("offline".into()).code_label(), "UNKNOWN_ERROR");
    }
}
