//! Operator Feedback
//!
//! Maps backend failures to inline field errors or toast messages, per
//! action.

use crate::api::{ApiError, ErrorCode};

/// Mutating operations the UI can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateParking,
    CreateCar,
    CreatePerson,
    CreateSubscription,
    Park,
    Unpark,
    DeleteParking,
    DeleteSubscription,
}

impl Action {
    fn failure_title(self) -> &'static str {
        match self {
            Action::CreateParking => "Unable to create the parking",
            Action::CreateCar => "Unable to create the car",
            Action::CreatePerson => "Unable to create the person",
            Action::CreateSubscription => "Unable to create the subscription",
            Action::Park => "Unable to park the car",
            Action::Unpark => "Unable to remove the car",
            Action::DeleteParking => "Unable to delete the parking",
            Action::DeleteSubscription => "Unable to delete the subscription",
        }
    }
}

/// Toast content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

/// Form field that owns `code` for `action`, if any
pub fn field_for(action: Action, code: &ErrorCode) -> Option<&'static str> {
    match (action, code) {
        (Action::CreateParking, ErrorCode::ParkingAlreadyExists) => Some("name"),
        (Action::CreateCar, ErrorCode::CarAlreadyExists) => Some("license_plate"),
        (Action::CreateCar, ErrorCode::OwnerNotFound) => Some("owner"),
        (Action::CreateSubscription, ErrorCode::PersonNotFound | ErrorCode::OwnerNotFound) => Some("owner"),
        (Action::CreateSubscription, ErrorCode::SpotNotFound | ErrorCode::SpotAlreadyReserved) => Some("spot"),
        _ => None,
    }
}

/// Inline message for a field-mapped code; `submitted` is the offending value
pub fn field_message(code: &ErrorCode, submitted: &str) -> String {
    match code {
        ErrorCode::ParkingAlreadyExists => format!("The parking \"{}\" already exists", submitted),
        ErrorCode::CarAlreadyExists => format!("A car with license plate \"{}\" already exists", submitted),
        ErrorCode::OwnerNotFound | ErrorCode::PersonNotFound => "This person does not exist".to_string(),
        ErrorCode::SpotNotFound => "This spot does not exist".to_string(),
        ErrorCode::SpotAlreadyReserved => "This spot is already reserved".to_string(),
        other => other.to_string(),
    }
}

/// Toast for a failed `action`
pub fn describe(action: Action, err: &ApiError) -> Notice {
    let title = action.failure_title();
    let message = match (action, err.code()) {
        (Action::Park | Action::Unpark, Some(code)) => match code {
            ErrorCode::ParkingNotFound => "The parking was not found. Please try again.".to_string(),
            ErrorCode::SpotNotFound => "The spot was not found. Please try again.".to_string(),
            ErrorCode::NoData => "Please fill in every field.".to_string(),
            ErrorCode::CarNotFound => "The car was not found. Please try again.".to_string(),
            ErrorCode::CarAlreadyParked => "The car is already parked.".to_string(),
            ErrorCode::SpotAlreadyTaken => "The spot is already taken.".to_string(),
            ErrorCode::SpotNotTaken => "No car is parked on this spot.".to_string(),
            _ => "An error occurred. Please try again.".to_string(),
        },
        (Action::DeleteParking, _) => "An error occurred while deleting the parking. Please try again.".to_string(),
        (Action::DeleteSubscription, Some(ErrorCode::SubscriptionNotFound)) => {
            "The subscription no longer exists.".to_string()
        }
        _ => format!("An error occurred: {}", err.code_label()),
    };
    Notice::new(title, message)
}

/// What a drawer does after a failed submit; it stays open either way
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerOutcome {
    FieldError { field: &'static str, message: String },
    Toast(Notice),
}

/// Route a create failure to a field or to a toast
pub fn resolve_failure(action: Action, err: &ApiError, submitted: impl Fn(&str) -> String) -> DrawerOutcome {
    match err.code().and_then(|code| field_for(action, code).map(|field| (field, code))) {
        Some((field, code)) => DrawerOutcome::FieldError {
            field,
            message: field_message(code, &submitted(field)),
        },
        None => DrawerOutcome::Toast(describe(action, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(code: &str) -> ApiError {
        ApiError::from_response(400, &format!(r#"{{"message":"{}"}}"#, code))
    }

    #[test]
    fn test_duplicate_parking_goes_to_name_field() {
        let err = backend("PARKING_ALREADY_EXISTS");
        let outcome = resolve_failure(Action::CreateParking, &err, |field| {
            assert_eq!(field, "name");
            "Centre".to_string()
        });
        assert_eq!(
            outcome,
            DrawerOutcome::FieldError {
                field: "name",
                message: "The parking \"Centre\" already exists".to_string(),
            }
        );
    }

    #[test]
    fn test_car_codes_map_to_fields() {
        assert_eq!(field_for(Action::CreateCar, &ErrorCode::CarAlreadyExists), Some("license_plate"));
        assert_eq!(field_for(Action::CreateCar, &ErrorCode::OwnerNotFound), Some("owner"));
        assert_eq!(field_for(Action::CreatePerson, &ErrorCode::OwnerNotFound), None);
    }

    #[test]
    fn test_unmapped_code_shows_generic_toast() {
        let err = backend("DATABASE_LOCKED");
        match resolve_failure(Action::CreatePerson, &err, |_| String::new()) {
            DrawerOutcome::Toast(notice) => {
                assert_eq!(notice.title, "Unable to create the person");
                assert!(notice.message.contains("DATABASE_LOCKED"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_park_taxonomy() {
        let cases = [
            ("SPOT_ALREADY_TAKEN", "The spot is already taken."),
            ("CAR_ALREADY_PARKED", "The car is already parked."),
            ("CAR_NOT_FOUND", "The car was not found. Please try again."),
            ("NO_DATA", "Please fill in every field."),
            ("SOMETHING_ELSE", "An error occurred. Please try again."),
        ];
        for (code, expected) in cases {
            assert_eq!(describe(Action::Park, &backend(code)).message, expected);
        }
        assert_eq!(
            describe(Action::Unpark, &backend("SPOT_NOT_TAKEN")).message,
            "No car is parked on this spot."
        );
    }

    #[test]
    fn test_network_failure_uses_unknown_label() {
        let notice = describe(Action::CreateCar, &ApiError::Network("offline".into()));
        assert!(notice.message.contains("UNKNOWN_ERROR"));
    }
}
