//! Form Validation
//!
//! Synchronous, per-field validators for the creation drawers. A form that
//! fails validation never reaches the backend.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::api::{CreateCarArgs, CreateParkingArgs, CreatePersonArgs, CreateSubscriptionArgs};

const REQUIRED: &str = "This field is required";

static PLATE_RE: OnceLock<Regex> = OnceLock::new();

fn plate_regex() -> &'static Regex {
    PLATE_RE.get_or_init(|| Regex::new(r"^[A-Z]{2}[0-9]{3}[A-Z]{2}$").expect("static plate pattern"))
}

pub fn is_valid_plate(plate: &str) -> bool {
    plate_regex().is_match(plate)
}

pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

/// Field name -> message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn require(errors: &mut FormErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.set(field, REQUIRED);
        false
    } else {
        true
    }
}

/// Parses a whole number >= 1
fn positive_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

// ========================
// Parking
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ParkingForm {
    pub name: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub levels: String,
    pub spots_per_level: String,
}

impl Default for ParkingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            zip_code: String::new(),
            city: String::new(),
            levels: "1".to_string(),
            spots_per_level: "1".to_string(),
        }
    }
}

impl ParkingForm {
    /// Total spots when both counts are valid
    pub fn capacity_preview(&self) -> Option<u32> {
        let levels = positive_count(&self.levels)?;
        let per_level = positive_count(&self.spots_per_level)?;
        levels.checked_mul(per_level)
    }

    /// Validate and build the create request
    pub fn submit_plan(&self) -> Result<CreateParkingArgs, FormErrors> {
        let errors = validate_parking(self);
        errors.into_result(|| CreateParkingArgs {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            city: self.city.trim().to_string(),
            levels: positive_count(&self.levels).unwrap_or(1),
            spots_per_level: positive_count(&self.spots_per_level).unwrap_or(1),
        })
    }
}

pub fn validate_parking(form: &ParkingForm) -> FormErrors {
    let mut errors = FormErrors::new();
    if form.name.trim().chars().count() < 3 {
        errors.set("name", "The parking name must be at least 3 characters long");
    }
    require(&mut errors, "address", &form.address);
    if require(&mut errors, "zip_code", &form.zip_code) && !is_valid_zip(form.zip_code.trim()) {
        errors.set("zip_code", "The zip code is invalid");
    }
    require(&mut errors, "city", &form.city);
    if positive_count(&form.levels).is_none() {
        errors.set("levels", "The number of levels must be a whole number greater than 0");
    }
    if positive_count(&form.spots_per_level).is_none() {
        errors.set("spots_per_level", "The number of spots per level must be a whole number greater than 0");
    }
    errors
}

// ========================
// Car
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    /// Owner person id
    pub owner: String,
}

impl CarForm {
    pub fn submit_plan(&self) -> Result<CreateCarArgs, FormErrors> {
        let errors = validate_car(self);
        errors.into_result(|| CreateCarArgs {
            license_plate: self.license_plate.trim().to_string(),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            color: self.color.trim().to_string(),
            owner: self.owner.clone(),
        })
    }
}

pub fn validate_car(form: &CarForm) -> FormErrors {
    let mut errors = FormErrors::new();
    if require(&mut errors, "license_plate", &form.license_plate) && !is_valid_plate(form.license_plate.trim()) {
        errors.set("license_plate", "The license plate must look like AA123AA");
    }
    require(&mut errors, "brand", &form.brand);
    require(&mut errors, "model", &form.model);
    require(&mut errors, "color", &form.color);
    require(&mut errors, "owner", &form.owner);
    errors
}

// ========================
// Person
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub birth_date: String,
}

impl PersonForm {
    pub fn submit_plan(&self) -> Result<CreatePersonArgs, FormErrors> {
        let errors = validate_person(self);
        errors.into_result(|| CreatePersonArgs {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
        })
    }
}

pub fn validate_person(form: &PersonForm) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, "first_name", &form.first_name);
    require(&mut errors, "last_name", &form.last_name);
    // Strict YYYY-MM-DD over the whole input
    if require(&mut errors, "birth_date", &form.birth_date)
        && NaiveDate::parse_from_str(form.birth_date.trim(), "%Y-%m-%d").is_err()
    {
        errors.set("birth_date", "The date must be formatted as YYYY-MM-DD");
    }
    errors
}

// ========================
// Subscription
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionForm {
    pub spot: String,
    pub owner: String,
}

impl SubscriptionForm {
    pub fn submit_plan(&self) -> Result<CreateSubscriptionArgs, FormErrors> {
        let errors = validate_subscription(self);
        errors.into_result(|| CreateSubscriptionArgs {
            spot: self.spot.clone(),
            owner: self.owner.clone(),
        })
    }
}

pub fn validate_subscription(form: &SubscriptionForm) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, "spot", &form.spot);
    require(&mut errors, "owner", &form.owner);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_car() -> CarForm {
        CarForm {
            license_plate: "AB123CD".into(),
            brand: "Renault".into(),
            model: "Clio".into(),
            color: "Blanc".into(),
            owner: "p1".into(),
        }
    }

    fn valid_parking() -> ParkingForm {
        ParkingForm {
            name: "Parking des Halles".into(),
            address: "Rue Rambuteau".into(),
            zip_code: "75001".into(),
            city: "Paris".into(),
            levels: "3".into(),
            spots_per_level: "25".into(),
        }
    }

    #[test]
    fn test_dashed_plate_is_rejected_before_submit() {
        let form = CarForm { license_plate: "AB-123-CD".into(), ..valid_car() };
        let errors = form.submit_plan().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("license_plate").is_some());
    }

    #[test]
    fn test_plate_pattern() {
        assert!(is_valid_plate("AB123CD"));
        assert!(!is_valid_plate("ab123cd"));
        assert!(!is_valid_plate("AB1234CD"));
        assert!(!is_valid_plate(""));
        let args = valid_car().submit_plan().unwrap();
        assert_eq!(args.license_plate, "AB123CD");
    }

    #[test]
    fn test_zip_code_must_be_five_digits() {
        for bad in ["7500", "ABCDE", "750011", "75 01"] {
            let form = ParkingForm { zip_code: bad.into(), ..valid_parking() };
            let errors = validate_parking(&form);
            assert_eq!(errors.get("zip_code"), Some("The zip code is invalid"), "zip {:?}", bad);
            assert!(form.submit_plan().is_err());
        }
        let empty = ParkingForm { zip_code: String::new(), ..valid_parking() };
        assert_eq!(validate_parking(&empty).get("zip_code"), Some(REQUIRED));
    }

    #[test]
    fn test_valid_parking_builds_trimmed_args() {
        let form = ParkingForm { name: "  Parking des Halles ".into(), ..valid_parking() };
        let args = form.submit_plan().unwrap();
        assert_eq!(args.name, "Parking des Halles");
        assert_eq!(args.levels, 3);
        assert_eq!(args.spots_per_level, 25);
        assert_eq!(form.capacity_preview(), Some(75));
    }

    #[test]
    fn test_parking_counts_and_name_length() {
        let form = ParkingForm {
            name: "PK".into(),
            levels: "0".into(),
            spots_per_level: "2.5".into(),
            ..valid_parking()
        };
        let errors = validate_parking(&form);
        assert!(errors.get("name").is_some());
        assert!(errors.get("levels").is_some());
        assert!(errors.get("spots_per_level").is_some());
        assert_eq!(form.capacity_preview(), None);
    }

    #[test]
    fn test_person_requires_iso_date() {
        let form = PersonForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: "10/12/1815".into(),
        };
        assert!(validate_person(&form).get("birth_date").is_some());
        let ok = PersonForm { birth_date: "1815-12-10".into(), ..form };
        assert!(ok.submit_plan().is_ok());
    }

    #[test]
    fn test_birth_date_rejects_trailing_text() {
        let form = PersonForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: "1815-12-10 not a date".into(),
        };
        assert_eq!(
            validate_person(&form).get("birth_date"),
            Some("The date must be formatted as YYYY-MM-DD")
        );
        assert!(form.submit_plan().is_err());
    }

    #[test]
    fn test_subscription_requires_spot_and_owner() {
        let errors = validate_subscription(&SubscriptionForm::default());
        assert_eq!(errors.len(), 2);
        let ok = SubscriptionForm { spot: "s1".into(), owner: "p1".into() };
        assert_eq!(ok.submit_plan().unwrap().spot, "s1");
    }
}
