//! Frontend Models
//!
//! Data structures matching backend entities.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Either a bare id or the expanded object, depending on the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Expanded(T),
    Id(String),
}

/// Anything addressable by an opaque backend id
pub trait HasId {
    fn id(&self) -> &str;
}

impl<T: HasId> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Expanded(inner) => inner.id(),
            Ref::Id(id) => id,
        }
    }

    pub fn expanded(&self) -> Option<&T> {
        match self {
            Ref::Expanded(inner) => Some(inner),
            Ref::Id(_) => None,
        }
    }
}

/// Parking data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parking {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub levels: u32,
    pub spots_per_level: u32,
    #[serde(default)]
    pub available_spots: u32,
    #[serde(default)]
    pub spots: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl Parking {
    pub fn capacity(&self) -> u32 {
        self.levels.saturating_mul(self.spots_per_level)
    }
}

/// Person data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO date, `YYYY-MM-DD`
    pub birth_date: String,
    #[serde(default)]
    pub cars: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_date_parsed(&self) -> Option<NaiveDate> {
        parse_birth_date(&self.birth_date)
    }
}

/// Accepts a bare date or a full timestamp and keeps the date part
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl PersonSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl HasId for PersonSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotSummary {
    pub id: String,
    pub tag: String,
    #[serde(default)]
    pub level: Option<u32>,
}

impl HasId for SpotSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSummary {
    pub id: String,
    pub name: String,
}

/// Car data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub owner: Ref<PersonSummary>,
    #[serde(default)]
    pub spot: Option<Ref<SpotSummary>>,
    #[serde(default)]
    pub parking: Option<ParkingSummary>,
    #[serde(default)]
    pub bad_parked: bool,
}

/// Spot data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub level: u32,
    pub spot: u32,
    pub tag: String,
    /// Occupying car, as sent by the backend or as patched after parking
    #[serde(default)]
    pub car: Option<String>,
    pub is_taken: bool,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
}

/// Subscription data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub person: Ref<PersonSummary>,
    pub spot: Ref<SpotSummary>,
    #[serde(default)]
    pub parking: Option<String>,
}

impl Subscription {
    /// Display tag of the reserved spot, falling back to its id
    pub fn spot_tag(&self) -> &str {
        match &self.spot {
            Ref::Expanded(spot) => &spot.tag,
            Ref::Id(id) => id,
        }
    }

    pub fn person_name(&self) -> String {
        match &self.person {
            Ref::Expanded(person) => person.full_name(),
            Ref::Id(id) => id.clone(),
        }
    }
}

/// Subscription as nested in the person detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSubscription {
    pub id: String,
    pub spot: SpotSummary,
    pub parking: ParkingSummary,
}

/// Car as nested in the person detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCar {
    pub id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    #[serde(default)]
    pub spot: Option<SpotSummary>,
    #[serde(default)]
    pub parking: Option<ParkingSummary>,
    #[serde(default)]
    pub bad_parked: bool,
}

/// Person with expanded cars and subscriptions (`GET /persons/:id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetail {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub subscriptions: Vec<PersonSubscription>,
    #[serde(default)]
    pub cars: Vec<PersonCar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadParkedSpot {
    pub id: String,
    pub tag: String,
    pub owner: PersonSummary,
}

/// A car occupying a spot reserved for someone else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadParkedCar {
    pub id: String,
    pub brand: String,
    pub color: String,
    pub license_plate: String,
    pub owner: PersonSummary,
    pub spot: BadParkedSpot,
}

/// Aggregate returned by `GET /parkings/:id/statistics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_spots: u32,
    pub total_levels: u32,
    pub total_cars: u32,
    pub total_subscriptions: u32,
    pub available_spots: u32,
    pub taken_spots: u32,
    pub reserved_spots: u32,
    pub not_reserved_spots: u32,
    #[serde(default)]
    pub car_brands: BTreeMap<String, u32>,
    #[serde(default)]
    pub bad_parked: Vec<BadParkedCar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_owner_accepts_id_or_object() {
        let by_id: Car = serde_json::from_str(
            r#"{"id":"c1","license_plate":"AB123CD","brand":"Renault","model":"Clio",
                "color":"Blanc","owner":"p1","spot":null}"#,
        )
        .unwrap();
        assert_eq!(by_id.owner.id(), "p1");
        assert!(by_id.owner.expanded().is_none());
        assert!(!by_id.bad_parked);

        let expanded: Car = serde_json::from_str(
            r#"{"id":"c1","license_plate":"AB123CD","brand":"Renault","model":"Clio",
                "color":"Blanc","owner":{"id":"p1","first_name":"Ada","last_name":"Lovelace"},
                "spot":{"id":"s1","tag":"A-01"},"parking":{"id":"k1","name":"Centre"},
                "bad_parked":true}"#,
        )
        .unwrap();
        assert_eq!(expanded.owner.id(), "p1");
        assert_eq!(expanded.owner.expanded().map(|p| p.full_name()), Some("Ada Lovelace".to_string()));
        assert!(expanded.bad_parked);
    }

    #[test]
    fn test_parking_capacity_and_defaults() {
        let parking: Parking = serde_json::from_str(
            r#"{"id":"k1","name":"Centre","address":"1 rue","city":"Paris",
                "zip_code":"75008","levels":3,"spots_per_level":20}"#,
        )
        .unwrap();
        assert_eq!(parking.capacity(), 60);
        assert_eq!(parking.available_spots, 0);
        assert!(parking.spots.is_empty());
    }

    #[test]
    fn test_capacity_saturates_on_huge_counts() {
        let parking: Parking = serde_json::from_str(
            r#"{"id":"k2","name":"Tower","address":"2 rue","city":"Lyon",
                "zip_code":"69001","levels":4294967295,"spots_per_level":2}"#,
        )
        .unwrap();
        assert_eq!(parking.capacity(), u32::MAX);
    }

    #[test]
    fn test_parse_birth_date_accepts_timestamps() {
        assert_eq!(parse_birth_date("1990-04-12"), NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(parse_birth_date("1990-04-12T00:00:00.000Z"), NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(parse_birth_date("12/04/1990"), None);
    }
}
