//! Backend API Wrappers
//!
//! Frontend bindings to the parking backend, organized by resource.

mod client;
mod error;
mod inflight;
mod parkings;
mod spots;
mod subscriptions;
mod cars;
mod persons;

use std::cell::RefCell;

use serde::Deserialize;

use crate::models::{Car, Parking, Person, PersonDetail, Spot, Statistics, Subscription};

pub use client::{segment, ApiClient};
pub use error::{ApiError, ErrorCode};

// Re-export all public items
pub use parkings::*;
pub use spots::*;
pub use subscriptions::*;
pub use cars::*;
pub use persons::*;

thread_local! {
    static CLIENT: RefCell<ApiClient> = RefCell::new(ApiClient::new(crate::config::DEFAULT_API_URL));
}

/// Point every wrapper at `base_url`
pub fn configure(base_url: &str) {
    log::info!("[Api] Using backend {}", base_url);
    CLIENT.with(|c| *c.borrow_mut() = ApiClient::new(base_url));
}

pub(crate) fn client() -> ApiClient {
    CLIENT.with(|c| c.borrow().clone())
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Deserialize)]
pub struct ParkingsEnvelope {
    pub parkings: Vec<Parking>,
}

#[derive(Debug, Deserialize)]
pub struct ParkingEnvelope {
    pub parking: Parking,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsEnvelope {
    pub statistics: Statistics,
}

#[derive(Debug, Deserialize)]
pub struct SpotsEnvelope {
    pub spots: Vec<Spot>,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionsEnvelope {
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionEnvelope {
    pub subscription: Subscription,
}

#[derive(Debug, Deserialize)]
pub struct CarsEnvelope {
    pub cars: Vec<Car>,
}

#[derive(Debug, Deserialize)]
pub struct CarEnvelope {
    pub car: Car,
}

#[derive(Debug, Deserialize)]
pub struct PersonsEnvelope {
    pub persons: Vec<Person>,
}

#[derive(Debug, Deserialize)]
pub struct PersonEnvelope {
    pub person: Person,
}

#[derive(Debug, Deserialize)]
pub struct PersonDetailEnvelope {
    pub person: PersonDetail,
}
