//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! top-level collections shown on the home page; parking-scoped lists stay
//! local to their page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collections::{insert_car, insert_parking, insert_person, remove_by_id};
use crate::load::LoadState;
use crate::models::{Car, Parking, Person};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All parkings
    pub parkings: LoadState<Vec<Parking>>,
    /// All cars
    pub cars: LoadState<Vec<Car>>,
    /// All persons
    pub persons: LoadState<Vec<Person>>,
    /// Version counters, increment to trigger reload
    pub parkings_version: u32,
    pub cars_version: u32,
    pub persons_version: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Insert a created parking, sorted by name. Ignored until the list has loaded.
pub fn store_insert_parking(store: &AppStore, parking: Parking) {
    if let Some(list) = store.parkings().write().value_mut() {
        insert_parking(list, parking);
    }
}

/// Insert a created car, sorted by license plate
pub fn store_insert_car(store: &AppStore, car: Car) {
    if let Some(list) = store.cars().write().value_mut() {
        insert_car(list, car);
    }
}

/// Insert a created person, sorted by first name
pub fn store_insert_person(store: &AppStore, person: Person) {
    if let Some(list) = store.persons().write().value_mut() {
        insert_person(list, person);
    }
}

/// Remove a parking from the store by ID
pub fn store_remove_parking(store: &AppStore, parking_id: &str) {
    if let Some(list) = store.parkings().write().value_mut() {
        remove_by_id(list, parking_id, |p| p.id.as_str());
    }
}

pub fn invalidate_parkings(store: &AppStore) {
    *store.parkings_version().write() += 1;
}

pub fn invalidate_cars(store: &AppStore) {
    *store.cars_version().write() += 1;
}

pub fn invalidate_persons(store: &AppStore) {
    *store.persons_version().write() += 1;
}
