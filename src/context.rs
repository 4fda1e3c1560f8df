//! Parking Context
//!
//! State shared by the parking layout with its child pages, provided via
//! the Leptos Context API.

use leptos::prelude::*;

use crate::load::LoadState;
use crate::models::Parking;

/// Current parking, provided by `ParkingLayout`
#[derive(Clone, Copy)]
pub struct ParkingContext {
    /// Route parameter `:id`
    pub parking_id: Memo<String>,
    /// Parking record as fetched by the layout
    pub parking: RwSignal<LoadState<Parking>>,
}

impl ParkingContext {
    pub fn new(parking_id: Memo<String>) -> Self {
        Self {
            parking_id,
            parking: RwSignal::new(LoadState::Idle),
        }
    }

    /// Parking name, `--` while unknown or on error
    pub fn name(&self) -> String {
        self.parking
            .with(|state| state.value().map(|p| p.name.clone()))
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn levels(&self) -> u32 {
        self.parking.with(|state| state.value().map(|p| p.levels).unwrap_or(0))
    }
}

pub fn use_parking() -> ParkingContext {
    expect_context::<ParkingContext>()
}
