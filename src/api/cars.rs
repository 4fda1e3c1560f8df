//! Car Commands
//!
//! Frontend bindings for car endpoints.

use serde::Serialize;

use crate::models::Car;
use super::{client, segment, ApiError, CarEnvelope, CarsEnvelope};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCarArgs {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub owner: String,
}

// ========================
// Commands
// ========================

pub async fn list_cars() -> Result<Vec<Car>, ApiError> {
    let envelope: CarsEnvelope = client().get("/cars").await?;
    Ok(envelope.cars)
}

pub async fn get_car(id: &str) -> Result<Car, ApiError> {
    let envelope: CarEnvelope = client().get(&format!("/cars/{}", segment(id))).await?;
    Ok(envelope.car)
}

pub async fn create_car(args: &CreateCarArgs) -> Result<Car, ApiError> {
    let envelope: CarEnvelope = client().post("/cars/create", args).await?;
    Ok(envelope.car)
}
