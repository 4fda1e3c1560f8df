//! Spot Commands
//!
//! Frontend bindings for spot listing and park/unpark actions.

use serde::Serialize;

use crate::models::{Car, Spot};
use super::{client, segment, ApiError, CarEnvelope, SpotsEnvelope};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
struct ParkArgs<'a> {
    license_plate: &'a str,
}

fn spot_path(parking_id: &str, spot_id: &str, action: &str) -> String {
    format!("/parkings/{}/spots/{}/{}", segment(parking_id), segment(spot_id), action)
}

/// Plates are sent upper-cased and trimmed
pub fn normalize_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ========================
// Commands
// ========================

pub async fn list_spots(parking_id: &str, level: u32) -> Result<Vec<Spot>, ApiError> {
    let envelope: SpotsEnvelope = client()
        .get(&format!("/parkings/{}/spots?level={}", segment(parking_id), level))
        .await?;
    Ok(envelope.spots)
}

pub async fn list_available_spots(parking_id: &str) -> Result<Vec<Spot>, ApiError> {
    let envelope: SpotsEnvelope = client()
        .get(&format!("/parkings/{}/spots/available", segment(parking_id)))
        .await?;
    Ok(envelope.spots)
}

/// Park the car with `license_plate` on a spot; returns the parked car
pub async fn park(parking_id: &str, spot_id: &str, license_plate: &str) -> Result<Car, ApiError> {
    let plate = normalize_plate(license_plate);
    let envelope: CarEnvelope = client()
        .post(&spot_path(parking_id, spot_id, "park"), &ParkArgs { license_plate: &plate })
        .await?;
    Ok(envelope.car)
}

pub async fn unpark(parking_id: &str, spot_id: &str) -> Result<(), ApiError> {
    client().post_empty(&spot_path(parking_id, spot_id, "unpark")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_paths() {
        assert_eq!(spot_path("p-1", "s-2", "park"), "/parkings/p-1/spots/s-2/park");
        assert_eq!(spot_path("p-1", "s-2", "unpark"), "/parkings/p-1/spots/s-2/unpark");
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  ab123cd "), "AB123CD");
    }
}
