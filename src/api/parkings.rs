//! Parking Commands
//!
//! Frontend bindings for parking-related backend endpoints.

use serde::Serialize;

use crate::models::{Parking, Statistics};
use super::{client, segment, ApiError, ParkingEnvelope, ParkingsEnvelope, StatisticsEnvelope};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateParkingArgs {
    pub name: String,
    pub address: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub city: String,
    pub levels: u32,
    #[serde(rename = "spotsPerLevel")]
    pub spots_per_level: u32,
}

// ========================
// Commands
// ========================

pub async fn list_parkings() -> Result<Vec<Parking>, ApiError> {
    let envelope: ParkingsEnvelope = client().get("/parkings").await?;
    Ok(envelope.parkings)
}

pub async fn get_parking(id: &str) -> Result<Parking, ApiError> {
    let envelope: ParkingEnvelope = client().get(&format!("/parkings/{}", segment(id))).await?;
    Ok(envelope.parking)
}

pub async fn create_parking(args: &CreateParkingArgs) -> Result<Parking, ApiError> {
    let envelope: ParkingEnvelope = client().post("/parkings/create", args).await?;
    Ok(envelope.parking)
}

pub async fn delete_parking(id: &str) -> Result<(), ApiError> {
    client().post_empty(&format!("/parkings/{}/delete", segment(id))).await
}

pub async fn get_statistics(parking_id: &str) -> Result<Statistics, ApiError> {
    let envelope: StatisticsEnvelope = client()
        .get(&format!("/parkings/{}/statistics", segment(parking_id)))
        .await?;
    Ok(envelope.statistics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_use_backend_field_names() {
        let args = CreateParkingArgs {
            name: "Centre".into(),
            address: "1 rue de Rivoli".into(),
            zip_code: "75001".into(),
            city: "Paris".into(),
            levels: 2,
            spots_per_level: 10,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["zipCode"], "75001");
        assert_eq!(json["spotsPerLevel"], 10);
        assert!(json.get("zip_code").is_none());
    }
}
