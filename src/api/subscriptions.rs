//! Subscription Commands
//!
//! Frontend bindings for subscription endpoints, scoped by parking.

use serde::Serialize;

use crate::models::Subscription;
use super::{client, segment, ApiError, SubscriptionEnvelope, SubscriptionsEnvelope};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSubscriptionArgs {
    pub spot: String,
    pub owner: String,
}

// ========================
// Commands
// ========================

pub async fn list_subscriptions(parking_id: &str) -> Result<Vec<Subscription>, ApiError> {
    let envelope: SubscriptionsEnvelope = client()
        .get(&format!("/parkings/{}/subscriptions", segment(parking_id)))
        .await?;
    Ok(envelope.subscriptions)
}

pub async fn create_subscription(parking_id: &str, args: &CreateSubscriptionArgs) -> Result<Subscription, ApiError> {
    let envelope: SubscriptionEnvelope = client()
        .post(&format!("/parkings/{}/subscriptions/create", segment(parking_id)), args)
        .await?;
    Ok(envelope.subscription)
}

pub async fn delete_subscription(parking_id: &str, subscription_id: &str) -> Result<(), ApiError> {
    client()
        .post_empty(&format!(
            "/parkings/{}/subscriptions/{}/delete",
            segment(parking_id),
            segment(subscription_id)
        ))
        .await
}
