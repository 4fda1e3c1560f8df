//! Routed pages

pub mod home;
pub mod parking_layout;
pub mod parking_spots;
pub mod parking_subscriptions;
pub mod parking_statistics;
pub mod not_found;
