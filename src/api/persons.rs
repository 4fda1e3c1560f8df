//! Person Commands
//!
//! Frontend bindings for person endpoints.

use serde::Serialize;

use crate::models::{Person, PersonDetail};
use super::{client, segment, ApiError, PersonDetailEnvelope, PersonEnvelope, PersonsEnvelope};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePersonArgs {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

// ========================
// Commands
// ========================

pub async fn list_persons() -> Result<Vec<Person>, ApiError> {
    let envelope: PersonsEnvelope = client().get("/persons").await?;
    Ok(envelope.persons)
}

pub async fn get_person(id: &str) -> Result<PersonDetail, ApiError> {
    let envelope: PersonDetailEnvelope = client().get(&format!("/persons/{}", segment(id))).await?;
    Ok(envelope.person)
}

pub async fn create_person(args: &CreatePersonArgs) -> Result<Person, ApiError> {
    let envelope: PersonEnvelope = client().post("/persons/create", args).await?;
    Ok(envelope.person)
}
