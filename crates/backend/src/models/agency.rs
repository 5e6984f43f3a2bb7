//! Advertising agencies.

use airdesk_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Commission as a percentage, e.g. `15.0`.
    #[serde(default)]
    pub commission_rate: Option<f64>,
}

/// DTO for creating or replacing an agency.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AgencyInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub contact_name: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_rate: Option<f64>,
}
