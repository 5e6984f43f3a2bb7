//! Sales teams and their representatives.

use airdesk_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesTeam {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub reps: Vec<SalesRep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: EntityId,
    #[serde(default)]
    pub team_id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// DTO for creating or replacing a sales team.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SalesTeamInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub manager_name: Option<String>,
}

/// DTO for adding a representative to a team.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSalesRep {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
}
