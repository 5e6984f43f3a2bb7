//! Artist profiles.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::QueryPairs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// DTO for editing a profile. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ArtistProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 2))]
    pub country: Option<String>,
}

/// Admin-only fields on top of the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ArtistAdminUpdate {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ArtistProfileUpdate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Filters for the admin artist listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistQuery {
    pub search: Option<String>,
    pub verified: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArtistQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("search", self.search.as_deref())
            .opt("verified", self.verified)
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_website_is_rejected() {
        let update = ArtistProfileUpdate {
            website: Some("not a url".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn admin_update_flattens_profile() {
        let update = ArtistAdminUpdate {
            profile: ArtistProfileUpdate {
                genre: Some("Folk".into()),
                ..Default::default()
            },
            is_verified: Some(true),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"genre": "Folk", "is_verified": true})
        );
    }
}
