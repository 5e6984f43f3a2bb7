//! Advertising orders.

use airdesk_core::error::CoreError;
use airdesk_core::types::{EntityId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::QueryPairs;

/// An order as stored by the traffic backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(default)]
    pub order_number: Option<String>,
    pub advertiser: String,
    #[serde(default)]
    pub agency_id: Option<EntityId>,
    #[serde(default)]
    pub station_id: Option<EntityId>,
    #[serde(default)]
    pub sales_rep_id: Option<EntityId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub spot_duration_seconds: Option<i32>,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// DTO for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewOrder {
    #[validate(length(min = 1, max = 200))]
    pub advertiser: String,
    pub agency_id: Option<EntityId>,
    pub station_id: Option<EntityId>,
    pub sales_rep_id: Option<EntityId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1, max = 3600))]
    pub spot_duration_seconds: Option<i32>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl NewOrder {
    /// The flight must not end before it starts.
    pub fn check_flight_dates(&self) -> Result<(), CoreError> {
        check_flight(self.start_date, self.end_date)
    }
}

/// DTO for updating an order. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub advertiser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3600))]
    pub spot_duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl OrderUpdate {
    /// When both dates are present, the flight must not end before it starts.
    pub fn check_flight_dates(&self) -> Result<(), CoreError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => check_flight(start, end),
            _ => Ok(()),
        }
    }
}

fn check_flight(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        Err(CoreError::Validation(format!(
            "end_date {end} is before start_date {start}"
        )))
    } else {
        Ok(())
    }
}

/// Filters for listing orders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub status: Option<String>,
    pub station_id: Option<EntityId>,
    pub advertiser: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl OrderQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("status", self.status.as_deref())
            .opt("station_id", self.station_id)
            .opt("advertiser", self.advertiser.as_deref())
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .into_vec()
    }
}
