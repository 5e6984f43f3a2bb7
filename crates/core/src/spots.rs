//! Naive spot generation for an order's flight dates.
//!
//! Produces one candidate spot per cadence step between the start and end
//! of the broadcast day, for every date in the requested range. The result
//! is submitted to the traffic backend as a single batch; placement rules,
//! conflict detection, and priority ordering all live in the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// First hour of the broadcast day that receives a spot.
pub const DAY_START_HOUR: u32 = 6;

/// Hour at which the broadcast day ends (exclusive).
pub const DAY_END_HOUR: u32 = 22;

/// Hours between consecutive generated spots.
pub const DEFAULT_CADENCE_HOURS: u32 = 2;

/// Largest cadence that still fits at least one spot in the broadcast day.
pub const MAX_CADENCE_HOURS: u32 = DAY_END_HOUR - DAY_START_HOUR;

/// Longest flight, in days, accepted for generation.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Spot length used when the order does not specify one.
pub const DEFAULT_SPOT_DURATION_SECONDS: i32 = 30;

/// Status assigned to every generated spot.
pub const SPOT_STATUS_SCHEDULED: &str = "scheduled";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parameters for a generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_cadence")]
    pub cadence_hours: u32,
    #[serde(default = "default_duration")]
    pub duration_seconds: i32,
}

fn default_cadence() -> u32 {
    DEFAULT_CADENCE_HOURS
}

fn default_duration() -> i32 {
    DEFAULT_SPOT_DURATION_SECONDS
}

/// A spot that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotDraft {
    pub order_id: EntityId,
    pub station_id: Option<EntityId>,
    pub scheduled_at: Timestamp,
    pub duration_seconds: i32,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Validate a generation request without producing any spots.
pub fn validate_request(request: &SpotRequest) -> Result<(), CoreError> {
    if request.end_date < request.start_date {
        return Err(CoreError::Validation(format!(
            "end_date {} is before start_date {}",
            request.end_date, request.start_date
        )));
    }

    let days = (request.end_date - request.start_date).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(CoreError::Validation(format!(
            "Date range spans {days} days; at most {MAX_RANGE_DAYS} are allowed"
        )));
    }

    if request.cadence_hours == 0 || request.cadence_hours > MAX_CADENCE_HOURS {
        return Err(CoreError::Validation(format!(
            "cadence_hours must be between 1 and {MAX_CADENCE_HOURS}"
        )));
    }

    if request.duration_seconds <= 0 {
        return Err(CoreError::Validation(
            "duration_seconds must be positive".into(),
        ));
    }

    Ok(())
}

/// Hours of the broadcast day that receive a spot for the given cadence.
pub fn slot_hours(cadence_hours: u32) -> Vec<u32> {
    if cadence_hours == 0 {
        return Vec::new();
    }
    (DAY_START_HOUR..DAY_END_HOUR)
        .step_by(cadence_hours as usize)
        .collect()
}

/// Generate one spot per slot hour for every date in `start..=end`.
///
/// Spots are emitted in chronological order. No attempt is made to detect
/// collisions with existing spots.
pub fn generate_naive_spots(
    order_id: EntityId,
    station_id: Option<EntityId>,
    request: &SpotRequest,
) -> Result<Vec<SpotDraft>, CoreError> {
    validate_request(request)?;

    let hours = slot_hours(request.cadence_hours);
    let mut spots = Vec::new();

    for date in request
        .start_date
        .iter_days()
        .take_while(|d| *d <= request.end_date)
    {
        for &hour in &hours {
            let naive = date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
                CoreError::Internal(format!("Invalid slot time {date} {hour}:00"))
            })?;
            spots.push(SpotDraft {
                order_id,
                station_id,
                scheduled_at: naive.and_utc(),
                duration_seconds: request.duration_seconds,
                status: SPOT_STATUS_SCHEDULED.to_string(),
            });
        }
    }

    Ok(spots)
}
