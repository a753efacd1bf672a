//! Occupancy data source.
//!
//! The property-management system is an external collaborator; this module
//! only defines the capability interface plus the sample source used when the
//! integration is not configured.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One room's occupancy for a date, as reported by the property-management
/// system. A live source supplies booking dates and lets the aggregator
/// derive the occupancy status; a fallback source may supply the status
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyRecord {
    pub room_number: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub checkin_date: Option<NaiveDate>,
    #[serde(default)]
    pub checkout_date: Option<NaiveDate>,
    #[serde(default)]
    pub occupancy_status: Option<String>,
}

/// Capability interface to the occupancy integration.
pub trait OccupancySource: Send + Sync {
    fn rooms_for_date(&self, date: NaiveDate) -> Result<Vec<OccupancyRecord>, AppError>;
}

/// Guest-presence status for a record on a date.
///
/// An explicit status on the record wins; otherwise it is derived from the
/// booking dates, and records without dates are vacant.
pub fn occupancy_status(record: &OccupancyRecord, date: NaiveDate) -> String {
    if let Some(status) = &record.occupancy_status {
        return status.clone();
    }

    match (record.checkin_date, record.checkout_date) {
        (Some(checkin), Some(checkout)) => {
            if date < checkin {
                "vacant".to_string()
            } else if date == checkout {
                "checkout".to_string()
            } else if date < checkout {
                "occupied".to_string()
            } else {
                "vacant".to_string()
            }
        }
        _ => "vacant".to_string(),
    }
}

/// Fixed placeholder rooms (101-120) served when the integration is not
/// configured. Deterministic so the room view stays demonstrable; treat as a
/// fixture, not production data.
pub struct SampleOccupancySource;

impl OccupancySource for SampleOccupancySource {
    fn rooms_for_date(&self, _date: NaiveDate) -> Result<Vec<OccupancyRecord>, AppError> {
        Ok((101..=120)
            .map(|n| OccupancyRecord {
                room_number: n.to_string(),
                room_type: if n % 2 == 0 { "Deluxe" } else { "Standard" }.to_string(),
                guest_name: String::new(),
                checkin_date: None,
                checkout_date: None,
                occupancy_status: Some("vacant".to_string()),
            })
            .collect())
    }
}
