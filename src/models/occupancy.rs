use serde::{Deserialize, Serialize};

use super::enums::OccupancyStatus;

/// Occupancy assumed for a hospital absent from the feed.
pub const DEFAULT_OCCUPANCY_RATE: f32 = 75.0;

/// Wait estimate assumed for a hospital absent from the feed.
pub const DEFAULT_WAIT_MINUTES: u32 = 30;

/// Fraction of capacity assumed free for a hospital absent from the feed.
const DEFAULT_FREE_FRACTION: f32 = 0.25;

/// One row of the bed-occupancy feed, refreshed on an external cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyRecord {
    pub hospital_id: u32,
    /// Percent of beds in use, 0–100.
    pub occupancy_rate: f32,
    pub status: OccupancyStatus,
    pub available_beds: u32,
    pub wait_time_minutes: u32,
}

impl OccupancyRecord {
    /// Fallback record for a hospital the feed has no row for.
    pub fn default_for(hospital_id: u32, bed_capacity: u32) -> Self {
        Self {
            hospital_id,
            occupancy_rate: DEFAULT_OCCUPANCY_RATE,
            status: OccupancyStatus::Normal,
            available_beds: (bed_capacity as f32 * DEFAULT_FREE_FRACTION) as u32,
            wait_time_minutes: DEFAULT_WAIT_MINUTES,
        }
    }
}
