//! Point-in-time view of the facility catalog joined with the occupancy
//! overlay.
//!
//! A snapshot is immutable once built. The refresh cadence lives outside the
//! engine: a refresher builds a new snapshot and swaps the `Arc`, so every
//! query reads one consistent overlay and never a torn mix of old and new
//! rows.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{loader, CatalogError};
use crate::models::enums::{FacilityCategory, HospitalClass, OccupancyStatus};
use crate::models::facility::{CommunityFacility, Hospital};
use crate::models::occupancy::OccupancyRecord;

/// A hospital joined with its occupancy record (defaults applied when the
/// feed had no row).
#[derive(Debug, Clone, Serialize)]
pub struct HospitalState {
    pub hospital: Hospital,
    pub occupancy: OccupancyRecord,
}

/// Aggregated overlay statistics for the dashboard header.
#[derive(Debug, Clone, Serialize)]
pub struct OverlaySummary {
    pub hospital_count: usize,
    pub average_occupancy: f32,
    pub full_count: usize,
    pub near_full_count: usize,
    pub class_b_count: usize,
    pub class_c_count: usize,
}

/// Immutable catalog + overlay view served to the query path.
pub struct CatalogSnapshot {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    hospitals: Vec<HospitalState>,
    community: Vec<CommunityFacility>,
    regions: Vec<String>,
}

impl CatalogSnapshot {
    /// Join hospitals with their occupancy rows; hospitals absent from the
    /// feed get the default record.
    pub fn new(
        hospitals: Vec<Hospital>,
        community: Vec<CommunityFacility>,
        occupancy: Vec<OccupancyRecord>,
    ) -> Self {
        let mut by_id: HashMap<u32, OccupancyRecord> = occupancy
            .into_iter()
            .map(|record| (record.hospital_id, record))
            .collect();

        let mut regions: Vec<String> = hospitals.iter().map(|h| h.region.clone()).collect();
        regions.sort();
        regions.dedup();

        let hospitals = hospitals
            .into_iter()
            .map(|hospital| {
                let occupancy = by_id
                    .remove(&hospital.id)
                    .unwrap_or_else(|| OccupancyRecord::default_for(hospital.id, hospital.bed_capacity));
                HospitalState { hospital, occupancy }
            })
            .collect();

        let snapshot = Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            hospitals,
            community,
            regions,
        };

        tracing::info!(
            snapshot_id = %snapshot.id,
            hospitals = snapshot.hospitals.len(),
            community = snapshot.community.len(),
            regions = snapshot.regions.len(),
            "catalog snapshot built"
        );
        snapshot
    }

    /// Build a snapshot from the directory and feed files. The occupancy
    /// feed is optional (degraded mode); the directories are not.
    pub fn from_files(
        hospital_path: &Path,
        community_path: &Path,
        occupancy_path: &Path,
    ) -> Result<Self, CatalogError> {
        let hospitals = loader::load_hospitals(hospital_path)?;
        let community = loader::load_community(community_path)?;
        let occupancy = loader::load_occupancy_or_default(occupancy_path, &hospitals);
        Ok(Self::new(hospitals, community, occupancy))
    }

    pub fn hospitals(&self) -> &[HospitalState] {
        &self.hospitals
    }

    pub fn community(&self) -> &[CommunityFacility] {
        &self.community
    }

    /// Sorted, deduplicated region keys derived from the hospital directory.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn hospital_by_id(&self, id: u32) -> Option<&HospitalState> {
        self.hospitals.iter().find(|state| state.hospital.id == id)
    }

    /// Hospitals in a region, optionally restricted to one class. Input
    /// order (directory order) is preserved.
    pub fn hospitals_in_region(
        &self,
        region: &str,
        class: Option<&HospitalClass>,
    ) -> Vec<&HospitalState> {
        self.hospitals
            .iter()
            .filter(|state| state.hospital.region == region)
            .filter(|state| class.map_or(true, |c| &state.hospital.class == c))
            .collect()
    }

    /// Community facilities of one category whose raw region field contains
    /// the region key.
    pub fn community_in_region(
        &self,
        region: &str,
        category: &FacilityCategory,
    ) -> Vec<&CommunityFacility> {
        self.community
            .iter()
            .filter(|facility| &facility.category == category)
            .filter(|facility| facility.in_region(region))
            .collect()
    }

    /// Overlay statistics across all hospitals in the snapshot.
    pub fn summary(&self) -> OverlaySummary {
        let count = self.hospitals.len();
        let average = if count == 0 {
            0.0
        } else {
            self.hospitals
                .iter()
                .map(|s| s.occupancy.occupancy_rate)
                .sum::<f32>()
                / count as f32
        };

        OverlaySummary {
            hospital_count: count,
            average_occupancy: average,
            full_count: self.count_status(OccupancyStatus::Penuh),
            near_full_count: self.count_status(OccupancyStatus::HampirPenuh),
            class_b_count: self.count_class(HospitalClass::B),
            class_c_count: self.count_class(HospitalClass::C),
        }
    }

    fn count_status(&self, status: OccupancyStatus) -> usize {
        self.hospitals
            .iter()
            .filter(|s| s.occupancy.status == status)
            .count()
    }

    fn count_class(&self, class: HospitalClass) -> usize {
        self.hospitals
            .iter()
            .filter(|s| s.hospital.class == class)
            .count()
    }
}
