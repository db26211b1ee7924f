//! Condition dispatch table.
//!
//! Each condition category maps to one rule: the facility tier it routes to,
//! the classification rationale, and a candidate-selection function run
//! against a catalog snapshot. Routing appropriateness is encoded in the
//! priority tier; occupancy never changes a priority, it only orders within
//! one (see `ranker`).

use std::collections::HashSet;

use crate::catalog::snapshot::{CatalogSnapshot, HospitalState};
use crate::models::enums::{ConditionCategory, FacilityCategory, HospitalClass, OccupancyStatus};
use crate::models::facility::CommunityFacility;
use crate::models::recommendation::{FacilityKey, Recommendation};

// Selection caps carried over from the source routing tables.
const PUSKESMAS_CAP: usize = 5;
const CLINIC_CAP: usize = 3;
const DENTAL_CLINIC_CAP: usize = 3;
const GENERAL_FALLBACK_CAP: usize = 5;

/// One entry of the condition dispatch table.
pub struct ConditionRule {
    pub category: ConditionCategory,
    /// Facility tier named in the classification output.
    pub target: &'static str,
    pub rationale: &'static str,
    select: fn(&CatalogSnapshot, &str) -> Vec<Recommendation>,
}

impl ConditionRule {
    /// Select the regional candidate set for this condition.
    pub fn candidates(&self, snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
        (self.select)(snapshot, region)
    }
}

static RULES: [ConditionRule; 7] = [
    ConditionRule {
        category: ConditionCategory::MildSymptoms,
        target: "Puskesmas or Klinik Pratama",
        rationale: "Mild symptoms do not require hospital facilities",
        select: select_mild_symptoms,
    },
    ConditionRule {
        category: ConditionCategory::InternalMedicine,
        target: "Class C hospital (general)",
        rationale: "Requires specialist inpatient care at a general hospital",
        select: select_internal_medicine,
    },
    ConditionRule {
        category: ConditionCategory::Surgery,
        target: "Class C hospital (surgical)",
        rationale: "Surgical cases need an operating theatre and surgical staff",
        select: select_surgery,
    },
    ConditionRule {
        category: ConditionCategory::Pediatric,
        target: "Class C hospital (mother and child)",
        rationale: "Pediatric cases route to mother-and-child wards, general wards as fallback",
        select: select_maternal_child,
    },
    ConditionRule {
        category: ConditionCategory::Obstetric,
        target: "Class C hospital (mother and child)",
        rationale: "Obstetric cases route to mother-and-child wards, general wards as fallback",
        select: select_maternal_child,
    },
    ConditionRule {
        category: ConditionCategory::Dental,
        target: "Class D hospital or dental clinic",
        rationale: "Dental problems need dedicated dental facilities",
        select: select_dental,
    },
    ConditionRule {
        category: ConditionCategory::MultiSpecialist,
        target: "Class B hospital",
        rationale: "Complex conditions require broad multi-specialist coverage",
        select: select_multi_specialist,
    },
];

/// Look up the dispatch entry for a condition. Total by construction: the
/// match is exhaustive over the category enum.
pub fn rule_for(condition: &ConditionCategory) -> &'static ConditionRule {
    let index = match condition {
        ConditionCategory::MildSymptoms => 0,
        ConditionCategory::InternalMedicine => 1,
        ConditionCategory::Surgery => 2,
        ConditionCategory::Pediatric => 3,
        ConditionCategory::Obstetric => 4,
        ConditionCategory::Dental => 5,
        ConditionCategory::MultiSpecialist => 6,
    };
    &RULES[index]
}

// ── Candidate constructors ──────────────────────────────────

fn hospital_candidate(state: &HospitalState, priority: u8) -> Recommendation {
    Recommendation {
        key: FacilityKey::Hospital(state.hospital.id),
        name: state.hospital.name.clone(),
        address: state.hospital.address.clone(),
        facility_type: state.hospital.hospital_type.clone(),
        class: Some(state.hospital.class.clone()),
        status: Some(state.occupancy.status.clone()),
        occupancy: state.occupancy.occupancy_rate,
        wait_time_minutes: state.occupancy.wait_time_minutes,
        bed_capacity: Some(state.hospital.bed_capacity),
        service_count: Some(state.hospital.service_count),
        available_beds: Some(state.occupancy.available_beds),
        priority,
        ml: None,
    }
}

fn community_candidate(facility: &CommunityFacility, priority: u8) -> Recommendation {
    Recommendation {
        key: FacilityKey::Community(facility.name.clone()),
        name: facility.name.clone(),
        address: facility.address.clone(),
        facility_type: facility.category.as_str().to_string(),
        class: None,
        status: None,
        occupancy: 0.0,
        wait_time_minutes: facility.nominal_wait_minutes(),
        bed_capacity: None,
        service_count: None,
        available_beds: None,
        priority,
        ml: None,
    }
}

// ── Selection functions ─────────────────────────────────────

fn select_mild_symptoms(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    let mut candidates: Vec<Recommendation> = snapshot
        .community_in_region(region, &FacilityCategory::Puskesmas)
        .into_iter()
        .take(PUSKESMAS_CAP)
        .map(|f| community_candidate(f, 1))
        .collect();

    candidates.extend(
        snapshot
            .community_in_region(region, &FacilityCategory::ClinicPratama)
            .into_iter()
            .take(CLINIC_CAP)
            .map(|f| community_candidate(f, 2)),
    );

    candidates
}

/// Class D hospitals; dental clinics join as fallback only when every class-D
/// candidate is full. Vacuously true for a region with no class-D hospital,
/// so such regions still route to dental clinics.
fn select_dental(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    let class_d = snapshot.hospitals_in_region(region, Some(&HospitalClass::D));
    let all_full = class_d
        .iter()
        .all(|s| s.occupancy.status == OccupancyStatus::Penuh);

    let mut candidates: Vec<Recommendation> = class_d
        .iter()
        .map(|s| hospital_candidate(s, 1))
        .collect();

    if all_full {
        candidates.extend(
            snapshot
                .community_in_region(region, &FacilityCategory::DentalClinic)
                .into_iter()
                .take(DENTAL_CLINIC_CAP)
                .map(|f| community_candidate(f, 2)),
        );
    }

    candidates
}

fn select_multi_specialist(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    let mut class_b = snapshot.hospitals_in_region(region, Some(&HospitalClass::B));
    class_b.sort_by(|a, b| b.hospital.service_count.cmp(&a.hospital.service_count));
    class_b
        .into_iter()
        .map(|s| hospital_candidate(s, 1))
        .collect()
}

fn select_internal_medicine(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    let mut general: Vec<&HospitalState> = snapshot
        .hospitals_in_region(region, Some(&HospitalClass::C))
        .into_iter()
        .filter(|s| s.hospital.type_contains("Umum"))
        .collect();
    general.sort_by(|a, b| b.hospital.service_count.cmp(&a.hospital.service_count));
    general
        .into_iter()
        .map(|s| hospital_candidate(s, 1))
        .collect()
}

/// Specialty wards first, general wards as a capped fallback. A hospital
/// matching both type strings is listed once, at priority 1.
fn specialty_then_general(
    snapshot: &CatalogSnapshot,
    region: &str,
    specialty: &str,
) -> Vec<Recommendation> {
    let class_c = snapshot.hospitals_in_region(region, Some(&HospitalClass::C));

    let mut candidates: Vec<Recommendation> = class_c
        .iter()
        .filter(|s| s.hospital.type_contains(specialty))
        .map(|s| hospital_candidate(s, 1))
        .collect();

    let primary: HashSet<u32> = class_c
        .iter()
        .filter(|s| s.hospital.type_contains(specialty))
        .map(|s| s.hospital.id)
        .collect();

    candidates.extend(
        class_c
            .iter()
            .filter(|s| s.hospital.type_contains("Umum"))
            .filter(|s| !primary.contains(&s.hospital.id))
            .take(GENERAL_FALLBACK_CAP)
            .map(|s| hospital_candidate(s, 2)),
    );

    candidates
}

fn select_surgery(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    specialty_then_general(snapshot, region, "Bedah")
}

fn select_maternal_child(snapshot: &CatalogSnapshot, region: &str) -> Vec<Recommendation> {
    specialty_then_general(snapshot, region, "Ibu dan Anak")
}
