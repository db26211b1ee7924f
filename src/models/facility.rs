use serde::{Deserialize, Serialize};

use super::enums::{FacilityCategory, HospitalClass};
use crate::region;

/// A hospital row from the static directory, region normalized at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: u32,
    pub name: String,
    pub address: String,
    /// Region key (`region::normalize_region` applied to the directory value).
    pub region: String,
    pub class: HospitalClass,
    /// Specialty string as listed, e.g. "Umum", "Ibu dan Anak", "Bedah".
    pub hospital_type: String,
    pub bed_capacity: u32,
    pub service_count: u32,
    pub staff_count: u32,
}

impl Hospital {
    /// Case-insensitive substring match on the specialty string.
    pub fn type_contains(&self, needle: &str) -> bool {
        self.hospital_type
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// A community facility row from the BPJS directory: puskesmas,
/// primary-care clinic, or dental clinic. No class, no occupancy feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityFacility {
    pub name: String,
    pub address: String,
    /// Regency/city field as shipped, free text like "Kab. Tangerang\r".
    pub region_raw: String,
    pub category: FacilityCategory,
}

impl CommunityFacility {
    /// Case-insensitive substring match of a normalized region key against
    /// the raw directory field.
    pub fn in_region(&self, region: &str) -> bool {
        region::raw_region_matches(&self.region_raw, region)
    }

    /// Nominal walk-in wait; community facilities carry no occupancy feed.
    pub fn nominal_wait_minutes(&self) -> u32 {
        match self.category {
            FacilityCategory::Puskesmas => 10,
            FacilityCategory::ClinicPratama => 15,
            FacilityCategory::DentalClinic => 20,
            // Not constructed by the loader; hospitals come from the
            // hospital directory and carry real wait estimates.
            FacilityCategory::Hospital => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital(hospital_type: &str) -> Hospital {
        Hospital {
            id: 1,
            name: "RSU Tangerang".into(),
            address: "Jl. Ahmad Yani 9".into(),
            region: "Tangerang".into(),
            class: HospitalClass::C,
            hospital_type: hospital_type.into(),
            bed_capacity: 200,
            service_count: 15,
            staff_count: 400,
        }
    }

    #[test]
    fn type_match_is_case_insensitive_substring() {
        let rs = hospital("RSU Bedah Sentosa");
        assert!(rs.type_contains("bedah"));
        assert!(rs.type_contains("BEDAH"));
        assert!(!rs.type_contains("Ibu dan Anak"));
    }

    #[test]
    fn community_region_match_tolerates_prefix_and_cr() {
        let puskesmas = CommunityFacility {
            name: "Puskesmas Ciputat".into(),
            address: "Jl. Ki Hajar Dewantara 7".into(),
            region_raw: "Kota Tangerang Selatan\r".into(),
            category: FacilityCategory::Puskesmas,
        };
        assert!(puskesmas.in_region("Tangerang Selatan"));
        assert!(!puskesmas.in_region("Serang"));
    }

    #[test]
    fn nominal_waits_by_category() {
        let mut clinic = CommunityFacility {
            name: "Klinik Melati".into(),
            address: "Jl. Raya Serpong 12".into(),
            region_raw: "Kota Tangerang Selatan".into(),
            category: FacilityCategory::ClinicPratama,
        };
        assert_eq!(clinic.nominal_wait_minutes(), 15);
        clinic.category = FacilityCategory::Puskesmas;
        assert_eq!(clinic.nominal_wait_minutes(), 10);
        clinic.category = FacilityCategory::DentalClinic;
        assert_eq!(clinic.nominal_wait_minutes(), 20);
    }
}
