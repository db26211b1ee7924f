//! CSV loading for the static directories and the occupancy feed.
//!
//! The hospital directory ships `;`-delimited with Indonesian column names;
//! the community directory and occupancy feed are plain CSV. A missing or
//! unreadable occupancy feed is a degraded mode, not a failure: every
//! hospital falls back to its default record.

use std::path::Path;

use serde::Deserialize;

use super::CatalogError;
use crate::models::enums::FacilityCategory;
use crate::models::facility::{CommunityFacility, Hospital};
use crate::models::occupancy::OccupancyRecord;
use crate::region;

/// Raw hospital directory row, as shipped.
#[derive(Debug, Deserialize)]
struct HospitalRow {
    id: u32,
    nama: String,
    alamat: String,
    kab: String,
    kelas: String,
    jenis: String,
    total_tempat_tidur: u32,
    total_layanan: u32,
    total_tenaga_kerja: u32,
}

/// Raw community facility row, as shipped.
#[derive(Debug, Deserialize)]
struct FaskesRow {
    #[serde(rename = "NamaFaskes")]
    nama: String,
    #[serde(rename = "AlamatFaskes")]
    alamat: String,
    #[serde(rename = "KotaKab")]
    kota_kab: String,
    #[serde(rename = "TipeFaskes")]
    tipe: String,
}

/// Raw occupancy feed row.
#[derive(Debug, Deserialize)]
struct OccupancyRow {
    hospital_id: u32,
    occupancy_rate: f32,
    status: String,
    available_beds: f32,
    wait_time_minutes: u32,
}

/// Load the hospital directory (`;`-delimited). Regions are normalized here.
pub fn load_hospitals(path: &Path) -> Result<Vec<Hospital>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::DirectoryNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut hospitals = Vec::new();
    for row in reader.deserialize() {
        let row: HospitalRow = row?;
        hospitals.push(Hospital {
            id: row.id,
            name: row.nama,
            address: row.alamat,
            region: region::normalize_region(&row.kab),
            class: row.kelas.parse()?,
            hospital_type: row.jenis,
            bed_capacity: row.total_tempat_tidur,
            service_count: row.total_layanan,
            staff_count: row.total_tenaga_kerja,
        });
    }

    tracing::info!(count = hospitals.len(), "hospital directory loaded");
    Ok(hospitals)
}

/// Map a free-text facility type to a catalog category.
///
/// "Klinik Gigi" must be checked before the generic "Klinik" match. Types
/// outside the routable set (pharmacies, labs) are skipped, not errors.
fn categorize(tipe: &str) -> Option<FacilityCategory> {
    let lower = tipe.to_lowercase();
    if lower == "puskesmas" {
        Some(FacilityCategory::Puskesmas)
    } else if lower.contains("gigi") {
        Some(FacilityCategory::DentalClinic)
    } else if lower.contains("klinik") {
        Some(FacilityCategory::ClinicPratama)
    } else {
        None
    }
}

/// Load the community facility directory, keeping the raw region field for
/// substring matching.
pub fn load_community(path: &Path) -> Result<Vec<CommunityFacility>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::DirectoryNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut facilities = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize() {
        let row: FaskesRow = row?;
        match categorize(&row.tipe) {
            Some(category) => facilities.push(CommunityFacility {
                name: row.nama.trim().to_string(),
                address: row.alamat,
                region_raw: row.kota_kab,
                category,
            }),
            None => skipped += 1,
        }
    }

    tracing::info!(
        count = facilities.len(),
        skipped,
        "community facility directory loaded"
    );
    Ok(facilities)
}

fn load_occupancy(path: &Path) -> Result<Vec<OccupancyRecord>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::DirectoryNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: OccupancyRow = row?;
        records.push(OccupancyRecord {
            hospital_id: row.hospital_id,
            occupancy_rate: row.occupancy_rate,
            status: row.status.parse()?,
            available_beds: row.available_beds.max(0.0) as u32,
            wait_time_minutes: row.wait_time_minutes,
        });
    }
    Ok(records)
}

/// Load the occupancy feed, falling back to a synthetic all-NORMAL snapshot
/// at the default 75% occupancy when the file is missing or unreadable.
pub fn load_occupancy_or_default(path: &Path, hospitals: &[Hospital]) -> Vec<OccupancyRecord> {
    match load_occupancy(path) {
        Ok(records) => {
            tracing::info!(count = records.len(), "occupancy feed loaded");
            records
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                "occupancy feed unavailable, using default records"
            );
            hospitals
                .iter()
                .map(|h| OccupancyRecord::default_for(h.id, h.bed_capacity))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{HospitalClass, OccupancyStatus};
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn hospital_directory_parses_and_normalizes_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "hospitals.csv",
            "id;nama;alamat;kab;kelas;jenis;total_tempat_tidur;total_layanan;total_tenaga_kerja\n\
             1;RSU Tangerang;Jl. Ahmad Yani 9;Kota Tangerang;B;Umum;400;25;900\n\
             2;RSIA Bunda;Jl. Serpong 3;Kab. Tangerang;C;Ibu dan Anak;120;8;210\n",
        );

        let hospitals = load_hospitals(&path).unwrap();
        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].region, "Tangerang");
        assert_eq!(hospitals[0].class, HospitalClass::B);
        assert_eq!(hospitals[1].region, "Tangerang");
        assert_eq!(hospitals[1].hospital_type, "Ibu dan Anak");
    }

    #[test]
    fn missing_hospital_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_hospitals(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::DirectoryNotFound(_)));
    }

    #[test]
    fn community_rows_categorized_and_unroutable_types_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "faskes.csv",
            "NamaFaskes,AlamatFaskes,KotaKab,TipeFaskes\n\
             Puskesmas Ciputat ,Jl. Dewantara 7,Kota Tangerang Selatan,Puskesmas\n\
             Klinik Melati,Jl. Raya Serpong 12,Kota Tangerang Selatan,Klinik Pratama\n\
             Klinik Gigi Senyum,Jl. Bintaro 4,Kota Tangerang Selatan,Klinik Gigi\n\
             Apotek Sehat,Jl. Pamulang 2,Kota Tangerang Selatan,Apotek\n",
        );

        let facilities = load_community(&path).unwrap();
        assert_eq!(facilities.len(), 3);
        assert_eq!(facilities[0].name, "Puskesmas Ciputat");
        assert_eq!(facilities[0].category, FacilityCategory::Puskesmas);
        assert_eq!(facilities[1].category, FacilityCategory::ClinicPratama);
        assert_eq!(facilities[2].category, FacilityCategory::DentalClinic);
    }

    #[test]
    fn occupancy_feed_parses_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "occupancy.csv",
            "hospital_id,occupancy_rate,status,available_beds,wait_time_minutes\n\
             1,96.5,PENUH,4,180\n\
             2,88.0,HAMPIR PENUH,11.0,90\n",
        );

        let hospitals = Vec::new();
        let records = load_occupancy_or_default(&path, &hospitals);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, OccupancyStatus::Penuh);
        assert_eq!(records[1].status, OccupancyStatus::HampirPenuh);
        assert_eq!(records[1].available_beds, 11);
    }

    #[test]
    fn missing_occupancy_feed_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let hospitals = vec![Hospital {
            id: 9,
            name: "RSU Serang".into(),
            address: "Jl. Veteran 1".into(),
            region: "Serang".into(),
            class: HospitalClass::C,
            hospital_type: "Umum".into(),
            bed_capacity: 200,
            service_count: 12,
            staff_count: 350,
        }];

        let records = load_occupancy_or_default(&dir.path().join("absent.csv"), &hospitals);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hospital_id, 9);
        assert_eq!(records[0].occupancy_rate, 75.0);
        assert_eq!(records[0].status, OccupancyStatus::Normal);
        assert_eq!(records[0].available_beds, 50);
    }

    #[test]
    fn malformed_occupancy_feed_also_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "occupancy.csv",
            "hospital_id,occupancy_rate,status,available_beds,wait_time_minutes\n\
             1,96.5,OVERRUN,4,180\n",
        );

        let hospitals = vec![Hospital {
            id: 1,
            name: "RSU Serang".into(),
            address: "Jl. Veteran 1".into(),
            region: "Serang".into(),
            class: HospitalClass::D,
            hospital_type: "Umum".into(),
            bed_capacity: 80,
            service_count: 6,
            staff_count: 120,
        }];

        let records = load_occupancy_or_default(&path, &hospitals);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].occupancy_rate, 75.0);
    }
}
