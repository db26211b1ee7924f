use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CatalogError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Wire strings are the directory/feed values as shipped; the condition and
// urgency strings double as the ML encoder vocabulary and must not change.

str_enum!(FacilityCategory {
    Hospital => "Rumah Sakit",
    Puskesmas => "Puskesmas",
    ClinicPratama => "Klinik Pratama",
    DentalClinic => "Klinik Gigi",
});

str_enum!(HospitalClass {
    B => "B",
    C => "C",
    D => "D",
});

str_enum!(OccupancyStatus {
    Normal => "NORMAL",
    Sibuk => "SIBUK",
    HampirPenuh => "HAMPIR PENUH",
    Penuh => "PENUH",
});

str_enum!(ConditionCategory {
    MildSymptoms => "Gejala Ringan",
    InternalMedicine => "Penyakit Dalam",
    Surgery => "Bedah",
    Pediatric => "Anak",
    Obstetric => "Kebidanan",
    Dental => "Gigi",
    MultiSpecialist => "Banyak Spesialis",
});

str_enum!(Urgency {
    NotUrgent => "Tidak Mendesak",
    Urgent => "Mendesak",
    Emergency => "Darurat",
});

str_enum!(Confidence {
    High => "High",
    Medium => "Medium",
    Low => "Low",
    Unknown => "Unknown",
});

impl OccupancyStatus {
    /// Crowding severity, NORMAL < SIBUK < HAMPIR PENUH < PENUH.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Sibuk => 1,
            Self::HampirPenuh => 2,
            Self::Penuh => 3,
        }
    }

    /// Full or nearly full — the tiers the neighboring-region advisory counts.
    pub fn is_crowded(&self) -> bool {
        matches!(self, Self::Penuh | Self::HampirPenuh)
    }
}

impl ConditionCategory {
    /// All seven fixed condition categories, in menu order.
    pub const ALL: [ConditionCategory; 7] = [
        ConditionCategory::MildSymptoms,
        ConditionCategory::InternalMedicine,
        ConditionCategory::Surgery,
        ConditionCategory::Pediatric,
        ConditionCategory::Obstetric,
        ConditionCategory::Dental,
        ConditionCategory::MultiSpecialist,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_including_embedded_space() {
        let status: OccupancyStatus = "HAMPIR PENUH".parse().unwrap();
        assert_eq!(status, OccupancyStatus::HampirPenuh);
        assert_eq!(status.as_str(), "HAMPIR PENUH");
    }

    #[test]
    fn condition_strings_are_training_vocabulary() {
        assert_eq!(ConditionCategory::MildSymptoms.as_str(), "Gejala Ringan");
        assert_eq!(ConditionCategory::Obstetric.as_str(), "Kebidanan");
        assert_eq!(ConditionCategory::MultiSpecialist.as_str(), "Banyak Spesialis");
    }

    #[test]
    fn unknown_value_is_invalid_enum_error() {
        let err = "Kelas Z".parse::<HospitalClass>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEnum { .. }));
    }

    #[test]
    fn severity_is_strictly_increasing() {
        assert!(OccupancyStatus::Normal.severity() < OccupancyStatus::Sibuk.severity());
        assert!(OccupancyStatus::Sibuk.severity() < OccupancyStatus::HampirPenuh.severity());
        assert!(OccupancyStatus::HampirPenuh.severity() < OccupancyStatus::Penuh.severity());
    }

    #[test]
    fn crowded_covers_top_two_tiers_only() {
        assert!(OccupancyStatus::Penuh.is_crowded());
        assert!(OccupancyStatus::HampirPenuh.is_crowded());
        assert!(!OccupancyStatus::Sibuk.is_crowded());
        assert!(!OccupancyStatus::Normal.is_crowded());
    }

    #[test]
    fn all_conditions_parse_back() {
        for condition in ConditionCategory::ALL {
            let parsed: ConditionCategory = condition.as_str().parse().unwrap();
            assert_eq!(parsed, condition);
        }
    }
}
