//! Region key normalization for the facility directories.
//!
//! Hospital rows carry a regency/city column used verbatim as the query key;
//! the community directory carries free text like "Kab. Tangerang\r". Both
//! funnel through `normalize_region` so one key addresses both directories.

use std::sync::OnceLock;

use regex::Regex;

fn admin_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:kab\.|kota)\s+(.+)$").expect("static region prefix pattern")
    })
}

/// Normalize a raw regency/city field into the catalog's region key.
///
/// Strips surrounding whitespace and control characters (the source data
/// carries trailing `\r`), then a leading "Kab." or "Kota" administrative
/// marker. Inputs without a marker pass through trimmed rather than being
/// flagged unparseable, which keeps normalization idempotent: the output
/// never carries a marker, so a second pass is the identity.
pub fn normalize_region(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c.is_control());
    match admin_prefix().captures(trimmed) {
        Some(caps) => caps[1].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Case-insensitive substring match of a region key against a raw
/// directory field (community facilities keep their field unnormalized).
pub fn raw_region_matches(raw: &str, region: &str) -> bool {
    if region.is_empty() {
        return false;
    }
    raw.to_lowercase().contains(&region.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_kab_prefix_and_carriage_return() {
        assert_eq!(normalize_region("Kab. Tangerang\r"), "Tangerang");
    }

    #[test]
    fn strips_kota_prefix() {
        assert_eq!(normalize_region("Kota Tangerang Selatan"), "Tangerang Selatan");
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert_eq!(normalize_region("KOTA Cilegon"), "Cilegon");
        assert_eq!(normalize_region("kab. Lebak"), "Lebak");
    }

    #[test]
    fn unprefixed_input_passes_through_trimmed() {
        assert_eq!(normalize_region("  Pandeglang  "), "Pandeglang");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["Kab. Serang\r", "Kota Serang", "Serang", " Tangerang Selatan "] {
            let once = normalize_region(raw);
            assert_eq!(normalize_region(&once), once);
        }
    }

    #[test]
    fn kota_embedded_mid_string_is_not_a_prefix() {
        assert_eq!(normalize_region("Mentokota"), "Mentokota");
    }

    #[test]
    fn raw_match_ignores_case_and_prefix() {
        assert!(raw_region_matches("Kab. Tangerang\r", "tangerang"));
        assert!(raw_region_matches("Kota Tangerang Selatan", "Tangerang Selatan"));
        assert!(!raw_region_matches("Kab. Lebak", "Serang"));
    }

    #[test]
    fn empty_region_matches_nothing() {
        assert!(!raw_region_matches("Kab. Lebak", ""));
    }
}
