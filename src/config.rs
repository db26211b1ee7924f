use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CrowdAID";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "crowdaid=info"
}

/// Get the application data directory
/// ~/CrowdAID/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("CrowdAID")
}

/// Directory holding the static facility directories (CSV drops).
pub fn directories_dir() -> PathBuf {
    app_data_dir().join("directories")
}

/// Directory the occupancy feed is dropped into on its refresh cadence.
pub fn feed_dir() -> PathBuf {
    app_data_dir().join("feed")
}

/// Directory holding the trained suitability-model bundle.
pub fn model_bundle_dir() -> PathBuf {
    app_data_dir().join("models").join("suitability-v1")
}

/// Default hospital directory drop (`;`-delimited).
pub fn hospital_directory_path() -> PathBuf {
    directories_dir().join("Hospital_Banten.csv")
}

/// Default community facility directory drop.
pub fn community_directory_path() -> PathBuf {
    directories_dir().join("Faskes_BPJS_Banten_2019.csv")
}

/// Default occupancy feed drop.
pub fn occupancy_feed_path() -> PathBuf {
    feed_dir().join("Hospital_Occupancy_Current.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("CrowdAID"));
    }

    #[test]
    fn directories_dir_under_app_data() {
        let directories = directories_dir();
        let app = app_data_dir();
        assert!(directories.starts_with(app));
        assert!(directories.ends_with("directories"));
    }

    #[test]
    fn model_bundle_dir_is_versioned() {
        let bundle = model_bundle_dir();
        assert!(bundle.ends_with("models/suitability-v1"));
    }

    #[test]
    fn app_name_is_crowdaid() {
        assert_eq!(APP_NAME, "CrowdAID");
    }
}
