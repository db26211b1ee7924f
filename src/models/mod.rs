pub mod enums;
pub mod facility;
pub mod occupancy;
pub mod recommendation;

pub use enums::*;
pub use facility::{CommunityFacility, Hospital};
pub use occupancy::OccupancyRecord;
pub use recommendation::{FacilityKey, MlAnnotation, Recommendation};
