//! The persisted application state.
//!
//! Everything the dashboard owns is serialized together as one JSON object
//! and restored wholesale at startup. Parsing is lenient: a missing
//! collection falls back to its seed, and a file that does not parse at all
//! falls back to the full default snapshot. There is no schema validation
//! beyond that.

use serde::{Deserialize, Serialize};

use crate::domain::{DashboardConfig, Department, Ltc, StudentPortfolio, Zone};
use crate::seed;

/// Well-known file name of the snapshot inside the storage root.
pub const SNAPSHOT_FILE: &str = "yuvaparivartan.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub zones: Vec<Zone>,
    pub ltcs: Vec<Ltc>,
    pub departments: Vec<Department>,
    pub config: DashboardConfig,
    pub portfolios: Vec<StudentPortfolio>,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        AppSnapshot {
            zones: seed::default_zones(),
            ltcs: seed::default_ltcs(),
            departments: seed::default_departments(),
            config: seed::default_config(),
            portfolios: seed::generate_students(),
        }
    }
}

impl AppSnapshot {
    /// Parse a persisted snapshot, falling back to the default state when
    /// the payload is not valid JSON.
    pub fn from_json(raw: &str) -> AppSnapshot {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_reproduces_identical_state() {
        let snapshot = AppSnapshot::default();
        let raw = snapshot.to_json().unwrap();
        let restored = AppSnapshot::from_json(&raw);
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn missing_collections_fall_back_to_seeds() {
        let restored = AppSnapshot::from_json(r#"{"zones":[],"portfolios":[]}"#);
        assert!(restored.zones.is_empty());
        assert!(restored.portfolios.is_empty());
        // Untouched fields come from the seeds, not from empty defaults.
        assert_eq!(restored.ltcs, seed::default_ltcs());
        assert_eq!(restored.departments, seed::default_departments());
        assert_eq!(restored.config, seed::default_config());
    }

    #[test]
    fn malformed_payload_falls_back_to_default() {
        let restored = AppSnapshot::from_json("not json at all {");
        assert_eq!(restored, AppSnapshot::default());
        assert_eq!(restored.portfolios.len(), seed::SEED_STUDENT_COUNT);
    }
}
