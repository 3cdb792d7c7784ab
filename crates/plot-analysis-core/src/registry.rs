//! Read-only owner lookup loaded from the JSON fixture at startup.

use crate::error::PlotError;
use crate::types::OwnerRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Fixture key whose record answers every unknown plot id.
pub const DEFAULT_PLOT_KEY: &str = "default";

/// Owner records keyed by plot id.
///
/// Constructed once and shared behind an `Arc`; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct OwnerRegistry {
    records: BTreeMap<String, OwnerRecord>,
    default: OwnerRecord,
}

impl OwnerRegistry {
    /// Load the fixture at `path`. Missing files, malformed JSON, and a
    /// missing `default` entry are all fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PlotError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        let records: BTreeMap<String, OwnerRecord> =
            serde_json::from_slice(&bytes).map_err(|source| PlotError::FixtureFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let registry = Self::from_records(records)?;
        tracing::info!(
            path = %path.display(),
            plots = registry.len(),
            "Loaded owner fixture"
        );
        Ok(registry)
    }

    pub fn from_records(mut records: BTreeMap<String, OwnerRecord>) -> Result<Self, PlotError> {
        let default = records
            .remove(DEFAULT_PLOT_KEY)
            .ok_or_else(|| PlotError::MissingDefault(DEFAULT_PLOT_KEY.to_string()))?;

        Ok(Self { records, default })
    }

    /// Record for `plot_id`, or the default record when the id is unknown.
    pub fn get(&self, plot_id: &str) -> &OwnerRecord {
        self.records.get(plot_id).unwrap_or(&self.default)
    }

    pub fn contains(&self, plot_id: &str) -> bool {
        self.records.contains_key(plot_id)
    }

    pub fn default_record(&self) -> &OwnerRecord {
        &self.default
    }

    /// Number of named plots, excluding the default entry.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn record(owner: &str, rtc: &str, status: &str) -> OwnerRecord {
        OwnerRecord {
            owner_name: owner.to_string(),
            rtc_number: rtc.to_string(),
            ownership_status: status.to_string(),
        }
    }

    fn sample_records() -> BTreeMap<String, OwnerRecord> {
        let mut records = BTreeMap::new();
        records.insert(
            DEFAULT_PLOT_KEY.to_string(),
            record("Unregistered Owner", "RTC-0000-0000", "Unverified"),
        );
        records.insert(
            "PLOT-001".to_string(),
            record("Ramesh Gowda", "RTC-2023-0451", "Clear Title"),
        );
        records.insert(
            "PLOT-002".to_string(),
            record("Lakshmi Devi", "RTC-2021-1187", "Under Mutation"),
        );
        records
    }

    fn temp_fixture(contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plot-registry-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mock_data.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn known_plot_returns_its_record() {
        let registry = OwnerRegistry::from_records(sample_records()).unwrap();

        for (plot_id, expected) in sample_records() {
            if plot_id == DEFAULT_PLOT_KEY {
                continue;
            }
            assert_eq!(registry.get(&plot_id), &expected);
            assert!(registry.contains(&plot_id));
        }
    }

    #[test]
    fn unknown_plot_falls_back_to_default() {
        let registry = OwnerRegistry::from_records(sample_records()).unwrap();
        let default = record("Unregistered Owner", "RTC-0000-0000", "Unverified");

        for plot_id in ["PLOT-999", "", "plot-001", "unknown-id"] {
            assert_eq!(registry.get(plot_id), &default);
            assert!(!registry.contains(plot_id));
        }
        assert_eq!(registry.default_record(), &default);
    }

    #[test]
    fn default_entry_is_not_counted_as_a_plot() {
        let registry = OwnerRegistry::from_records(sample_records()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(DEFAULT_PLOT_KEY));
    }

    #[test]
    fn missing_default_is_rejected() {
        let mut records = sample_records();
        records.remove(DEFAULT_PLOT_KEY);

        let err = OwnerRegistry::from_records(records).unwrap_err();
        assert!(matches!(err, PlotError::MissingDefault(key) if key == "default"));
    }

    #[test]
    fn load_reads_fixture_and_ignores_extra_fields() {
        let path = temp_fixture(
            r#"{
                "default": {"owner_name": "Nobody", "rtc_number": "RTC-0", "ownership_status": "Unknown"},
                "PLOT-7": {"owner_name": "Asha", "rtc_number": "RTC-7", "ownership_status": "Clear Title", "land_type": "Homestead"}
            }"#,
        );

        let registry = OwnerRegistry::load(&path).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("PLOT-7").owner_name, "Asha");
        assert_eq!(registry.get("PLOT-8").owner_name, "Nobody");
    }

    #[test]
    fn load_fails_for_missing_file() {
        let path = std::env::temp_dir()
            .join(format!("plot-registry-missing-{}", Uuid::new_v4()))
            .join("mock_data.json");

        let err = OwnerRegistry::load(&path).unwrap_err();
        assert!(matches!(err, PlotError::FixtureIo { .. }));
    }

    #[test]
    fn load_fails_for_malformed_json() {
        let path = temp_fixture("{ \"default\": ");

        let err = OwnerRegistry::load(&path).unwrap_err();
        assert!(matches!(err, PlotError::FixtureFormat { .. }));
    }

    #[test]
    fn load_fails_when_record_is_incomplete() {
        let path = temp_fixture(r#"{"default": {"owner_name": "Nobody"}}"#);

        let err = OwnerRegistry::load(&path).unwrap_err();
        assert!(matches!(err, PlotError::FixtureFormat { .. }));
    }

    #[test]
    fn bundled_fixture_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/mock_data.json");

        let registry = OwnerRegistry::load(path).unwrap();
        assert!(registry.contains("PLOT-001"));
        assert_eq!(registry.default_record().rtc_number, "RTC-0000-0000");
    }
}
