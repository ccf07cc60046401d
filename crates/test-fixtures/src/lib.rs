//! Test fixture loader for Lore golden datasets, plus record builders
//! shared by the integration tests of every crate.

pub mod builders;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use lore_core::record::KnowledgeRecord;

pub use builders::{at_days_ago, axis, error, near, record, solution};

/// A golden scenario: input records plus free-form expected output.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub records: Vec<KnowledgeRecord>,
    pub expected: serde_json::Value,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a golden scenario.
pub fn load_scenario(relative_path: &str) -> Scenario {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/contradiction/near_duplicate_pair.json",
            "golden/contradiction/linked_pair.json",
            "golden/consolidation/two_tight_pairs.json",
            "golden/learning/unlinked_errors.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_golden_file_parses_as_scenario() {
        let mut total = 0;
        for dir in ["golden/contradiction", "golden/consolidation", "golden/learning"] {
            for file in list_fixtures(dir) {
                let rel = file
                    .strip_prefix(fixtures_root())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                let scenario = load_scenario(&rel);
                assert!(!scenario.records.is_empty(), "{} has no records", rel);
                total += 1;
            }
        }
        assert_eq!(total, 4);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        assert!(list_fixtures("golden/does-not-exist").is_empty());
    }
}
