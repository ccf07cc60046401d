//! Every golden scenario run through the engine.

use lore_core::config::{ClusterOptions, DetectionOptions};
use lore_core::models::AntiPatternKind;
use lore_engine::QualityEngine;
use lore_storage::InMemoryStore;
use test_fixtures::load_scenario;

fn engine_for(path: &str) -> (QualityEngine<InMemoryStore>, serde_json::Value) {
    let scenario = load_scenario(path);
    let store = InMemoryStore::with_records(scenario.records).unwrap();
    (QualityEngine::new(store), scenario.expected)
}

#[tokio::test]
async fn golden_contradiction_scenarios() {
    for path in [
        "golden/contradiction/near_duplicate_pair.json",
        "golden/contradiction/linked_pair.json",
    ] {
        let (engine, expected) = engine_for(path);
        let summary = engine
            .auto_resolve_contradictions(&DetectionOptions::default())
            .await
            .unwrap();
        let want = expected["contradictions"].as_u64().unwrap() as usize;
        assert_eq!(summary.detected, want, "{path}");
        assert_eq!(summary.resolved, want, "{path}");
        assert_eq!(engine.superseded_history().await.unwrap().len(), want);
    }
}

#[tokio::test]
async fn golden_clustering_scenario() {
    let (engine, expected) = engine_for("golden/consolidation/two_tight_pairs.json");
    let clusters = engine
        .cluster_knowledge(&ClusterOptions::default())
        .await
        .unwrap();
    let sizes: Vec<u64> = clusters.iter().map(|c| c.size as u64).collect();
    let want: Vec<u64> = expected["sizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(sizes, want);
}

#[tokio::test]
async fn golden_learning_scenario() {
    let (engine, expected) = engine_for("golden/learning/unlinked_errors.json");
    let found = engine.detect_anti_patterns().await.unwrap();
    for kind in expected["anti_patterns"].as_array().unwrap() {
        let kind = match kind.as_str().unwrap() {
            "duplication" => AntiPatternKind::Duplication,
            "incomplete" => AntiPatternKind::Incomplete,
            "low_quality" => AntiPatternKind::LowQuality,
            "organization" => AntiPatternKind::Organization,
            other => panic!("unknown anti-pattern kind {other}"),
        };
        assert!(found.iter().any(|a| a.kind == kind), "missing {kind:?}");
    }
}
