use lore_core::record::*;
use lore_core::similarity::{cosine_similarity, normalize};
use proptest::prelude::*;

#[test]
fn kind_parses_from_lowercase_name() {
    for kind in KnowledgeKind::ALL {
        let parsed: KnowledgeKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert!("workflow".parse::<KnowledgeKind>().is_err());
}

#[test]
fn record_json_uses_snake_case_kind() {
    let r = KnowledgeRecord::new(KnowledgeKind::Solution, "Pin the tokio version")
        .with_id("r1")
        .with_tags(["deps"]);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["kind"], "solution");
    assert_eq!(json["id"], "r1");
    assert!(json.get("supersession").is_none());
}

#[test]
fn record_deserializes_with_missing_optional_fields() {
    let json = r#"{
        "id": "r7",
        "kind": "error",
        "content": "connection refused",
        "confidence": 0.4,
        "created_at": "2026-01-01T00:00:00Z",
        "last_accessed_at": "2026-01-01T00:00:00Z"
    }"#;
    let r: KnowledgeRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.kind, KnowledgeKind::Error);
    assert!(r.tags.is_empty());
    assert!(r.embedding.is_none());
    assert!(!r.is_superseded());
    assert_eq!(r.access_count, 0);
}

#[test]
fn record_with_unknown_kind_is_rejected() {
    let json = r#"{
        "id": "r8",
        "kind": "rumor",
        "content": "x",
        "confidence": 0.4,
        "created_at": "2026-01-01T00:00:00Z",
        "last_accessed_at": "2026-01-01T00:00:00Z"
    }"#;
    assert!(serde_json::from_str::<KnowledgeRecord>(json).is_err());
}

fn non_zero_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, 8)
        .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-3))
}

proptest! {
    #[test]
    fn prop_self_similarity_is_one(v in non_zero_vector()) {
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn prop_similarity_is_symmetric(a in non_zero_vector(), b in non_zero_vector()) {
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn prop_similarity_is_bounded(a in non_zero_vector(), b in non_zero_vector()) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn prop_normalization_preserves_direction(v in non_zero_vector()) {
        let n = normalize(&v);
        prop_assert!((cosine_similarity(&v, &n) - 1.0).abs() < 1e-5);
        let len: f64 = n.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        prop_assert!((len - 1.0).abs() < 1e-5);
    }
}
