use criterion::{criterion_group, criterion_main, Criterion};

use lore_core::config::DetectionOptions;
use lore_core::record::{KnowledgeKind, KnowledgeRecord};
use lore_validation::ContradictionDetector;

/// `n` records in 64 dimensions, grouped into bands of near-duplicates so
/// the scan produces a realistic number of candidates.
fn build_records(n: usize) -> Vec<KnowledgeRecord> {
    let dims = 64;
    (0..n)
        .map(|i| {
            let mut embedding = vec![0.0f32; dims];
            embedding[i % dims] = 1.0;
            embedding[(i / dims) % dims] += 0.05;
            KnowledgeRecord::new(KnowledgeKind::Decision, format!("Decision {i}"))
                .with_id(format!("r{i:05}"))
                .with_confidence((i % 10) as f64 / 10.0)
                .with_embedding(embedding)
        })
        .collect()
}

fn bench_detect_500(c: &mut Criterion) {
    let records = build_records(500);
    let detector = ContradictionDetector::new();
    let options = DetectionOptions::default();

    c.bench_function("contradiction_detect_500_records", |b| {
        b.iter(|| {
            detector.detect(&records, &options);
        });
    });
}

fn bench_detect_2k(c: &mut Criterion) {
    let records = build_records(2_000);
    let detector = ContradictionDetector::new();
    let options = DetectionOptions::default();

    c.bench_function("contradiction_detect_2k_records", |b| {
        b.iter(|| {
            detector.detect(&records, &options);
        });
    });
}

criterion_group!(benches, bench_detect_500, bench_detect_2k);
criterion_main!(benches);
