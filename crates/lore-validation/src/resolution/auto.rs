use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use lore_core::config::DetectionOptions;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::models::{AutoResolveSummary, ResolutionFailure};
use lore_core::record::KnowledgeRecord;
use lore_core::traits::IKnowledgeStore;

use super::resolve::resolve_one;
use crate::contradiction::ContradictionDetector;

/// Detect over the live records and resolve every candidate in order.
///
/// A failing candidate is recorded and the batch moves on. A loser that an
/// earlier candidate in the same batch already superseded is not penalized
/// twice; it is reported as an `AlreadySuperseded` failure instead, so
/// `detected == resolved + failed` always holds.
#[instrument(skip_all)]
pub async fn auto_resolve<S: IKnowledgeStore>(
    store: &S,
    options: &DetectionOptions,
) -> LoreResult<AutoResolveSummary> {
    let live: Vec<KnowledgeRecord> = store
        .fetch_all()
        .await?
        .into_iter()
        .filter(|r| !r.is_superseded())
        .collect();

    let candidates = ContradictionDetector::new().detect(&live, options);
    let mut summary = AutoResolveSummary {
        detected: candidates.len(),
        ..AutoResolveSummary::default()
    };

    // loser id -> winner id, for losers handled earlier in this batch
    let mut superseded_here: HashMap<String, String> = HashMap::new();

    for candidate in candidates {
        let outcome = match superseded_here.get(&candidate.loser) {
            Some(by) => Err(LoreError::AlreadySuperseded {
                id: candidate.loser.clone(),
                superseded_by: by.clone(),
            }),
            None => resolve_one(store, &candidate).await,
        };

        match outcome {
            Ok(resolution) => {
                superseded_here.insert(resolution.loser.clone(), resolution.winner.clone());
                summary.resolutions.push(resolution);
            }
            Err(e @ LoreError::AlreadySuperseded { .. }) => {
                debug!(
                    winner = %candidate.winner,
                    loser = %candidate.loser,
                    "loser already superseded in this batch"
                );
                summary.errors.push(ResolutionFailure {
                    contradiction: candidate,
                    error: e.to_string(),
                });
            }
            Err(e) => {
                warn!(
                    winner = %candidate.winner,
                    loser = %candidate.loser,
                    error = %e,
                    "failed to resolve contradiction"
                );
                summary.errors.push(ResolutionFailure {
                    contradiction: candidate,
                    error: e.to_string(),
                });
            }
        }
    }

    summary.resolved = summary.resolutions.len();
    summary.failed = summary.errors.len();
    info!(
        detected = summary.detected,
        resolved = summary.resolved,
        failed = summary.failed,
        "auto-resolve complete"
    );
    Ok(summary)
}
