use chrono::Utc;
use tracing::{debug, instrument, warn};

use lore_core::constants::{SUPERSESSION_CONFIDENCE_FLOOR, SUPERSESSION_PENALTY};
use lore_core::errors::{LoreError, LoreResult};
use lore_core::models::{ContradictionCandidate, Resolution, ResolutionAction, ResolutionDetail};
use lore_core::record::{RecordPatch, Supersession, SupersedesEntry};
use lore_core::traits::IKnowledgeStore;

/// Supersede the loser of `candidate` in favour of its winner.
///
/// Two writes: the winner's audit trail is extended, then the loser gets its
/// supersession marker and a penalized confidence. If the loser write fails
/// the winner's trail is restored, so an error leaves neither record changed.
/// Fails fast with `RecordNotFound` naming whichever id is missing.
#[instrument(skip_all, fields(winner = %candidate.winner, loser = %candidate.loser))]
pub async fn resolve_one<S: IKnowledgeStore>(
    store: &S,
    candidate: &ContradictionCandidate,
) -> LoreResult<Resolution> {
    let winner = store
        .get(&candidate.winner)
        .await?
        .ok_or_else(|| LoreError::not_found(&candidate.winner))?;
    let loser = store
        .get(&candidate.loser)
        .await?
        .ok_or_else(|| LoreError::not_found(&candidate.loser))?;

    let resolved_at = Utc::now();
    let before = loser.confidence;
    let after = before.penalized(SUPERSESSION_PENALTY, SUPERSESSION_CONFIDENCE_FLOOR);

    // The first supersession holds the confidence the record was written with.
    let original_confidence = match &loser.supersession {
        Some(previous) => {
            warn!(
                loser = %loser.id,
                previous_winner = %previous.superseded_by,
                "superseding a record that is already superseded"
            );
            previous.original_confidence
        }
        None => before,
    };

    let supersession = Supersession {
        superseded_by: winner.id.clone(),
        superseded_at: resolved_at,
        reason: candidate.reason.clone(),
        original_confidence,
    };

    let mut trail = winner.supersedes.clone();
    trail.push(SupersedesEntry {
        id: loser.id.clone(),
        reason: candidate.reason.clone(),
        resolved_at,
    });
    store
        .update_metadata(&winner.id, RecordPatch::supersedes(trail))
        .await?;

    if let Err(e) = store
        .update_metadata(&loser.id, RecordPatch::supersede(supersession, after))
        .await
    {
        if let Err(rollback) = store
            .update_metadata(&winner.id, RecordPatch::supersedes(winner.supersedes.clone()))
            .await
        {
            warn!(winner = %winner.id, error = %rollback, "could not restore winner trail");
        }
        return Err(e);
    }

    debug!(
        before = before.value(),
        after = after.value(),
        similarity = candidate.similarity,
        "loser superseded"
    );

    Ok(Resolution {
        winner: winner.id.clone(),
        loser: loser.id,
        action: ResolutionAction::Superseded,
        detail: ResolutionDetail {
            resolved_at,
            superseded_by: winner.id,
            reason: candidate.reason.clone(),
            original_confidence: before.value(),
            new_confidence: after.value(),
            similarity: candidate.similarity,
        },
    })
}
