//! Tag suggestions mined from cluster content.

use std::collections::HashMap;

use lore_core::models::{Cluster, TagSuggestion};
use tracing::{debug, instrument};

const STOPWORDS: [&str; 5] = ["this", "that", "with", "from", "have"];

/// Tokens must be longer than this many characters.
const MIN_TOKEN_CHARS: usize = 3;

const ALTERNATIVES: usize = 2;

/// Lower-cased whitespace tokens, minus short words and stopwords.
pub fn tokenize(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS && !STOPWORDS.contains(&w.as_str()))
}

/// Tokens ranked by frequency, most frequent first. Equal counts keep
/// first-occurrence order.
pub fn rank_tokens<'a>(contents: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for content in contents {
        for token in tokenize(content) {
            match index.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// One suggestion per cluster of at least `min_cluster_size` members that
/// yields any token.
#[instrument(skip_all, fields(clusters = clusters.len()))]
pub fn suggest_tags(clusters: &[Cluster], min_cluster_size: usize) -> Vec<TagSuggestion> {
    let suggestions: Vec<TagSuggestion> = clusters
        .iter()
        .filter(|c| c.size >= min_cluster_size)
        .filter_map(|cluster| {
            let ranked = rank_tokens(cluster.members.iter().map(|m| m.content.as_str()));
            let mut top = ranked.into_iter().map(|(token, _)| token);
            let suggested_tag = top.next()?;
            Some(TagSuggestion {
                suggested_tag,
                alternative_tags: top.take(ALTERNATIVES).collect(),
                cluster_size: cluster.size,
                confidence: cluster.avg_confidence,
                reason: format!("Found in {} related entries", cluster.size),
                affected_ids: cluster.member_ids(),
            })
        })
        .collect();
    debug!(suggestions = suggestions.len(), "tag suggestion complete");
    suggestions
}
