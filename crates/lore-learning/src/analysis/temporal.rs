use chrono::{DateTime, Duration, Utc};

use lore_core::models::{TemporalPatterns, Trend};
use lore_core::record::KnowledgeRecord;

/// Creation counts over trailing 7, 30 and 90 day windows ending at `now`.
///
/// Growth is increasing iff the last week beats a week at the 30-day
/// average rate.
pub fn temporal_patterns(records: &[KnowledgeRecord], now: DateTime<Utc>) -> TemporalPatterns {
    let within = |days: i64| {
        let since = now - Duration::days(days);
        records.iter().filter(|r| r.created_at > since).count()
    };

    let last_7_days = within(7);
    let last_30_days = within(30);
    let last_90_days = within(90);
    let avg_per_day = last_30_days as f64 / 30.0;
    let trend = if last_7_days as f64 > avg_per_day * 7.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    TemporalPatterns {
        last_7_days,
        last_30_days,
        last_90_days,
        avg_per_day,
        trend,
    }
}
