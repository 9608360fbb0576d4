//! Total-score banding used by the quiz submission endpoint.
//!
//! This path sums raw option values with no reverse-coding and no scale
//! separation, then bands the total. It is independent of [`crate::engine`]
//! and will usually disagree with it for the same answers; keep the two
//! separate.

use ctq_core::models::quiz::OptionId;
use ctq_core::models::submission::{ResultCategory, SubmissionResponse};

/// 0-3 Low, 4-7 Medium, 8 and above High.
pub fn categorize(score: i64) -> ResultCategory {
    match score {
        0..=3 => ResultCategory::Low,
        4..=7 => ResultCategory::Medium,
        8.. => ResultCategory::High,
        _ => ResultCategory::Unknown,
    }
}

/// Sum the resolved value of each selected option. Options whose value could
/// not be resolved are skipped.
pub fn score_submission<I>(selections: I) -> SubmissionResponse
where
    I: IntoIterator<Item = (OptionId, Option<i64>)>,
{
    let mut score = 0i64;
    for (option_id, value) in selections {
        match value {
            Some(value) => score += value,
            None => tracing::warn!(option_id = option_id.0, "option value unresolved, skipped"),
        }
    }

    let result_category = categorize(score);
    tracing::info!(score, category = ?result_category, "banded submission");

    SubmissionResponse {
        score,
        result_category,
    }
}
