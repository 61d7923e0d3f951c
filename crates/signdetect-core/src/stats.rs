//! Session statistics helpers.
//!
//! Pure functions over collected predictions, used by the history and live
//! views to summarize a session client-side.

use crate::detection::Prediction;
use std::collections::HashMap;

/// Formats a duration in milliseconds as `h:mm:ss`, or `m:ss` under an hour.
pub fn format_duration(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes % 60, seconds % 60)
    } else {
        format!("{}:{:02}", minutes, seconds % 60)
    }
}

/// Average confidence across predictions, rounded to one decimal place.
/// Returns 0 for an empty slice.
pub fn average_confidence(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let sum: f64 = predictions.iter().map(|p| p.confidence).sum();
    (sum / predictions.len() as f64 * 10.0).round() / 10.0
}

/// Groups predictions by recognized sign, preserving encounter order within
/// each group.
pub fn group_by_sign(predictions: &[Prediction]) -> HashMap<String, Vec<Prediction>> {
    let mut grouped: HashMap<String, Vec<Prediction>> = HashMap::new();
    for prediction in predictions {
        grouped
            .entry(prediction.sign.clone())
            .or_default()
            .push(prediction.clone());
    }
    grouped
}

/// Count and average confidence for one sign.
#[derive(Debug, Clone, PartialEq)]
pub struct SignFrequency {
    pub sign: String,
    pub count: usize,
    pub avg_confidence: f64,
}

/// The `limit` most frequently recognized signs, most frequent first.
pub fn most_frequent_signs(predictions: &[Prediction], limit: usize) -> Vec<SignFrequency> {
    let mut frequencies: Vec<SignFrequency> = group_by_sign(predictions)
        .into_iter()
        .map(|(sign, preds)| SignFrequency {
            sign,
            avg_confidence: average_confidence(&preds),
            count: preds.len(),
        })
        .collect();
    // Ties broken alphabetically so the order is deterministic
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sign.cmp(&b.sign)));
    frequencies.truncate(limit);
    frequencies
}

/// Summary statistics for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub duration: String,
    pub total_predictions: usize,
    pub unique_signs: usize,
    pub average_confidence: f64,
    pub most_frequent_signs: Vec<SignFrequency>,
    pub predictions_per_minute: f64,
}

/// Summarizes a session from its predictions and elapsed duration.
pub fn session_summary(predictions: &[Prediction], duration_ms: u64) -> SessionSummary {
    let unique_signs = group_by_sign(predictions).len();
    let predictions_per_minute = if duration_ms == 0 {
        0.0
    } else {
        let per_minute = predictions.len() as f64 / (duration_ms as f64 / 60_000.0);
        (per_minute * 10.0).round() / 10.0
    };

    SessionSummary {
        duration: format_duration(duration_ms),
        total_predictions: predictions.len(),
        unique_signs,
        average_confidence: average_confidence(predictions),
        most_frequent_signs: most_frequent_signs(predictions, 5),
        predictions_per_minute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(sign: &str, confidence: f64) -> Prediction {
        Prediction {
            sign: sign.to_string(),
            confidence,
        }
    }

    #[test]
    fn duration_formats_under_and_over_an_hour() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59_000), "0:59");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(3_600_000), "1:00:00");
        assert_eq!(format_duration(3_723_000), "1:02:03");
    }

    #[test]
    fn average_confidence_rounds_to_one_decimal() {
        assert_eq!(average_confidence(&[]), 0.0);

        let predictions = vec![
            prediction("A", 90.0),
            prediction("B", 85.5),
            prediction("A", 92.0),
        ];
        // (90 + 85.5 + 92) / 3 = 89.1666...
        assert_eq!(average_confidence(&predictions), 89.2);
    }

    #[test]
    fn most_frequent_signs_orders_and_truncates() {
        let predictions = vec![
            prediction("A", 80.0),
            prediction("B", 90.0),
            prediction("A", 100.0),
            prediction("C", 70.0),
            prediction("A", 90.0),
            prediction("B", 95.0),
        ];

        let top = most_frequent_signs(&predictions, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].sign, "A");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[0].avg_confidence, 90.0);
        assert_eq!(top[1].sign, "B");
        assert_eq!(top[1].count, 2);
    }

    #[test]
    fn summary_counts_unique_signs_and_rate() {
        let predictions = vec![
            prediction("A", 80.0),
            prediction("B", 90.0),
            prediction("A", 100.0),
        ];

        let summary = session_summary(&predictions, 90_000);
        assert_eq!(summary.duration, "1:30");
        assert_eq!(summary.total_predictions, 3);
        assert_eq!(summary.unique_signs, 2);
        assert_eq!(summary.average_confidence, 90.0);
        assert_eq!(summary.predictions_per_minute, 2.0);
    }

    #[test]
    fn summary_of_empty_session_is_all_zero() {
        let summary = session_summary(&[], 0);
        assert_eq!(summary.duration, "0:00");
        assert_eq!(summary.total_predictions, 0);
        assert_eq!(summary.unique_signs, 0);
        assert_eq!(summary.predictions_per_minute, 0.0);
    }
}
