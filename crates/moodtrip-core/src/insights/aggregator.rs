//! Folding answer history into dashboard statistics.

use std::collections::BTreeMap;

use crate::insights::model::{AnswerHistoryEntry, InsightsReport, MoodSummary, Trend};

fn scores_for<'a>(
    history: &'a [AnswerHistoryEntry],
    category_key: &'a str,
) -> impl Iterator<Item = i32> + 'a {
    history
        .iter()
        .filter(move |entry| entry.category_key == category_key)
        .map(|entry| entry.score)
}

/// Counts occurrences of each selected label under `category_key`.
///
/// Returns an empty map when nothing was recorded for the category.
pub fn aggregate_label_frequencies(
    history: &[AnswerHistoryEntry],
    category_key: &str,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in history.iter().filter(|e| e.category_key == category_key) {
        *counts.entry(entry.selected_label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Label counts ordered by count descending, then label ascending.
pub fn sorted_label_frequencies(
    history: &[AnswerHistoryEntry],
    category_key: &str,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = aggregate_label_frequencies(history, category_key)
        .into_iter()
        .collect();
    // BTreeMap already yields labels ascending; a stable sort keeps that for ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The score recorded most often under `category_key`.
///
/// On equal counts the score seen first in history wins.
pub fn most_frequent_score(history: &[AnswerHistoryEntry], category_key: &str) -> Option<i32> {
    // (score, count) in first-seen order
    let mut tally: Vec<(i32, usize)> = Vec::new();
    for score in scores_for(history, category_key) {
        match tally.iter_mut().find(|(s, _)| *s == score) {
            Some((_, count)) => *count += 1,
            None => tally.push((score, 1)),
        }
    }

    let mut best: Option<(i32, usize)> = None;
    for (score, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((score, count));
        }
    }
    best.map(|(score, _)| score)
}

/// Most frequent score for every category present in history.
pub fn most_frequent_scores(history: &[AnswerHistoryEntry]) -> BTreeMap<String, i32> {
    let mut result = BTreeMap::new();
    for entry in history {
        if result.contains_key(&entry.category_key) {
            continue;
        }
        if let Some(score) = most_frequent_score(history, &entry.category_key) {
            result.insert(entry.category_key.clone(), score);
        }
    }
    result
}

/// The last `window_size` scores under `category_key`, oldest first.
pub fn recent_trend(
    history: &[AnswerHistoryEntry],
    category_key: &str,
    window_size: usize,
) -> Vec<i32> {
    let scores: Vec<i32> = scores_for(history, category_key).collect();
    let start = scores.len().saturating_sub(window_size);
    scores[start..].to_vec()
}

/// Average score and overall direction for `category_key`.
///
/// The trend is `Rising` when there is more than one sample and the latest
/// score exceeds the first one; otherwise `Stable`.
pub fn mood_summary(history: &[AnswerHistoryEntry], category_key: &str) -> Option<MoodSummary> {
    let scores: Vec<i32> = scores_for(history, category_key).collect();
    let (first, last) = (scores.first()?, scores.last()?);

    let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    let average = total as f64 / scores.len() as f64;
    let trend = if scores.len() > 1 && last > first {
        Trend::Rising
    } else {
        Trend::Stable
    };

    Some(MoodSummary {
        average,
        trend,
        samples: scores.len(),
    })
}

/// Builds the full dashboard report.
pub fn build_report(
    history: &[AnswerHistoryEntry],
    trend_category: &str,
    window_size: usize,
) -> InsightsReport {
    let mut label_frequencies = BTreeMap::new();
    for entry in history {
        if !label_frequencies.contains_key(&entry.category_key) {
            label_frequencies.insert(
                entry.category_key.clone(),
                sorted_label_frequencies(history, &entry.category_key),
            );
        }
    }

    InsightsReport {
        label_frequencies,
        most_frequent_scores: most_frequent_scores(history),
        trend_category: trend_category.to_string(),
        recent_trend: recent_trend(history, trend_category, window_size),
        mood: mood_summary(history, trend_category),
        total_answers: history.len(),
    }
}
