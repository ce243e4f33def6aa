//! Plain-text rendering of results.

use moodtrip_application::SurveyOutcome;
use moodtrip_core::insights::{InsightsReport, Trend};
use moodtrip_core::matching::MatchResult;
use moodtrip_core::place::Place;

pub fn match_line(result: &MatchResult<'_>) -> String {
    format!(
        "{:>3}%  #{} {}",
        result.percentage, result.place.id, result.place.name
    )
}

pub fn place_line(place: &Place) -> String {
    if place.address.is_empty() {
        format!("#{} {}", place.id, place.name)
    } else {
        format!("#{} {} ({})", place.id, place.name, place.address)
    }
}

pub fn outcome(outcome: &SurveyOutcome<'_>) -> String {
    let mut out = String::new();
    let Some(best) = &outcome.best else {
        out.push_str("No places available to match.\n");
        return out;
    };

    let place = best.place;
    out.push_str(&format!("Best match: {} ({}%)\n", place.name, best.percentage));
    if !place.description.is_empty() {
        out.push_str(&format!("  {}\n", place.description));
    }
    out.push_str(&format!("  Average score: {}\n", place.average_score()));
    if !place.best_with.is_empty() {
        out.push_str(&format!("  Best with: {}\n", place.best_with));
    }
    if !place.recommended_duration.is_empty() {
        out.push_str(&format!("  Stay: {}\n", place.recommended_duration));
    }

    if !outcome.more.is_empty() {
        out.push_str("\nYou might also like:\n");
        for result in &outcome.more {
            out.push_str(&format!("  {}\n", match_line(result)));
        }
    }
    out
}

pub fn insights(report: &InsightsReport) -> String {
    let mut out = String::new();
    if report.is_empty() {
        out.push_str("No survey answers recorded yet.\n");
        return out;
    }

    out.push_str(&format!("Answers recorded: {}\n", report.total_answers));
    for (category, labels) in &report.label_frequencies {
        let counts: Vec<String> = labels
            .iter()
            .map(|(label, count)| format!("{} x{}", label, count))
            .collect();
        out.push_str(&format!("  {}: {}", category, counts.join(", ")));
        if let Some(score) = report.most_frequent_scores.get(category) {
            out.push_str(&format!(" (usual score {})", score));
        }
        out.push('\n');
    }

    let trend: Vec<String> = report.recent_trend.iter().map(i32::to_string).collect();
    let trend = if trend.is_empty() {
        "-".to_string()
    } else {
        trend.join(" -> ")
    };
    out.push_str(&format!("Recent {}: {}\n", report.trend_category, trend));
    if let Some(mood) = &report.mood {
        let direction = match mood.trend {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
        };
        out.push_str(&format!(
            "Average {}: {:.1} over {} answers, {}\n",
            report.trend_category, mood.average, mood.samples, direction
        ));
    }
    out
}
