use serde::{Deserialize, Serialize};

use crate::models::{ComponentScores, ScoringWeights};

/// Sub-scores at or above this level are called out as strengths
pub const STRONG_THRESHOLD: f64 = 0.80;

/// Sub-scores at or below this level are called out as trade-offs
pub const WEAK_THRESHOLD: f64 = 0.35;

/// Display label for a component key
pub fn component_label(key: &str) -> &'static str {
    match key {
        "price" => "price fit",
        "bedrooms" => "bedroom match",
        "bathrooms" => "bathroom match",
        "property_type" => "property type match",
        "condition" => "condition match",
        "year_built" => "modernity/year match",
        "size" => "size/spaciousness match",
        "location" => "location intent match",
        _ => "unknown component",
    }
}

/// One component's weighted contribution to the final score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentContribution {
    pub component: String,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Per-component weighted contributions, sorted by contribution descending
///
/// This is the breakdown the presentation layer charts next to each match.
pub fn weighted_contributions(
    components: &ComponentScores,
    weights: &ScoringWeights,
) -> Vec<ComponentContribution> {
    let mut contributions: Vec<ComponentContribution> = components
        .named()
        .into_iter()
        .zip(weights.named())
        .map(|((key, value), (_, weight))| ComponentContribution {
            component: key.to_string(),
            value,
            weight,
            contribution: value * weight,
        })
        .collect();

    contributions.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.component.cmp(&b.component))
    });

    contributions
}

/// Render the one-line "Why this matched" rationale for a scored pair
///
/// Bullets, joined with " • ":
/// 1. budget-gate band (skipped when there is no budget information)
/// 2. components >= 0.80: "strong on: ..." (at most three)
/// 3. components <= 0.35: "trade-offs: ..." (at most two, only if fewer
///    than two bullets so far)
///
/// Falls back to a balanced-match sentence when nothing stands out.
pub fn generate_reason(budget_gate: f64, components: &ComponentScores) -> String {
    let mut bullets: Vec<String> = Vec::new();

    if budget_gate > 0.0 {
        let band = if budget_gate >= 0.98 {
            "within budget"
        } else if budget_gate >= 0.85 {
            "slightly above budget (small penalty)"
        } else {
            "over budget (strong penalty)"
        };
        bullets.push(band.to_string());
    }

    let strong: Vec<&'static str> = components
        .named()
        .into_iter()
        .filter(|(_, value)| *value >= STRONG_THRESHOLD)
        .take(3)
        .map(|(key, _)| component_label(key))
        .collect();

    if !strong.is_empty() {
        bullets.push(format!("strong on: {}", strong.join(", ")));
    }

    if bullets.len() < 2 {
        let weak: Vec<&'static str> = components
            .named()
            .into_iter()
            .filter(|(_, value)| *value <= WEAK_THRESHOLD)
            .take(2)
            .map(|(key, _)| component_label(key))
            .collect();

        if !weak.is_empty() {
            bullets.push(format!("trade-offs: {}", weak.join(", ")));
        }
    }

    if bullets.is_empty() {
        return "Balanced match across constraints and preferences.".to_string();
    }

    capitalize(&bullets.join(" • ")) + "."
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
