use serde::Serialize;

use crate::models::domain::ScoredMatch;

/// One row of the output CSV, in the column layout the presentation layer
/// expects: pair key, property facts, final score, budget gate, component
/// scores, and the one-line rationale.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    #[serde(rename = "User ID")]
    pub user_id: String,
    #[serde(rename = "Property ID")]
    pub property_id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: u8,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: u8,
    #[serde(rename = "Size")]
    pub size: f64,
    #[serde(rename = "Year Built")]
    pub year_built: u16,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "MatchScore")]
    pub match_score: f64,
    #[serde(rename = "g_budget")]
    pub budget_gate: f64,
    #[serde(rename = "s_price")]
    pub s_price: f64,
    #[serde(rename = "s_bed")]
    pub s_bed: f64,
    #[serde(rename = "s_bath")]
    pub s_bath: f64,
    #[serde(rename = "s_type")]
    pub s_type: f64,
    #[serde(rename = "s_cond")]
    pub s_cond: f64,
    #[serde(rename = "s_year")]
    pub s_year: f64,
    #[serde(rename = "s_size")]
    pub s_size: f64,
    #[serde(rename = "s_loc")]
    pub s_loc: f64,
    #[serde(rename = "Why this matched")]
    pub reason: String,
}

impl From<&ScoredMatch> for MatchRow {
    fn from(m: &ScoredMatch) -> Self {
        Self {
            user_id: m.user_id.clone(),
            property_id: m.property_id.clone(),
            location: m.location.clone(),
            property_type: m.property_type.clone(),
            condition: m.condition.clone(),
            bedrooms: m.bedrooms,
            bathrooms: m.bathrooms,
            size: m.size,
            year_built: m.year_built,
            price: m.price,
            match_score: m.match_score,
            budget_gate: m.budget_gate,
            s_price: m.components.price,
            s_bed: m.components.bedrooms,
            s_bath: m.components.bathrooms,
            s_type: m.components.property_type,
            s_cond: m.components.condition,
            s_year: m.components.year_built,
            s_size: m.components.size,
            s_loc: m.components.location,
            reason: m.reason.clone(),
        }
    }
}
