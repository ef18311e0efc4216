use serde::{Deserialize, Serialize};

/// A home seeker with budget and preference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub budget: f64,
    #[serde(rename = "preferredLocation")]
    pub preferred_location: String,
    #[serde(rename = "preferredType")]
    pub preferred_type: String,
    #[serde(rename = "desiredSize")]
    pub desired_size: f64,
    #[serde(rename = "desiredBedrooms")]
    pub desired_bedrooms: u8,
    #[serde(rename = "desiredBathrooms", default)]
    pub desired_bathrooms: u8,
}

/// A property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "propertyId")]
    pub property_id: String,
    pub price: f64,
    pub location: String,
    #[serde(rename = "propertyType")]
    pub property_type: String,
    pub size: f64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    #[serde(rename = "yearBuilt")]
    pub year_built: u16,
    pub condition: String,
}

/// The eight per-dimension sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComponentScores {
    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub property_type: f64,
    pub condition: f64,
    pub year_built: f64,
    pub size: f64,
    pub location: f64,
}

impl ComponentScores {
    /// Component keys paired with their values, in fixed weight-table order
    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("price", self.price),
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
            ("property_type", self.property_type),
            ("condition", self.condition),
            ("year_built", self.year_built),
            ("size", self.size),
            ("location", self.location),
        ]
    }
}

/// A scored user-property pair, one row of the output table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "propertyId")]
    pub property_id: String,
    pub location: String,
    #[serde(rename = "propertyType")]
    pub property_type: String,
    pub condition: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub size: f64,
    #[serde(rename = "yearBuilt")]
    pub year_built: u16,
    pub price: f64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "budgetGate")]
    pub budget_gate: f64,
    pub components: ComponentScores,
    pub reason: String,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub property_type: f64,
    pub condition: f64,
    pub year_built: f64,
    pub size: f64,
    pub location: f64,
}

impl ScoringWeights {
    /// Weight keys paired with their values, in the same order as
    /// [`ComponentScores::named`]
    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("price", self.price),
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
            ("property_type", self.property_type),
            ("condition", self.condition),
            ("year_built", self.year_built),
            ("size", self.size),
            ("location", self.location),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.price
            + self.bedrooms
            + self.bathrooms
            + self.property_type
            + self.condition
            + self.year_built
            + self.size
            + self.location
    }

    /// Rescale so the weights sum to 1. Falls back to the defaults when the
    /// sum is not positive.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= 0.0 {
            return Self::default();
        }
        Self {
            price: self.price / sum,
            bedrooms: self.bedrooms / sum,
            bathrooms: self.bathrooms / sum,
            property_type: self.property_type / sum,
            condition: self.condition / sum,
            year_built: self.year_built / sum,
            size: self.size / sum,
            location: self.location / sum,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: 0.30,
            bedrooms: 0.18,
            bathrooms: 0.10,
            property_type: 0.12,
            condition: 0.08,
            year_built: 0.07,
            size: 0.07,
            location: 0.08,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_rescales_to_one() {
        let weights = ScoringWeights {
            price: 3.0,
            bedrooms: 1.0,
            bathrooms: 1.0,
            property_type: 1.0,
            condition: 1.0,
            year_built: 1.0,
            size: 1.0,
            location: 1.0,
        };

        let normalized = weights.normalized();
        assert!((normalized.sum() - 1.0).abs() < 1e-6);
        assert!((normalized.price - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_falls_back_on_zero_sum() {
        let weights = ScoringWeights {
            price: 0.0,
            bedrooms: 0.0,
            bathrooms: 0.0,
            property_type: 0.0,
            condition: 0.0,
            year_built: 0.0,
            size: 0.0,
            location: 0.0,
        };

        let normalized = weights.normalized();
        assert!((normalized.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_named_orders_agree() {
        let scores = ComponentScores::default();
        let weights = ScoringWeights::default();

        for ((score_key, _), (weight_key, _)) in scores.named().iter().zip(weights.named().iter()) {
            assert_eq!(score_key, weight_key);
        }
    }
}
