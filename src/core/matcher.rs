use crate::core::explain::generate_reason;
use crate::core::scoring::calculate_match_score;
use crate::models::{Property, ScoredMatch, ScoringWeights, User};

/// Result of a full ranking run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_pairs: usize,
}

/// Main ranking orchestrator
///
/// Scores the full user x property cross product, then per user sorts
/// descending by match score and truncates to top-K. Ties keep input order
/// (stable sort), so a fixed input always produces the same table.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    /// Create a matcher; weights are rescaled to sum to 1
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights: weights.normalized(),
            min_score: 0.0,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Drop matches scoring below this floor (0 keeps everything)
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank all properties for one user, truncated to `top_k`
    pub fn rank_for_user(
        &self,
        user: &User,
        properties: &[Property],
        top_k: usize,
    ) -> Vec<ScoredMatch> {
        let mut scored: Vec<ScoredMatch> = properties
            .iter()
            .filter_map(|property| {
                let (score, components, gate) =
                    calculate_match_score(user, property, &self.weights);

                if score < self.min_score {
                    return None;
                }

                let reason = generate_reason(gate, &components);

                Some(ScoredMatch {
                    user_id: user.user_id.clone(),
                    property_id: property.property_id.clone(),
                    location: property.location.clone(),
                    property_type: property.property_type.clone(),
                    condition: property.condition.clone(),
                    bedrooms: property.bedrooms,
                    bathrooms: property.bathrooms,
                    size: property.size,
                    year_built: property.year_built,
                    price: property.price,
                    match_score: score,
                    budget_gate: gate,
                    components,
                    reason,
                })
            })
            .collect();

        // Stable sort keeps input order for equal scores
        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(top_k);
        scored
    }

    /// Rank the full cross product, users in input order
    pub fn rank_all(
        &self,
        users: &[User],
        properties: &[Property],
        top_k: usize,
    ) -> MatchResult {
        let total_pairs = users.len() * properties.len();

        let matches: Vec<ScoredMatch> = users
            .iter()
            .flat_map(|user| self.rank_for_user(user, properties, top_k))
            .collect();

        MatchResult {
            matches,
            total_pairs,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
