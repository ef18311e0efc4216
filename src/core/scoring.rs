use crate::core::normalize::{
    budget_gate, categorical_closeness, clamp01, condition_score, count_closeness,
    price_closeness, size_closeness, year_modernity,
};
use crate::models::{ComponentScores, Property, ScoringWeights, User};

/// Compute the eight per-dimension sub-scores for a user-property pair
///
/// Each sub-score is in [0, 1]. Missing or malformed attributes have already
/// been normalized to zero values, which the closeness functions score as 0.
pub fn score_components(user: &User, property: &Property) -> ComponentScores {
    ComponentScores {
        price: price_closeness(property.price, user.budget),
        bedrooms: count_closeness(property.bedrooms, user.desired_bedrooms),
        bathrooms: count_closeness(property.bathrooms, user.desired_bathrooms),
        property_type: categorical_closeness(&property.property_type, &user.preferred_type),
        condition: condition_score(&property.condition),
        year_built: year_modernity(property.year_built),
        size: size_closeness(property.size, user.desired_size),
        location: categorical_closeness(&property.location, &user.preferred_location),
    }
}

/// Calculate the final match score (0-1) for a user-property pair
///
/// Scoring formula:
/// score = s_price * 0.30 + s_bed * 0.18 + s_bath * 0.10 + s_type * 0.12
///       + s_cond * 0.08 + s_year * 0.07 + s_size * 0.07 + s_loc * 0.08
///
/// The budget gate is returned alongside the score; it does not enter the
/// weighted sum but is carried through to the output table.
pub fn calculate_match_score(
    user: &User,
    property: &Property,
    weights: &ScoringWeights,
) -> (f64, ComponentScores, f64) {
    let components = score_components(user, property);

    let total: f64 = components
        .named()
        .into_iter()
        .zip(weights.named())
        .map(|((_, score), (_, weight))| score * weight)
        .sum();

    let gate = budget_gate(property.price, user.budget);

    (clamp01(total), components, gate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            user_id: "u1".to_string(),
            budget: 400_000.0,
            preferred_location: "Downtown".to_string(),
            preferred_type: "Apartment".to_string(),
            desired_size: 1_200.0,
            desired_bedrooms: 2,
            desired_bathrooms: 1,
        }
    }

    fn create_test_property(price: f64, location: &str) -> Property {
        Property {
            property_id: "p1".to_string(),
            price,
            location: location.to_string(),
            property_type: "Apartment".to_string(),
            size: 1_200.0,
            bedrooms: 2,
            bathrooms: 1,
            year_built: 2020,
            condition: "New".to_string(),
        }
    }

    #[test]
    fn test_perfect_pair_scores_high() {
        let user = create_test_user();
        let property = create_test_property(400_000.0, "Downtown");
        let weights = ScoringWeights::default();

        let (score, components, gate) = calculate_match_score(&user, &property, &weights);

        assert!(score > 0.95, "Expected near-perfect score, got {}", score);
        assert_eq!(gate, 1.0);
        assert_eq!(components.location, 1.0);
        assert_eq!(components.bedrooms, 1.0);
    }

    #[test]
    fn test_score_within_valid_range() {
        let user = create_test_user();
        let property = create_test_property(900_000.0, "Suburbs");
        let weights = ScoringWeights::default();

        let (score, components, gate) = calculate_match_score(&user, &property, &weights);

        assert!(score >= 0.0 && score <= 1.0);
        assert!(gate >= 0.0 && gate <= 1.0);
        for (name, value) in components.named() {
            assert!(
                value >= 0.0 && value <= 1.0,
                "Component {} out of range: {}",
                name,
                value
            );
        }
    }

    #[test]
    fn test_location_mismatch_scores_lower() {
        let user = create_test_user();
        let weights = ScoringWeights::default();

        let (downtown, _, _) =
            calculate_match_score(&user, &create_test_property(400_000.0, "Downtown"), &weights);
        let (suburbs, _, _) =
            calculate_match_score(&user, &create_test_property(400_000.0, "Suburbs"), &weights);

        assert!(downtown > suburbs);
    }

    #[test]
    fn test_missing_budget_gives_zero_price_component() {
        let mut user = create_test_user();
        user.budget = 0.0;
        let property = create_test_property(400_000.0, "Downtown");

        let components = score_components(&user, &property);
        assert_eq!(components.price, 0.0);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let user = create_test_user();
        let property = create_test_property(425_000.0, "Downtown");
        let weights = ScoringWeights::default();

        let (first, _, _) = calculate_match_score(&user, &property, &weights);
        let (second, _, _) = calculate_match_score(&user, &property, &weights);

        assert_eq!(first, second);
    }
}
