// Core pipeline exports
pub mod explain;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use explain::{generate_reason, weighted_contributions, ComponentContribution};
pub use matcher::{MatchResult, Matcher};
pub use normalize::clamp01;
pub use scoring::{calculate_match_score, score_components};
