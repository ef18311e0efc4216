//! Homematch - deterministic property matching pipeline
//!
//! This library computes a compatibility score between each user and each
//! property, ranks properties per user, and renders a one-line rationale for
//! every recommendation. It implements a normalize -> score -> aggregate ->
//! rank -> explain pipeline over two tabular datasets.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, generate_reason, weighted_contributions, Matcher};
pub use crate::models::{ComponentScores, MatchRow, Property, ScoredMatch, ScoringWeights, User};
