// Model exports
pub mod domain;
pub mod records;
pub mod report;

pub use domain::{ComponentScores, Property, ScoredMatch, ScoringWeights, User};
pub use records::{PropertyRecord, UserRecord};
pub use report::MatchRow;
