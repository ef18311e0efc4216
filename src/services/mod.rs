// Service exports
pub mod dataset;
pub mod report;

pub use dataset::{load_properties, load_users, DatasetError};
pub use report::{write_matches, ReportError};
