// Scoring: the rule-based risk engine and its helpers.

pub mod engine;
pub mod username;

pub use engine::{analyze, analyze_at, follower_ratio};
pub use username::is_suspicious_username;
