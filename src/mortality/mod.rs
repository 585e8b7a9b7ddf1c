pub mod calculator;
pub mod types;

pub use calculator::{age_on, compute_stats, expected_death_date};
pub use types::MortalityStats;
