pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rng;
pub mod scoring;

// Re-exports for convenience
pub use rng::{FixedSource, RandomSource, ThreadRngSource};
pub use scoring::FraudScorer;
