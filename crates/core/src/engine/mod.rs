pub mod calendar;
pub mod counters;
pub mod eligibility;
pub mod fairness;
pub mod generate;

pub use fairness::FairnessPolicy;
pub use generate::{GenerationSummary, GeneratorConfig};
