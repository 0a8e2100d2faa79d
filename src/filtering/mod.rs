pub mod pipeline;
pub mod predicates;

pub use pipeline::{FilterConfig, FilterPipeline, FilterStatistics, Predicate};
