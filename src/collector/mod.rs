pub mod extract;
pub mod market_hours;
pub mod pipeline;

pub use extract::Extractor;
pub use pipeline::{Collector, CycleOutcome};
