pub mod correlation;
pub mod proportion;
pub mod types;

pub use self::correlation::payload_correlation;
pub use self::proportion::outcome_proportion;
pub use self::types::{ProportionChart, ScatterChart, ScatterPoint, Slice};
