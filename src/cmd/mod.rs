pub mod report;
pub mod serve;
