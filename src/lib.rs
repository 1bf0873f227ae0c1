pub mod collections;
pub mod contract;
pub mod laws;
pub mod relations;
pub mod samples;
pub mod scenarios;
pub mod values;
