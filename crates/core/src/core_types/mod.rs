//! Core data types: temperature fields, time series and time units

pub mod field;
pub mod units;

pub use field::{Field, TimeSeries};
pub use units::Seconds;
