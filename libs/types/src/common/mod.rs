//! Common building blocks shared by every VIX crate

pub mod errors;
pub mod fixed_point;
