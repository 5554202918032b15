//! Core building blocks: crop geometry, resampling, and save helpers.
//! These are internal primitives consumed by the high-level `api` module.
pub mod geometry;
pub mod params;
pub mod processing;
