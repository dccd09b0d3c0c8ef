//! Channel statistics and correlation transforms for colour transfer
//!
//! This crate implements the numerical stages of the transfer: per-channel
//! mean/standard deviation with standardisation, the chromatic covariance
//! adjustment, and gamut-safe rescaling of working images.

pub mod covariance;
pub mod gamut;
pub mod parallel;
pub mod stats;

pub use covariance::*;
pub use gamut::*;
pub use stats::*;
