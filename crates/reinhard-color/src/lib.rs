//! Colour space transformations for statistical colour transfer
//!
//! This crate converts 8-bit display images to and from the three-plane
//! working space the statistics operate in:
//! - CIE L*a*b* (delegated to the `palette` crate)
//! - lαβ, a log-compressed cone-response space built from explicit matrices
//! - 3x3 matrix helpers shared by the above

pub mod lab;
pub mod log_lms;
pub mod matrix;
pub mod space;

pub use lab::CieLab;
pub use log_lms::LogLms;
pub use matrix::Mat3;
pub use space::{color_space, ColorSpace};
