//! Core types and utilities for statistical colour transfer
//!
//! This crate provides the fundamental data structures shared by the colour
//! space, statistics and transfer crates: display images, working-space
//! planes, transfer options and the error type.

pub mod consts;
pub mod error;
pub mod gamut;
pub mod image;
pub mod options;
pub mod types;

pub use error::{TransferError, TransferResult};
pub use gamut::Gamut;
pub use image::*;
pub use options::*;
pub use types::*;
