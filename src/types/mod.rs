//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod campaign;
pub mod units;

pub use campaign::*;
pub use units::*;
