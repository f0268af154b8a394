//! Scalar math utilities shared by the coordinate pipeline
//!
//! This module collects the small, pure building blocks the rest of the
//! crate is assembled from: angle unit conversions, validated intervals with
//! clipping/wraparound semantics, and a Horner-scheme polynomial evaluator
//! for the time-series astronomical formulas.

pub mod angle;
pub mod interval;
pub mod polynomial;

pub use interval::{ClosedInterval, RightOpenInterval};
pub use polynomial::Polynomial;
