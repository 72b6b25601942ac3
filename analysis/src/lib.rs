//! Validation and feature extraction for public match logs.
//!
//! A raw log goes through [`Pipeline::extract`] and comes out either as a
//! fixed-width [`ExtractedRow`] or as a [`Rejection`] naming why it was
//! dropped. [`batch`] folds many logs into the parallel output tables.

pub mod batch;
pub mod calendar;
pub mod pipeline;
pub mod record;
pub mod rejection;
pub mod roles;
pub mod roster;
pub mod stats;

pub use pipeline::{ExtractedRow, Pipeline, PipelineConfig};
pub use rejection::{Rejection, RejectionKind};
