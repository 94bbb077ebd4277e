//! Letterbox preprocessing for object-detection datasets.
//!
//! Resizes images to a fixed network input size while preserving aspect
//! ratio, and rewrites bounding-box label files into the letterboxed,
//! normalized coordinate space the training pipeline consumes.

mod common;

pub use letterbox::*;
pub mod letterbox;

pub use probe::*;
pub mod probe;

pub use dataset::*;
pub mod dataset;
