//! Bounding box and letterbox geometry types for detection datasets.

mod common;

pub use size::*;
pub mod size;

pub use corner::*;
pub mod corner;

pub use center::*;
pub mod center;

pub use letterbox::*;
pub mod letterbox;
