pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod presentation;
pub mod projection;

pub use error::{Facet3dError, Result};
