pub mod animation;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod market;
pub mod math;
pub mod operations;
pub mod path;
pub mod render;
pub mod shading;

pub use error::{RibbonError, Result};
