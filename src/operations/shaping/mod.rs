mod thicken;

pub use thicken::{Thicken, ThicknessLayer};
