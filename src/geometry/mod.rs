pub mod ribbon;
pub mod spiral;

pub use ribbon::{build_ribbon, BuildRibbon, Ribbon, RibbonEdgePoint};
pub use spiral::{generate_spiral, Spiral, SpiralSample, SpiralSamples};
