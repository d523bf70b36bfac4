pub mod creation;
pub mod shaping;

pub use creation::{
    create_burst, create_twisted_ribbon, BurstRibbon, MakeBurst, MakeRibbon, RibbonConfig,
    TwistedRibbon,
};
pub use shaping::{Thicken, ThicknessLayer};
