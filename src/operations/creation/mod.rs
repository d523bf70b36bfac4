mod make_burst;
mod make_ribbon;
mod ribbon_config;

pub use make_burst::{create_burst, BurstRibbon, MakeBurst};
pub use make_ribbon::{create_twisted_ribbon, MakeRibbon, TwistedRibbon};
pub use ribbon_config::RibbonConfig;
