use std::f64::consts::TAU;

use tracing::debug;

use crate::error::Result;

use super::{MakeRibbon, RibbonConfig, TwistedRibbon};

/// Extra twists added per ribbon index.
const TWIST_STEP: f64 = 0.5;

/// Extra depth added per ribbon index.
const Z_SPREAD_STEP: f64 = 20.0;

/// One ribbon of a burst with the parameters it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstRibbon {
    /// Position of the ribbon in the burst.
    pub index: usize,
    /// Suggested rotation for rendering, evenly spread over a full turn.
    pub rotation: f64,
    /// Twist used for this ribbon.
    pub twist: f64,
    /// Depth spread used for this ribbon.
    pub z_spread: f64,
    pub ribbon: TwistedRibbon,
}

/// Creates `count` ribbons sharing a center with swept parameters.
///
/// Ribbon `i` is built from `base` with `twist + 0.5 * i` and
/// `z_spread + 20 * i`.
pub struct MakeBurst {
    count: usize,
    base: RibbonConfig,
}

impl MakeBurst {
    /// Creates a new `MakeBurst` operation.
    #[must_use]
    pub fn new(count: usize, base: RibbonConfig) -> Self {
        Self { count, base }
    }

    /// Executes the operation. A count of zero yields an empty burst.
    ///
    /// # Errors
    ///
    /// Returns an error if any ribbon fails to build, e.g. when the swept
    /// depth of a later ribbon reaches the eye plane.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<BurstRibbon>> {
        let mut ribbons = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let i = index as f64;
            let config = RibbonConfig {
                twist: self.base.twist + i * TWIST_STEP,
                z_spread: self.base.z_spread + i * Z_SPREAD_STEP,
                ..self.base
            };
            let ribbon = MakeRibbon::new(config).execute()?;
            ribbons.push(BurstRibbon {
                index,
                rotation: i * TAU / self.count as f64,
                twist: config.twist,
                z_spread: config.z_spread,
                ribbon,
            });
        }
        debug!(count = self.count, "built ribbon burst");
        Ok(ribbons)
    }
}

/// Creates a burst of `count` ribbons around `base`.
///
/// # Errors
///
/// See [`MakeBurst::execute`].
pub fn create_burst(count: usize, base: RibbonConfig) -> Result<Vec<BurstRibbon>> {
    MakeBurst::new(count, base).execute()
}
