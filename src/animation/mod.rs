use std::f64::consts::{PI, TAU};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Ribbon, RibbonEdgePoint};
use crate::math::easing::{elastic_ease, smooth_step};
use crate::math::{rotate_z, Point2, Projector};

/// Animation time source that can be paused.
///
/// Time spent paused is excluded from [`elapsed`](Self::elapsed).
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start: Instant,
    paused_total: Duration,
    paused_at: Option<Instant>,
}

impl AnimationClock {
    /// Starts a clock at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            paused_total: Duration::ZERO,
            paused_at: None,
        }
    }

    /// Returns whether the clock is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Pauses the clock. Pausing twice has no further effect.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resumes a paused clock.
    pub fn resume(&mut self, now: Instant) {
        if let Some(at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(at);
        }
    }

    /// Running time at `now`, excluding paused intervals.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let until = self.paused_at.unwrap_or(now);
        until
            .saturating_duration_since(self.start)
            .saturating_sub(self.paused_total)
    }
}

/// Idle motion tuning for the stacked ribbon layers of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerMotionConfig {
    /// Wobble speed in radians per millisecond.
    pub base_speed: f64,
    /// Vertical float amplitude in pixels.
    pub float_amplitude: f64,
    /// Float speed in radians per millisecond.
    pub float_speed: f64,
    /// Per-layer speed multipliers.
    pub layer_speeds: [f64; 3],
    /// Per-layer phase offsets.
    pub layer_phases: [f64; 3],
}

impl Default for LayerMotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.025,
            float_amplitude: 8.0,
            float_speed: 0.0015,
            layer_speeds: [1.0, 1.3, 1.6],
            layer_phases: [0.0, PI / 3.0, PI * 2.0 / 3.0],
        }
    }
}

/// 2D transform of one ribbon layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub rotation_deg: f64,
    pub float_y: f64,
}

/// Resting angle of each stacked layer, in degrees.
const LAYER_BASE_ROTATION: [f64; 3] = [0.0, 45.0, 90.0];

/// Wobble amplitude in degrees.
const WOBBLE_DEG: f64 = 8.0;

/// Idle wobble and float of layer `layer` of bubble `bubble` at `elapsed_ms`.
///
/// Layers beyond the third reuse unit speed, zero phase and zero base angle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layer_motion(
    elapsed_ms: f64,
    bubble: usize,
    layer: usize,
    config: &LayerMotionConfig,
) -> LayerTransform {
    let idx = bubble as f64;
    let speed = config.layer_speeds.get(layer).copied().unwrap_or(1.0);
    let phase = config.layer_phases.get(layer).copied().unwrap_or(0.0);
    let base = LAYER_BASE_ROTATION.get(layer).copied().unwrap_or(0.0) + idx * 15.0;

    let wobble_time = (elapsed_ms * config.base_speed * speed + phase) % TAU;
    let rotation_deg = base + wobble_time.sin() * WOBBLE_DEG;

    let float_time = elapsed_ms * config.float_speed + idx * 0.5;
    let float_norm = (float_time.sin() + 1.0) / 2.0;
    let float_y = (elastic_ease(float_norm) * 2.0 - 1.0) * config.float_amplitude;

    LayerTransform {
        rotation_deg,
        float_y,
    }
}

/// Continuous idle spin of one bubble about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleSpin {
    /// Current angle in radians.
    pub rotation: f64,
    /// Radians added per frame.
    pub speed: f64,
}

impl BubbleSpin {
    /// Creates a spin state.
    #[must_use]
    pub fn new(rotation: f64, speed: f64) -> Self {
        Self { rotation, speed }
    }

    /// Advances one frame.
    pub fn advance(&mut self) {
        self.rotation = (self.rotation + self.speed) % TAU;
    }

    /// Returns `ribbon` rotated about Z by the current angle and re-projected.
    ///
    /// # Errors
    ///
    /// Returns an error if re-projection fails; rotation about Z keeps depth,
    /// so this only happens for edges that were already degenerate.
    pub fn apply(&self, ribbon: &Ribbon, projector: &Projector) -> Result<Ribbon> {
        let spin = |edge: &[RibbonEdgePoint]| -> Result<Vec<RibbonEdgePoint>> {
            edge.iter()
                .map(|e| {
                    let original = rotate_z(e.original, self.rotation);
                    let projected = projector.project(&original)?;
                    Ok(RibbonEdgePoint {
                        projected: projected.point,
                        original,
                        scale: projected.scale,
                    })
                })
                .collect()
        };

        let center = *projector.center();
        let (sin, cos) = self.rotation.sin_cos();
        let centerline = ribbon
            .centerline
            .iter()
            .map(|p| {
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                Point2::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
            })
            .collect();

        Ok(Ribbon {
            front: spin(&ribbon.front)?,
            back: spin(&ribbon.back)?,
            centerline,
        })
    }
}

/// One frame of a hover scale transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverFrame {
    pub scale: f64,
    pub glow_opacity: f64,
}

/// Grow toward `target_scale` with an overshooting ease.
///
/// `progress` is clamped to `[0, 1]`.
#[must_use]
pub fn hover_in(progress: f64, target_scale: f64) -> HoverFrame {
    let eased = elastic_ease(progress.clamp(0.0, 1.0));
    HoverFrame {
        scale: 1.0 + (target_scale - 1.0) * eased,
        glow_opacity: 0.5 + eased * 0.4,
    }
}

/// Settle back from `start_scale` to 1 with a smooth step.
#[must_use]
pub fn hover_out(progress: f64, start_scale: f64) -> HoverFrame {
    let eased = smooth_step(progress.clamp(0.0, 1.0));
    HoverFrame {
        scale: start_scale - (start_scale - 1.0) * eased,
        glow_opacity: 0.9 - eased * 0.4,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::{build_ribbon, generate_spiral};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn clock_excludes_paused_time() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::new(t0);
        assert_eq!(clock.elapsed(t0 + ms(100)), ms(100));

        clock.pause(t0 + ms(100));
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(t0 + ms(500)), ms(100));

        clock.resume(t0 + ms(400));
        assert_eq!(clock.elapsed(t0 + ms(450)), ms(150));
    }

    #[test]
    fn double_pause_keeps_first_instant() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::new(t0);
        clock.pause(t0 + ms(10));
        clock.pause(t0 + ms(50));
        clock.resume(t0 + ms(60));
        assert_eq!(clock.elapsed(t0 + ms(60)), ms(10));
        clock.resume(t0 + ms(70));
        assert_eq!(clock.elapsed(t0 + ms(70)), ms(20));
    }

    #[test]
    fn layer_motion_at_rest() {
        let cfg = LayerMotionConfig::default();
        let m = layer_motion(0.0, 2, 1, &cfg);
        // 45 + 2 * 15 plus the wobble at phase pi/3.
        assert_abs_diff_eq!(
            m.rotation_deg,
            75.0 + (PI / 3.0).sin() * 8.0,
            epsilon = 1e-9
        );
        assert!(m.float_y.abs() <= cfg.float_amplitude * 1.2);
    }

    #[test]
    fn wobble_stays_within_amplitude() {
        let cfg = LayerMotionConfig::default();
        for step in 0..200 {
            let t = f64::from(step) * 16.7;
            for layer in 0..3 {
                let m = layer_motion(t, 0, layer, &cfg);
                let base = LAYER_BASE_ROTATION[layer];
                assert!((m.rotation_deg - base).abs() <= WOBBLE_DEG + 1e-9);
            }
        }
    }

    #[test]
    fn spin_preserves_edge_count_and_depth() {
        let projector = Projector::new(800.0, Point2::new(100.0, 100.0)).unwrap();
        let samples = generate_spiral(10.0, 80.0, 1.5, 12, 60.0).unwrap();
        let ribbon = build_ribbon(&samples, 2.0, 12.0, projector).unwrap();

        let mut spin = BubbleSpin::new(0.0, 0.3);
        spin.advance();
        let spun = spin.apply(&ribbon, &projector).unwrap();

        assert_eq!(spun.len(), ribbon.len());
        for (a, b) in ribbon.front.iter().zip(&spun.front) {
            assert_abs_diff_eq!(a.original.z, b.original.z);
            assert_abs_diff_eq!(a.scale, b.scale);
        }
        // The centerline turns rigidly about the screen center.
        let d0 = ribbon.centerline[6] - Point2::new(100.0, 100.0);
        let d1 = spun.centerline[6] - Point2::new(100.0, 100.0);
        assert_abs_diff_eq!(d0.norm(), d1.norm(), epsilon = 1e-9);
    }

    #[test]
    fn zero_spin_is_identity() {
        let projector = Projector::new(800.0, Point2::origin()).unwrap();
        let samples = generate_spiral(10.0, 80.0, 1.0, 4, 0.0).unwrap();
        let ribbon = build_ribbon(&samples, 1.0, 10.0, projector).unwrap();
        let spun = BubbleSpin::new(0.0, 0.0).apply(&ribbon, &projector).unwrap();
        for (a, b) in ribbon.back.iter().zip(&spun.back) {
            assert_abs_diff_eq!((a.projected - b.projected).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn hover_transitions_hit_endpoints() {
        assert_abs_diff_eq!(hover_in(0.0, 1.15).scale, 1.0);
        assert_abs_diff_eq!(hover_in(1.0, 1.15).scale, 1.15, epsilon = 1e-12);
        assert_abs_diff_eq!(hover_in(5.0, 1.15).glow_opacity, 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(hover_out(0.0, 1.15).scale, 1.15);
        assert_abs_diff_eq!(hover_out(1.0, 1.15).scale, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hover_out(1.0, 1.15).glow_opacity, 0.5, epsilon = 1e-12);
    }
}
