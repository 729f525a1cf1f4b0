//! Ring stack and level generation
//!
//! Rings are stored outermost first. The innermost survivor sits on top of
//! the stack and is the only ring the ball interacts with.

use glam::Vec2;
use rand::Rng;

use super::arc::BoundaryArc;
use crate::config::{ConfigError, GameConfig};
use crate::consts::ARC_BRIGHTNESS;
use crate::renderer::random_bright_color;

/// Concentric rings, outermost at the bottom
#[derive(Debug, Clone, Default)]
pub struct BoundaryStack {
    arcs: Vec<BoundaryArc>,
}

impl BoundaryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rings ordered outermost first.
    ///
    /// Radii must be strictly descending.
    pub fn from_arcs(arcs: Vec<BoundaryArc>) -> Result<Self, ConfigError> {
        if let Some(pair) = arcs.windows(2).find(|w| w[1].radius >= w[0].radius) {
            return Err(ConfigError::UnorderedRings {
                outer: pair[0].radius,
                inner: pair[1].radius,
            });
        }
        Ok(Self { arcs })
    }

    /// The innermost surviving ring
    #[inline]
    pub fn active(&self) -> Option<&BoundaryArc> {
        self.arcs.last()
    }

    /// Remove the innermost ring
    #[inline]
    pub fn pop(&mut self) -> Option<BoundaryArc> {
        self.arcs.pop()
    }

    /// Spin every ring by one tick
    pub fn rotate_all(&mut self) {
        for arc in &mut self.arcs {
            arc.rotate();
        }
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Rings outermost first
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryArc> {
        self.arcs.iter()
    }
}

/// Generate a fresh set of rings around `center`.
///
/// The radius range is cut into one band per ring; each ring lands in the
/// upper half of its band, so radii are strictly descending and never reach
/// the configured minimum. Expects a validated config, whose radius band is
/// wide enough for neighbouring radii to stay distinct.
pub fn generate_level<R: Rng>(config: &GameConfig, center: Vec2, rng: &mut R) -> BoundaryStack {
    let count = rng.random_range(config.arc_count.min..=config.arc_count.max);
    let outer = config.arc_radius.max;
    let step = (outer - config.arc_radius.min) / count as f32;

    let mut arcs = Vec::with_capacity(count as usize);
    for i in 0..count {
        let jitter = if step > 0.0 {
            rng.random_range(0.0..step * 0.5)
        } else {
            0.0
        };
        let radius = outer - i as f32 * step - jitter;

        let start = rng.random_range(0.0..=180.0f32);
        let gap = rng.random_range(config.gap_span.min..=config.gap_span.max);
        let end = start + (360.0 - gap);

        let rotation_speed =
            rng.random_range(config.rotation_speed.min..=config.rotation_speed.max);
        let width = rng.random_range(config.arc_width.min..=config.arc_width.max);
        let color = random_bright_color(rng, ARC_BRIGHTNESS);

        arcs.push(BoundaryArc {
            center,
            radius,
            start_angle: start.to_radians(),
            end_angle: end.to_radians(),
            rotation_speed,
            width,
            color,
        });
    }
    debug_assert!(arcs.windows(2).all(|w| w[0].radius > w[1].radius));

    log::info!(
        "Generated level: {} rings, radius {:.0}..{:.0}",
        arcs.len(),
        arcs.last().map_or(0.0, |a| a.radius),
        outer
    );
    BoundaryStack { arcs }
}
