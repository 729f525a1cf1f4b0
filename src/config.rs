//! Game configuration
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files only override what they name. Validated once before the simulation
//! starts, nothing is re-checked mid-session.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest allowed radius band per ring (pixels)
pub const MIN_RING_SPACING: f32 = 1.0;
/// Gap kept between the outermost ring and the viewport edge
pub const VIEWPORT_MARGIN: f32 = 10.0;

/// Configuration rejected before startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("ball speed bounds must satisfy 0 < min < max (got {min}..{max})")]
    SpeedBounds { min: f32, max: f32 },
    #[error("largest ball radius {ball} does not fit inside smallest arc radius {arc}")]
    BallLargerThanArc { ball: f32, arc: f32 },
    #[error("arc radius range {min}..{max} cannot hold {count} distinct rings")]
    Radii { min: f32, max: f32, count: u32 },
    #[error("ring radii must strictly decrease (got {outer} then {inner})")]
    UnorderedRings { outer: f32, inner: f32 },
    #[error("outer arc radius {radius} does not fit the viewport (at most {limit})")]
    RingsOffscreen { radius: f32, limit: f32 },
    #[error("gap span must lie in (0, 360) degrees (got {min}..{max})")]
    GapSpan { min: f32, max: f32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inclusive `min..=max` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T> Range<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl Range<f32> {
    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn check_positive(&self, field: &'static str) -> Result<(), ConfigError> {
        self.check(field)?;
        positive(field, self.min)
    }
}

impl Range<u32> {
    fn check_positive(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::NonPositive { field, value: 0.0 });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min as f32,
                max: self.max as f32,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Ball physics settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Velocity at spawn and after every level reset (pixels/tick)
    pub initial_velocity: Vec2,
    /// Velocity scale applied on every bounce (>1 amplifies)
    pub elasticity: f32,
    /// Added to vy every tick (screen y grows downward)
    pub gravity: f32,
    /// Per-axis speed band enforced stochastically after a bounce
    pub speed_bounds: Range<f32>,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            initial_velocity: Vec2::new(0.0, 25.0),
            elasticity: 1.3,
            gravity: 3.0,
            speed_bounds: Range::new(20.0, 75.0),
        }
    }
}

impl BallConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ball.elasticity", self.elasticity)?;
        if !self.gravity.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "ball.gravity",
            });
        }
        if !self.initial_velocity.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "ball.initial_velocity",
            });
        }
        let Range { min, max } = self.speed_bounds;
        if !(min > 0.0 && min < max && max.is_finite()) {
            return Err(ConfigError::SpeedBounds { min, max });
        }
        Ok(())
    }
}

/// Full game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Target ticks per second
    pub tick_rate: u32,
    pub ball: BallConfig,
    /// Ball radius, re-rolled on every reset
    pub ball_radius: Range<f32>,
    /// Number of rings per level
    pub arc_count: Range<u32>,
    /// Outermost and innermost ring radius
    pub arc_radius: Range<f32>,
    /// Ring rotation (radians/tick, signed)
    pub rotation_speed: Range<f32>,
    /// Ring stroke width (pixels)
    pub arc_width: Range<u32>,
    /// Open gap size in degrees
    pub gap_span: Range<f32>,
    /// Distance from center past which the level regenerates.
    /// Defaults to the larger viewport dimension.
    pub reset_distance: Option<f32>,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            tick_rate: 30,
            ball: BallConfig::default(),
            ball_radius: Range::new(5.0, 15.0),
            arc_count: Range::new(5, 15),
            arc_radius: Range::new(40.0, 350.0),
            rotation_speed: Range::new(0.05, 0.2),
            arc_width: Range::new(2, 8),
            gap_span: Range::new(60.0, 90.0),
            reset_distance: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file and validate it
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width as f32)?;
        positive("height", self.height as f32)?;
        positive("tick_rate", self.tick_rate as f32)?;
        self.ball.validate()?;
        self.ball_radius.check_positive("ball_radius")?;
        self.arc_count.check_positive("arc_count")?;
        self.arc_radius.check_positive("arc_radius")?;
        self.rotation_speed.check("rotation_speed")?;
        self.arc_width.check_positive("arc_width")?;
        self.gap_span.check("gap_span")?;
        if !(self.gap_span.min > 0.0 && self.gap_span.max < 360.0) {
            return Err(ConfigError::GapSpan {
                min: self.gap_span.min,
                max: self.gap_span.max,
            });
        }
        if self.arc_count.max > 1 {
            let band = (self.arc_radius.max - self.arc_radius.min) / self.arc_count.max as f32;
            // Neighbouring radii must stay distinct after f32 rounding
            let min_band = MIN_RING_SPACING.max(self.arc_radius.max * f32::EPSILON * 16.0);
            if band < min_band {
                return Err(ConfigError::Radii {
                    min: self.arc_radius.min,
                    max: self.arc_radius.max,
                    count: self.arc_count.max,
                });
            }
        }
        if self.arc_radius.max > self.max_ring_radius() {
            return Err(ConfigError::RingsOffscreen {
                radius: self.arc_radius.max,
                limit: self.max_ring_radius(),
            });
        }
        // Containment correction assumes the ball always fits in the innermost ring
        if self.ball_radius.max >= self.arc_radius.min {
            return Err(ConfigError::BallLargerThanArc {
                ball: self.ball_radius.max,
                arc: self.arc_radius.min,
            });
        }
        if let Some(d) = self.reset_distance {
            positive("reset_distance", d)?;
        }
        Ok(())
    }

    /// Shared center of every ring
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Largest ring radius that stays on screen
    pub fn max_ring_radius(&self) -> f32 {
        self.width.min(self.height) as f32 / 2.0
    }

    /// Shrink the outer ring radius to fit the viewport with a margin.
    ///
    /// The inner radius is left alone; validation reports a band that
    /// became too narrow.
    pub fn fit_rings_to_viewport(&mut self) {
        let limit = self.max_ring_radius() - VIEWPORT_MARGIN;
        if self.arc_radius.max > limit {
            log::info!(
                "Outer ring radius {:.0} clamped to {:.0} for {}x{}",
                self.arc_radius.max,
                limit,
                self.width,
                self.height
            );
            self.arc_radius.max = limit;
        }
    }

    /// Distance past which the level regenerates
    pub fn reset_threshold(&self) -> f32 {
        self.reset_distance.unwrap_or(self.width.max(self.height) as f32)
    }
}
