//! Ball Bouncer - a ball escaping a stack of rotating, gapped rings
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, boundary arcs, level stack, tick)
//! - `config`: Validated game configuration
//! - `renderer`: Draw-call sink trait and headless implementations
//! - `audio`: Sound trigger sink
//! - `platform`: Input and frame clock abstraction
//! - `app`: The fixed-rate game loop

pub mod app;
pub mod audio;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::{Game, GameStats};
pub use config::{BallConfig, ConfigError, GameConfig, Range};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Brightness floor for the ball color (perceived 0-255)
    pub const BALL_BRIGHTNESS: f32 = 150.0;
    /// Brightness floor for arc colors
    pub const ARC_BRIGHTNESS: f32 = 100.0;

    /// Post-bounce speed factor range
    pub const BOUNCE_SPEED_JITTER: (f32, f32) = (0.8, 1.2);
    /// Post-bounce heading offset (radians, symmetric)
    pub const BOUNCE_ANGLE_JITTER: f32 = std::f32::consts::PI / 8.0;
    /// Factor range applied to an axis slower than the minimum speed
    pub const SPEED_UP_FACTOR: (f32, f32) = (1.5, 3.0);
    /// Factor range applied to an axis faster than the maximum speed
    pub const SLOW_DOWN_FACTOR: (f32, f32) = (0.5, 0.8);
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// atan2 angle of `point` around `center` (radians, (-π, π])
#[inline]
pub fn angle_from(point: Vec2, center: Vec2) -> f32 {
    let d = point - center;
    d.y.atan2(d.x)
}

/// Unit vector from `center` toward `point`, `None` when they coincide
#[inline]
pub fn outward_normal(center: Vec2, point: Vec2) -> Option<Vec2> {
    (point - center).try_normalize()
}
