//! The bouncing ball
//!
//! Explicit Euler at one step per tick. Bounces are deliberately noisy: after
//! the specular reflection the speed and heading are jittered and each axis is
//! nudged back toward the speed band by a random factor, never an exact clamp.

use glam::Vec2;
use rand::Rng;

use super::collision::reflect_velocity;
use crate::config::{BallConfig, ConfigError, Range};
use crate::consts::*;
use crate::renderer::Color;

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub elasticity: f32,
    /// Added to vy every tick
    pub gravity: f32,
    /// Per-axis speed band (min < max)
    pub speed_bounds: Range<f32>,
    pub color: Color,
}

impl Ball {
    pub fn new(
        position: Vec2,
        radius: f32,
        config: &BallConfig,
        color: Color,
    ) -> Result<Self, ConfigError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ConfigError::NonPositive {
                field: "ball.radius",
                value: radius,
            });
        }
        config.validate()?;
        Ok(Self {
            position,
            velocity: config.initial_velocity,
            radius,
            elasticity: config.elasticity,
            gravity: config.gravity,
            speed_bounds: config.speed_bounds,
            color,
        })
    }

    /// position += velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// vy += gravity
    #[inline]
    pub fn apply_gravity(&mut self) {
        self.velocity.y += self.gravity;
    }

    /// Bounce off a surface with unit normal `normal`
    pub fn reflect<R: Rng>(&mut self, normal: Vec2, rng: &mut R) {
        self.velocity = reflect_velocity(self.velocity, normal) * self.elasticity;
        self.randomize_bounce(rng);
        self.adjust_speed(rng);
    }

    /// Jitter speed and heading
    fn randomize_bounce<R: Rng>(&mut self, rng: &mut R) {
        let (lo, hi) = BOUNCE_SPEED_JITTER;
        let speed = self.velocity.length() * rng.random_range(lo..=hi);
        let angle = self.velocity.y.atan2(self.velocity.x)
            + rng.random_range(-BOUNCE_ANGLE_JITTER..=BOUNCE_ANGLE_JITTER);
        self.velocity = Vec2::from_angle(angle) * speed;
    }

    /// Push each axis back toward the speed band by a random factor
    fn adjust_speed<R: Rng>(&mut self, rng: &mut R) {
        let bounds = self.speed_bounds;
        self.velocity.x = adjust_axis(self.velocity.x, bounds, rng);
        self.velocity.y = adjust_axis(self.velocity.y, bounds, rng);
    }

    pub fn distance_from(&self, center: Vec2) -> f32 {
        crate::distance(self.position, center)
    }

    pub fn angle_from(&self, center: Vec2) -> f32 {
        crate::angle_from(self.position, center)
    }

    /// Respawn at `position` with fresh velocity, size and color
    pub fn reset(&mut self, position: Vec2, velocity: Vec2, radius: f32, color: Color) {
        self.position = position;
        self.velocity = velocity;
        self.radius = radius;
        self.color = color;
    }
}

fn adjust_axis<R: Rng>(component: f32, bounds: Range<f32>, rng: &mut R) -> f32 {
    let magnitude = component.abs();
    if magnitude < bounds.min {
        let (lo, hi) = SPEED_UP_FACTOR;
        component * rng.random_range(lo..=hi)
    } else if magnitude > bounds.max {
        let (lo, hi) = SLOW_DOWN_FACTOR;
        component * rng.random_range(lo..=hi)
    } else {
        component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball(velocity: Vec2) -> Ball {
        ball_with(velocity, 1.0, Range::new(10.0, 75.0))
    }

    fn ball_with(velocity: Vec2, elasticity: f32, speed_bounds: Range<f32>) -> Ball {
        let config = BallConfig {
            initial_velocity: velocity,
            elasticity,
            gravity: 2.0,
            speed_bounds,
        };
        Ball::new(Vec2::new(100.0, 100.0), 5.0, &config, Color::RED).unwrap()
    }

    /// Signed angle from `a` to `b`
    fn heading_between(a: Vec2, b: Vec2) -> f32 {
        a.perp_dot(b).atan2(a.dot(b))
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = BallConfig::default();
        assert!(Ball::new(Vec2::ZERO, 0.0, &config, Color::RED).is_err());
        assert!(Ball::new(Vec2::ZERO, -3.0, &config, Color::RED).is_err());
    }

    #[test]
    fn test_integrate_and_gravity() {
        let mut b = ball(Vec2::new(3.0, -4.0));
        b.integrate();
        assert_eq!(b.position, Vec2::new(103.0, 96.0));
        b.apply_gravity();
        assert_eq!(b.velocity, Vec2::new(3.0, -2.0));
        // Gravity does not move the ball by itself
        assert_eq!(b.position, Vec2::new(103.0, 96.0));
    }

    #[test]
    fn test_distance_and_angle() {
        let b = ball(Vec2::ZERO);
        let center = Vec2::new(100.0, 50.0);
        assert!((b.distance_from(center) - 50.0).abs() < 1e-5);
        assert!((b.angle_from(center) - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_reverses_normal_component() {
        // Heading jitter is at most π/8, so a head-on bounce always leaves
        // the ball moving away from the wall.
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let mut b = ball(Vec2::new(0.0, 20.0));
            b.reflect(Vec2::new(0.0, -1.0), &mut rng);
            assert!(b.velocity.y < 0.0, "velocity {:?}", b.velocity);
        }
    }

    #[test]
    fn test_reflect_speed_stays_in_stochastic_envelope() {
        // Before the per-axis adjustment the speed is |v| * e * U[0.8, 1.2];
        // adjustment scales each axis by at most 3.0 and at least 0.5.
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..200 {
            let mut b = ball(Vec2::new(30.0, 40.0));
            b.reflect(Vec2::new(-0.6, -0.8), &mut rng);
            let speed = b.velocity.length();
            assert!(speed <= 50.0 * 1.2 * 3.0 + 1e-3);
            assert!(speed >= 50.0 * 0.8 * 0.5 - 1e-3);
        }
    }

    #[test]
    fn test_reflect_scales_by_elasticity_then_jitters() {
        // Wide bounds keep both axes untouched by the speed adjustment
        let bounds = Range::new(1.0, 1000.0);
        let normal = Vec2::new(-0.6, -0.8);
        let specular = Vec2::new(-30.0, -40.0);
        let mut rng = Pcg32::seed_from_u64(17);
        let mut widest = 0.0f32;
        for _ in 0..200 {
            let mut b = ball_with(Vec2::new(30.0, 40.0), 1.3, bounds);
            b.reflect(normal, &mut rng);

            let speed = b.velocity.length();
            assert!(
                (50.0 * 1.3 * 0.8 - 1e-3..=50.0 * 1.3 * 1.2 + 1e-3).contains(&speed),
                "speed {speed}"
            );
            let deviation = heading_between(specular, b.velocity).abs();
            assert!(deviation <= BOUNCE_ANGLE_JITTER + 1e-4, "deviation {deviation}");
            widest = widest.max(deviation);
        }
        // The heading really is jittered, not just reflected
        assert!(widest > BOUNCE_ANGLE_JITTER / 2.0, "widest {widest}");
    }

    #[test]
    fn test_elasticity_changes_bounce_speed() {
        let bounds = Range::new(1.0, 1000.0);
        let normal = Vec2::new(-0.6, -0.8);
        for seed in 0..20 {
            let mut plain = ball_with(Vec2::new(30.0, 40.0), 1.0, bounds);
            let mut springy = ball_with(Vec2::new(30.0, 40.0), 1.3, bounds);
            // Same seed, same jitter draws
            plain.reflect(normal, &mut Pcg32::seed_from_u64(seed));
            springy.reflect(normal, &mut Pcg32::seed_from_u64(seed));

            let ratio = springy.velocity.length() / plain.velocity.length();
            assert!((ratio - 1.3).abs() < 1e-4, "seed {seed} ratio {ratio}");
            assert!(heading_between(plain.velocity, springy.velocity).abs() < 1e-4);
        }
    }

    #[test]
    fn test_adjust_axis_multiplies_rather_than_clamps() {
        let bounds = Range::new(20.0, 75.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let slow = adjust_axis(-10.0, bounds, &mut rng);
            assert!((-30.0..=-15.0).contains(&slow), "slow {slow}");

            let fast = adjust_axis(100.0, bounds, &mut rng);
            assert!((50.0..=80.0).contains(&fast), "fast {fast}");

            assert_eq!(adjust_axis(40.0, bounds, &mut rng), 40.0);
        }
    }

    #[test]
    fn test_reset() {
        let mut b = ball(Vec2::new(9.0, 9.0));
        b.reset(Vec2::new(640.0, 360.0), Vec2::new(0.0, 25.0), 12.0, Color::WHITE);
        assert_eq!(b.position, Vec2::new(640.0, 360.0));
        assert_eq!(b.velocity, Vec2::new(0.0, 25.0));
        assert_eq!(b.radius, 12.0);
        assert_eq!(b.color, Color::WHITE);
    }
}
