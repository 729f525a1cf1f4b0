//! Ball-versus-ring collision response
//!
//! Only one ring is ever tested per tick. A ball poking through the ring
//! either slips out through the gap (the ring is consumed) or bounces off the
//! solid part along the center-to-ball normal.

use glam::Vec2;
use rand::Rng;

use super::arc::BoundaryArc;
use super::ball::Ball;
use crate::outward_normal;

/// Outcome of testing the ball against the active ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Ball is fully inside the ring
    None,
    /// Ball crossed the ring inside its gap; the ring should be removed
    Escaped,
    /// Ball hit the solid arc and was reflected along `normal`
    Bounced { normal: Vec2 },
    /// Ball hit the solid arc at the exact center; no normal exists
    Degenerate,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Test the ball against `arc` and bounce it if it hit the solid part.
///
/// Escapes are only reported; popping the ring is up to the caller.
pub fn resolve_contact<R: Rng>(ball: &mut Ball, arc: &BoundaryArc, rng: &mut R) -> Contact {
    if !arc.is_outside(ball.position, ball.radius) {
        return Contact::None;
    }
    if arc.is_in_gap(ball.position) {
        return Contact::Escaped;
    }
    match outward_normal(arc.center, ball.position) {
        Some(normal) => {
            ball.reflect(normal, rng);
            Contact::Bounced { normal }
        }
        None => Contact::Degenerate,
    }
}

/// Pull the ball back inside `arc` if it still overlaps the boundary.
///
/// Returns the distance moved (0 when nothing was done).
pub fn keep_inside(ball: &mut Ball, arc: &BoundaryArc) -> f32 {
    let offset = ball.position - arc.center;
    let distance = offset.length();
    let excess = distance + ball.radius - arc.radius;
    if excess <= 0.0 {
        return 0.0;
    }
    let Some(direction) = offset.try_normalize() else {
        log::debug!("ball at ring center, skipping containment");
        return 0.0;
    };
    ball.position -= direction * excess;
    excess
}
