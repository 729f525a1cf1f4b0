//! Rotating boundary rings
//!
//! A ring is a circle around a fixed center whose solid part runs from
//! `start_angle` to `end_angle`; the rest of the circle is the open gap.
//! Angles are radians and accumulate without wrapping as the ring spins, so
//! every angular comparison normalizes first.

use glam::Vec2;

use crate::config::ConfigError;
use crate::normalize_degrees;
use crate::renderer::Color;

/// A spinning ring with one open gap
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryArc {
    /// Shared ring center (fixed for the ring's lifetime)
    pub center: Vec2,
    pub radius: f32,
    /// Start of the solid arc (radians, unbounded)
    pub start_angle: f32,
    /// End of the solid arc (radians, unbounded)
    pub end_angle: f32,
    /// Radians per tick, signed
    pub rotation_speed: f32,
    /// Stroke width in pixels (rendering only)
    pub width: u32,
    pub color: Color,
}

impl BoundaryArc {
    pub fn new(
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        rotation_speed: f32,
        width: u32,
        color: Color,
    ) -> Result<Self, ConfigError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ConfigError::NonPositive {
                field: "arc.radius",
                value: radius,
            });
        }
        if width == 0 {
            return Err(ConfigError::NonPositive {
                field: "arc.width",
                value: 0.0,
            });
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
            rotation_speed,
            width,
            color,
        })
    }

    /// Advance both angles by one tick of rotation
    #[inline]
    pub fn rotate(&mut self) {
        self.rotate_by(self.rotation_speed);
    }

    /// Advance both angles by `delta` radians
    #[inline]
    pub fn rotate_by(&mut self, delta: f32) {
        self.start_angle += delta;
        self.end_angle += delta;
    }

    /// Whether a disc of `probe_radius` at `point` pokes through the ring
    pub fn is_outside(&self, point: Vec2, probe_radius: f32) -> bool {
        crate::distance(point, self.center) + probe_radius > self.radius
    }

    /// Angle of `point` in the ring's gap convention (degrees, [0, 360)).
    ///
    /// Arcs are drawn with angles running the opposite way to atan2 in
    /// screen space (y down), so the atan2 angle is mirrored as `360 - a`.
    /// Dropping the mirror flips every gap across the x axis.
    pub fn gap_angle_of(&self, point: Vec2) -> f32 {
        let a = normalize_degrees(crate::angle_from(point, self.center).to_degrees());
        normalize_degrees(360.0 - a)
    }

    /// Solid arc bounds in degrees, each normalized to [0, 360)
    pub fn span_degrees(&self) -> (f32, f32) {
        (
            normalize_degrees(self.start_angle.to_degrees()),
            normalize_degrees(self.end_angle.to_degrees()),
        )
    }

    /// Whether a gap-convention angle (degrees) falls on the solid arc
    pub fn solid_contains_degrees(&self, angle: f32) -> bool {
        let (start, end) = self.span_degrees();
        if start < end {
            start <= angle && angle <= end
        } else {
            // Solid arc wraps through 0/360
            angle >= start || angle <= end
        }
    }

    /// Whether `point` lies in the ring's open gap (by angle only)
    pub fn is_in_gap(&self, point: Vec2) -> bool {
        !self.solid_contains_degrees(self.gap_angle_of(point))
    }

    /// Angular size of the gap in degrees
    pub fn gap_degrees(&self) -> f32 {
        let (start, end) = self.span_degrees();
        if start < end {
            360.0 - (end - start)
        } else {
            start - end
        }
    }
}
