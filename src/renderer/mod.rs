//! Rendering sink
//!
//! The simulation never talks to a graphics API. Each frame it submits arcs
//! and discs to a `Renderer`; a windowed backend lives outside this crate.

pub mod color;
pub mod recorder;

pub use color::{Color, random_bright_color};
pub use recorder::{DrawCall, FrameRecorder, LogRenderer};

use glam::Vec2;

use crate::sim::GameState;

/// Receives draw calls once per frame
pub trait Renderer {
    /// Start a frame, clearing to `background`
    fn begin_frame(&mut self, background: Color);

    /// Stroke the solid part of a ring. Angles are radians, unnormalized.
    fn draw_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
        width: u32,
    );

    /// Fill a disc
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Color);

    /// Present the frame
    fn end_frame(&mut self) {}
}

/// Submit the whole scene: every surviving ring outermost first, then the ball
pub fn draw_scene<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState) {
    renderer.begin_frame(Color::BLACK);
    for arc in state.stack.iter() {
        renderer.draw_arc(
            arc.center,
            arc.radius,
            arc.start_angle,
            arc.end_angle,
            arc.color,
            arc.width,
        );
    }
    renderer.draw_disc(state.ball.position, state.ball.radius, state.ball.color);
    renderer.end_frame();
}
