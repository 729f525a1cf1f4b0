//! Headless renderers

use glam::Vec2;

use super::{Color, Renderer};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
        width: u32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Keeps the draw calls of the last frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub calls: Vec<DrawCall>,
    pub frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Arc { .. }))
            .count()
    }
}

impl Renderer for FrameRecorder {
    fn begin_frame(&mut self, background: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(background));
    }

    fn draw_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
        width: u32,
    ) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            color,
            width,
        });
    }

    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Disc {
            center,
            radius,
            color,
        });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Logs a one-line frame summary every `every` frames
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frame: u64,
    arcs: usize,
    ball: Option<(Vec2, f32)>,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frame: 0,
            arcs: 0,
            ball: None,
        }
    }
}

impl Renderer for LogRenderer {
    fn begin_frame(&mut self, _background: Color) {
        self.arcs = 0;
        self.ball = None;
    }

    fn draw_arc(&mut self, _: Vec2, _: f32, _: f32, _: f32, _: Color, _: u32) {
        self.arcs += 1;
    }

    fn draw_disc(&mut self, center: Vec2, radius: f32, _color: Color) {
        self.ball = Some((center, radius));
    }

    fn end_frame(&mut self) {
        if self.frame % self.every == 0 {
            if let Some((pos, radius)) = self.ball {
                log::info!(
                    "frame {}: {} rings, ball at ({:.1}, {:.1}) r={:.1}",
                    self.frame,
                    self.arcs,
                    pos.x,
                    pos.y,
                    radius
                );
            }
        }
        self.frame += 1;
    }
}
