//! RGB colors for rings and ball

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness (ITU-R 601 luma, 0-255)
    pub fn brightness(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }
}

/// Random color with perceived brightness strictly above `threshold`.
///
/// `threshold` must be below 255 or this never returns.
pub fn random_bright_color<R: Rng>(rng: &mut R, threshold: f32) -> Color {
    loop {
        let color = Color::rgb(rng.random(), rng.random(), rng.random());
        if color.brightness() > threshold {
            return color;
        }
    }
}
