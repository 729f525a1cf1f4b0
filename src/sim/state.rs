//! Game state
//!
//! Everything the tick mutates lives here and is owned by one loop.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::level::{BoundaryStack, generate_level};
use crate::config::{ConfigError, GameConfig};
use crate::consts::BALL_BRIGHTNESS;
use crate::renderer::random_bright_color;

/// Something that happened during a tick, drained by the game loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball left through the gap of the ring with this radius
    ArcEscaped { radius: f32, remaining: usize },
    /// Ball bounced off the solid arc
    Bounced,
    /// Ball flew past the reset distance; level regenerated
    LevelReset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    /// Shared center of the viewport and every ring
    pub center: Vec2,
    pub ball: Ball,
    pub stack: BoundaryStack,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rings escaped since the last reset
    pub depth: u32,
    /// Events raised since the loop last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state from a validated config.
    ///
    /// Uses `config.seed` when set, otherwise a seed from process entropy.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, config.seed.unwrap_or_else(rand::random))
    }

    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = config.center();

        let radius = roll_ball_radius(config, &mut rng);
        let color = random_bright_color(&mut rng, BALL_BRIGHTNESS);
        let ball = Ball::new(center, radius, &config.ball, color)?;
        let stack = generate_level(config, center, &mut rng);

        log::info!("New game, seed {seed}");
        Ok(Self {
            seed,
            rng,
            center,
            ball,
            stack,
            time_ticks: 0,
            depth: 0,
            events: Vec::new(),
        })
    }

    /// Recenter the ball with fresh size and color and regenerate the rings.
    ///
    /// `config` must be the validated config the state was created from.
    pub fn restart(&mut self, config: &GameConfig) {
        let radius = roll_ball_radius(config, &mut self.rng);
        let color = random_bright_color(&mut self.rng, BALL_BRIGHTNESS);
        self.ball.reset(self.center, config.ball.initial_velocity, radius, color);
        self.stack = generate_level(config, self.center, &mut self.rng);
        log::info!("Level reset after reaching depth {}", self.depth);
        self.depth = 0;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

fn roll_ball_radius<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    rng.random_range(config.ball_radius.min..=config.ball_radius.max)
}
