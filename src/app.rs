//! The fixed-rate game loop
//!
//! poll input -> tick -> forward events -> render -> wait for next tick

use crate::audio::{AudioSink, SoundEffect};
use crate::config::{ConfigError, GameConfig};
use crate::platform::{Clock, InputSource};
use crate::renderer::{Renderer, draw_scene};
use crate::sim::{GameEvent, GameState, tick};

/// Counters collected while the loop runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub ticks: u64,
    pub escapes: u64,
    pub bounces: u64,
    pub resets: u64,
    /// Deepest ring count escaped within one level
    pub max_depth: u32,
}

/// Game instance holding state and collaborators
pub struct Game<R, A, I, C> {
    config: GameConfig,
    state: GameState,
    renderer: R,
    audio: A,
    input: I,
    clock: C,
    stats: GameStats,
}

impl<R, A, I, C> Game<R, A, I, C>
where
    R: Renderer,
    A: AudioSink,
    I: InputSource,
    C: Clock,
{
    /// Validate `config` and set up a new level
    pub fn new(
        config: GameConfig,
        renderer: R,
        audio: A,
        input: I,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let state = GameState::new(&config)?;
        Ok(Self {
            config,
            state,
            renderer,
            audio,
            input,
            clock,
            stats: GameStats::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one frame. Returns `false` once quit was requested.
    pub fn step(&mut self) -> bool {
        if self.input.quit_requested() {
            return false;
        }

        tick(&mut self.state, &self.config);
        self.stats.ticks += 1;

        for event in self.state.drain_events() {
            match event {
                GameEvent::ArcEscaped { .. } => {
                    self.stats.escapes += 1;
                    self.audio.play(SoundEffect::Escape);
                }
                GameEvent::Bounced => self.stats.bounces += 1,
                GameEvent::LevelReset => self.stats.resets += 1,
            }
        }
        self.stats.max_depth = self.stats.max_depth.max(self.state.depth);

        draw_scene(&mut self.renderer, &self.state);
        self.clock.wait_for_next_tick();
        true
    }

    /// Run until the input source asks to quit
    pub fn run(&mut self) -> GameStats {
        log::info!(
            "Running at {} ticks/s, {}x{}",
            self.config.tick_rate,
            self.config.width,
            self.config.height
        );
        while self.step() {}
        let s = self.stats;
        log::info!(
            "Stopped after {} ticks: {} escapes, {} bounces, {} resets, max depth {}",
            s.ticks,
            s.escapes,
            s.bounces,
            s.resets,
            s.max_depth
        );
        s
    }
}
