//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, no wall-clock time
//! - Randomness only through the state's RNG (seedable for tests)
//! - No rendering or platform dependencies

pub mod arc;
pub mod ball;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use arc::BoundaryArc;
pub use ball::Ball;
pub use collision::{Contact, keep_inside, reflect_velocity, resolve_contact};
pub use level::{BoundaryStack, generate_level};
pub use state::{GameEvent, GameState};
pub use tick::tick;
