//! Fixed timestep simulation tick
//!
//! One call advances the game by one frame, always in this order:
//!
//! 1. reset when the ball is too far from the center
//! 2. integrate the ball
//! 3. pick the active (innermost) ring
//! 4. escape through its gap, or bounce off it
//! 5. rotate every ring
//! 6. pull the ball back inside the (possibly new) active ring
//! 7. apply gravity

use super::collision::{Contact, keep_inside, resolve_contact};
use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

/// Advance the game state by one tick.
///
/// `config` must have passed [`GameConfig::validate`]; nothing here fails.
pub fn tick(state: &mut GameState, config: &GameConfig) {
    state.time_ticks += 1;

    if state.ball.distance_from(state.center) > config.reset_threshold() {
        state.restart(config);
        state.events.push(GameEvent::LevelReset);
    }

    state.ball.integrate();

    // With no rings left the ball free-falls until the reset above fires
    if let Some(active) = state.stack.active() {
        match resolve_contact(&mut state.ball, active, &mut state.rng) {
            Contact::None => {}
            Contact::Escaped => {
                let radius = active.radius;
                state.stack.pop();
                state.depth += 1;
                log::debug!(
                    "Escaped ring r={:.0}, depth {}, {} left",
                    radius,
                    state.depth,
                    state.stack.len()
                );
                state.events.push(GameEvent::ArcEscaped {
                    radius,
                    remaining: state.stack.len(),
                });
            }
            Contact::Bounced { normal } => {
                log::trace!(
                    "Bounce at tick {} normal ({:.2}, {:.2}) -> v ({:.1}, {:.1})",
                    state.time_ticks,
                    normal.x,
                    normal.y,
                    state.ball.velocity.x,
                    state.ball.velocity.y
                );
                state.events.push(GameEvent::Bounced);
            }
            Contact::Degenerate => {
                log::debug!("Ball at ring center, skipping bounce");
            }
        }
    }

    state.stack.rotate_all();

    if let Some(active) = state.stack.active() {
        keep_inside(&mut state.ball, active);
    }

    state.ball.apply_gravity();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Range;
    use crate::polar_to_cartesian;
    use crate::renderer::Color;
    use crate::sim::{BoundaryArc, BoundaryStack};
    use glam::Vec2;

    fn config() -> GameConfig {
        GameConfig {
            ball: crate::config::BallConfig {
                initial_velocity: Vec2::ZERO,
                elasticity: 1.0,
                gravity: 0.0,
                speed_bounds: Range::new(1.0, 100.0),
            },
            ..Default::default()
        }
    }

    /// Replace the level with explicit rings (radius, solid start°, solid end°)
    fn with_rings(state: &mut GameState, rings: &[(f32, f32, f32)]) {
        let arcs = rings
            .iter()
            .map(|&(r, s, e)| {
                BoundaryArc::new(
                    state.center,
                    r,
                    s.to_radians(),
                    e.to_radians(),
                    0.0,
                    2,
                    Color::WHITE,
                )
                .unwrap()
            })
            .collect();
        state.stack = BoundaryStack::from_arcs(arcs).unwrap();
    }

    #[test]
    fn test_escape_pops_active_ring() {
        let config = config();
        let mut state = GameState::with_seed(&config, 1).unwrap();
        // Solid 0..270 gap-convention; gap covers screen down-right (atan2 45°)
        with_rings(&mut state, &[(300.0, 0.0, 270.0), (100.0, 0.0, 270.0)]);
        state.ball.radius = 5.0;
        state.ball.position = state.center + polar_to_cartesian(90.0, 45f32.to_radians());
        state.ball.velocity = polar_to_cartesian(10.0, 45f32.to_radians());

        tick(&mut state, &config);

        assert_eq!(state.stack.len(), 1);
        assert_eq!(state.stack.active().unwrap().radius, 300.0);
        assert_eq!(state.depth, 1);
        assert_eq!(
            state.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::ArcEscaped {
                radius: 100.0,
                remaining: 1
            }]
        );
    }

    #[test]
    fn test_bounce_keeps_ring_and_contains_ball() {
        let config = config();
        let mut state = GameState::with_seed(&config, 2).unwrap();
        with_rings(&mut state, &[(100.0, 0.0, 270.0)]);
        state.ball.radius = 5.0;
        // Straight up on screen is gap-convention 90°, solid
        state.ball.position = state.center + Vec2::new(0.0, -90.0);
        state.ball.velocity = Vec2::new(0.0, -20.0);

        tick(&mut state, &config);

        assert_eq!(state.stack.len(), 1);
        assert!(state.ball.velocity.y > 0.0);
        let d = state.ball.distance_from(state.center);
        assert!(d + state.ball.radius <= 100.0 + 1e-3);
        assert!(state.events.contains(&GameEvent::Bounced));
    }

    #[test]
    fn test_reset_when_far_from_center() {
        let config = config();
        let mut state = GameState::with_seed(&config, 3).unwrap();
        with_rings(&mut state, &[]);
        state.ball.position = state.center + Vec2::new(config.reset_threshold() + 1.0, 0.0);
        state.depth = 4;

        tick(&mut state, &config);

        assert_eq!(state.events, vec![GameEvent::LevelReset]);
        assert!(!state.stack.is_empty());
        assert_eq!(state.depth, 0);
        // Recentered, then integrated with a zero initial velocity
        assert_eq!(state.ball.position, state.center);
    }

    #[test]
    fn test_free_flight_without_rings() {
        let mut config = config();
        config.ball.gravity = 3.0;
        let mut state = GameState::with_seed(&config, 4).unwrap();
        with_rings(&mut state, &[]);

        tick(&mut state, &config);
        assert_eq!(state.ball.velocity, Vec2::new(0.0, 3.0));
        tick(&mut state, &config);
        assert_eq!(state.ball.position, state.center + Vec2::new(0.0, 3.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_gravity_applied_after_integration() {
        let mut config = config();
        config.ball.gravity = 2.0;
        let mut state = GameState::with_seed(&config, 5).unwrap();
        with_rings(&mut state, &[(300.0, 0.0, 270.0)]);
        state.ball.velocity = Vec2::new(1.0, 0.0);

        tick(&mut state, &config);
        assert_eq!(state.ball.position, state.center + Vec2::new(1.0, 0.0));
        assert_eq!(state.ball.velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_containment_uses_newly_active_ring() {
        let config = config();
        let mut state = GameState::with_seed(&config, 6).unwrap();
        // Outer ring is solid all the way round except a tiny gap
        with_rings(&mut state, &[(120.0, 0.0, 359.0), (100.0, 0.0, 270.0)]);
        state.ball.radius = 10.0;
        // Escapes the inner ring and lands beyond the outer one
        state.ball.position = state.center + polar_to_cartesian(105.0, 45f32.to_radians());
        state.ball.velocity = polar_to_cartesian(20.0, 45f32.to_radians());

        tick(&mut state, &config);

        assert_eq!(state.stack.len(), 1);
        let d = state.ball.distance_from(state.center);
        assert!((d + 10.0 - 120.0).abs() < 1e-3, "distance {d}");
    }

    #[test]
    fn test_repeated_resets_on_narrowest_band() {
        let config = GameConfig {
            arc_count: Range::new(1, 15),
            arc_radius: Range::new(335.0, 350.0),
            ..config()
        };
        config.validate().unwrap();
        let mut state = GameState::with_seed(&config, 1).unwrap();
        for _ in 0..50 {
            state.ball.position = state.center + Vec2::new(config.reset_threshold() + 1.0, 0.0);
            tick(&mut state, &config);
            assert_eq!(state.drain_events().next(), Some(GameEvent::LevelReset));
            let radii: Vec<f32> = state.stack.iter().map(|a| a.radius).collect();
            assert!(radii.windows(2).all(|w| w[0] > w[1]), "radii {radii:?}");
        }
    }

    #[test]
    fn test_rings_rotate_every_tick() {
        let config = config();
        let mut state = GameState::with_seed(&config, 8).unwrap();
        let before: Vec<f32> = state.stack.iter().map(|a| a.start_angle).collect();
        tick(&mut state, &config);
        for (arc, start) in state.stack.iter().zip(before) {
            assert!((arc.start_angle - (start + arc.rotation_speed)).abs() < 1e-5);
        }
    }
}
