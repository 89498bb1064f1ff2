//! The force-field engine.
//!
//! [`Engine`] owns every piece of simulation state: the particle and
//! attractor pools, live ripples, the pointer, and the click-boost
//! countdown. It never schedules itself; whoever owns it calls
//! [`Engine::tick`] once per frame and reads the entity pools back for
//! rendering. That keeps the engine deterministic under a fixed seed and
//! lets tests drive it thousands of ticks without a window.
//!
//! # Tick order
//!
//! 1. Attractors integrate and bounce off the edges with a random kick.
//! 2. Each particle accumulates forces into its velocity, the velocity is
//!    damped, the position integrates, and the boundary policy applies.
//! 3. Ripples grow and fade; any ripple whose alpha reached zero is
//!    dropped this tick.
//! 4. The click-boost countdown decrements.
//!
//! # Example
//!
//! ```ignore
//! let mut engine = Engine::new(FieldConfig::fluid(), 800.0, 600.0)?;
//! engine.handle_pointer(PointerEvent::Moved(Vec2::new(400.0, 300.0)));
//! loop {
//!     engine.tick();
//!     let edges = engine.connections();
//!     // draw engine.particles(), edges, engine.ripples() ...
//! }
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::config::{Boundary, FieldConfig};
use crate::connections::connection_edges;
use crate::entity::{Attractor, ConnectionEdge, Particle, Ripple};
use crate::error::EngineError;
use crate::forces;
use crate::input::{PointerEvent, PointerState};

/// Complete simulation state for one force-field variant.
pub struct Engine {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    attractors: Vec<Attractor>,
    ripples: Vec<Ripple>,
    pointer: PointerState,
    /// Remaining ticks of click-boosted pointer force. 0 means inactive.
    boost_ticks_left: u32,
    ticks: u64,
    rng: SmallRng,
}

impl Engine {
    /// Create an engine over a `width` by `height` pixel surface.
    ///
    /// Spawns the particle and attractor pools uniformly over the surface.
    /// Fails fast if the surface size is not positive and finite; no engine
    /// state exists after an error.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Result<Self, EngineError> {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(config, width, height, seed)
    }

    /// Like [`Engine::new`] but with a fixed RNG seed.
    ///
    /// Two engines built with the same config, size and seed produce
    /// identical state after the same ticks and pointer events.
    pub fn with_seed(
        config: FieldConfig,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EngineError::InvalidBounds { width, height });
        }
        let bounds = Vec2::new(width, height);
        let mut rng = SmallRng::seed_from_u64(seed);

        let particles = (0..config.particle_count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.gen::<f32>() * bounds.x,
                    rng.gen::<f32>() * bounds.y,
                ),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * config.spawn_speed,
                    (rng.gen::<f32>() - 0.5) * config.spawn_speed,
                ),
                radius: rng.gen_range(config.radius_range.clone()),
                rotation: rng.gen_range(0.0..TAU),
            })
            .collect();

        let attractors = (0..config.attractors.count)
            .map(|_| Attractor {
                position: Vec2::new(
                    rng.gen::<f32>() * bounds.x,
                    rng.gen::<f32>() * bounds.y,
                ),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * config.attractors.speed,
                    (rng.gen::<f32>() - 0.5) * config.attractors.speed,
                ),
            })
            .collect();

        Ok(Self {
            config,
            bounds,
            particles,
            attractors,
            ripples: Vec::new(),
            pointer: PointerState::new(),
            boost_ticks_left: 0,
            ticks: 0,
            rng,
        })
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.move_attractors();
        self.move_particles();
        self.update_ripples();
        if self.boost_ticks_left > 0 {
            self.boost_ticks_left -= 1;
        }
        self.ticks += 1;
    }

    /// Feed one pointer event into the engine.
    ///
    /// Events can arrive at any rate between ticks; only the folded state
    /// is read when the next tick runs. A click spawns a ripple and re-arms
    /// the boost countdown to its full duration, so rapid clicking extends
    /// the boost instead of queueing stale expirations.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Clicked(position) = event {
            if self.config.ripples.is_some() {
                self.ripples.push(Ripple::new(position));
            }
            if let Some(boost) = self.config.click_boost {
                self.boost_ticks_left = boost.duration_ticks;
            }
        }
        self.pointer.apply(event);
    }

    /// Change the surface size, e.g. after a window resize.
    ///
    /// Entities keep their positions; anything now out of range is pulled
    /// back in by the boundary policy on the next tick.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EngineError::InvalidBounds { width, height });
        }
        self.bounds = Vec2::new(width, height);
        Ok(())
    }

    /// Connection edges for the current particle positions.
    ///
    /// Recomputed from scratch on every call; edges are never cached.
    pub fn connections(&self) -> Vec<ConnectionEdge> {
        connection_edges(&self.particles, self.config.connection_threshold)
    }

    // ========== Accessors ==========

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    #[inline]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Ticks advanced since creation.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether a click boost is currently amplifying the pointer force.
    #[inline]
    pub fn boost_active(&self) -> bool {
        self.boost_ticks_left > 0 && self.config.click_boost.is_some()
    }

    // ========== Tick stages ==========

    fn boost_multiplier(&self) -> f32 {
        match self.config.click_boost {
            Some(boost) if self.boost_ticks_left > 0 => boost.multiplier,
            _ => 1.0,
        }
    }

    fn move_attractors(&mut self) {
        let jitter = self.config.attractors.bounce_jitter;
        for i in 0..self.attractors.len() {
            let mut a = self.attractors[i];
            a.position += a.velocity;
            if a.position.x < 0.0 || a.position.x > self.bounds.x {
                a.velocity.x = -a.velocity.x + (self.rng.gen::<f32>() - 0.5) * jitter;
                a.position.x = reflect(a.position.x, self.bounds.x);
            }
            if a.position.y < 0.0 || a.position.y > self.bounds.y {
                a.velocity.y = -a.velocity.y + (self.rng.gen::<f32>() - 0.5) * jitter;
                a.position.y = reflect(a.position.y, self.bounds.y);
            }
            self.attractors[i] = a;
        }
    }

    fn move_particles(&mut self) {
        let boost = self.boost_multiplier();
        let jitter = self.config.drift.jitter;

        for i in 0..self.particles.len() {
            let position = self.particles[i].position;

            let mut force =
                forces::attractor_pull(position, &self.attractors, &self.config.attractors);
            force += forces::pointer_force(position, &self.pointer, &self.config.pointer, boost);
            if let Some(repulsion) = &self.config.repulsion {
                force += forces::repulsion(i, &self.particles, repulsion);
            }
            force += forces::drift_wave(position, &self.config.drift);
            if jitter > 0.0 {
                force += Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * jitter,
                    (self.rng.gen::<f32>() - 0.5) * jitter,
                );
            }

            let mut p = self.particles[i];
            p.velocity = (p.velocity + force) * self.config.damping;
            p.position += p.velocity;

            match self.config.boundary {
                Boundary::Wrap => {
                    p.position.x = p.position.x.rem_euclid(self.bounds.x);
                    p.position.y = p.position.y.rem_euclid(self.bounds.y);
                }
                Boundary::Reflect => {
                    if p.position.x < 0.0 || p.position.x > self.bounds.x {
                        p.velocity.x = -p.velocity.x;
                        p.position.x = reflect(p.position.x, self.bounds.x);
                    }
                    if p.position.y < 0.0 || p.position.y > self.bounds.y {
                        p.velocity.y = -p.velocity.y;
                        p.position.y = reflect(p.position.y, self.bounds.y);
                    }
                }
            }
            self.particles[i] = p;
        }
    }

    fn update_ripples(&mut self) {
        let Some(cfg) = self.config.ripples else {
            return;
        };
        for ripple in &mut self.ripples {
            ripple.radius += cfg.growth;
            ripple.alpha -= cfg.decay;
        }
        // A ripple lives through the tick that brings it to alpha 0 and is
        // gone from the pool before anyone observes that tick's result.
        self.ripples.retain(|r| r.alpha > 0.0);
    }
}

/// Mirror an out-of-range coordinate back inside `[0, max]`.
///
/// The clamp backstops overshoots larger than the surface itself, which a
/// single mirror cannot fold back.
fn reflect(value: f32, max: f32) -> f32 {
    let mirrored = if value < 0.0 {
        -value
    } else if value > max {
        2.0 * max - value
    } else {
        value
    };
    mirrored.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClickBoost, DriftConfig, PointerMode, RippleConfig};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    /// A field with every force strength zeroed, for isolating one effect.
    fn inert_config() -> FieldConfig {
        let mut cfg = FieldConfig::fluid();
        cfg.attractors.count = 0;
        cfg.pointer.idle.strength = 0.0;
        cfg.pointer.pressed.strength = 0.0;
        cfg.repulsion = None;
        cfg.drift = DriftConfig::none();
        cfg
    }

    fn assert_all_in_bounds(engine: &Engine, exclusive: bool) {
        for p in engine.particles() {
            assert!(p.position.x >= 0.0 && p.position.y >= 0.0, "{:?}", p.position);
            if exclusive {
                assert!(p.position.x < W && p.position.y < H, "{:?}", p.position);
            } else {
                assert!(p.position.x <= W && p.position.y <= H, "{:?}", p.position);
            }
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
    }

    // ========== Bounds ==========

    #[test]
    fn test_invalid_bounds_fail_fast() {
        assert!(Engine::new(FieldConfig::fluid(), 0.0, 600.0).is_err());
        assert!(Engine::new(FieldConfig::fluid(), 800.0, -1.0).is_err());
        assert!(Engine::new(FieldConfig::fluid(), f32::NAN, 600.0).is_err());
        assert!(Engine::new(FieldConfig::fluid(), f32::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_spawn_is_inside_bounds_with_configured_sizes() {
        let engine = Engine::with_seed(FieldConfig::fluid(), W, H, 7).unwrap();
        assert_eq!(engine.particles().len(), 80);
        assert_eq!(engine.attractors().len(), 3);
        for p in engine.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < W);
            assert!(p.position.y >= 0.0 && p.position.y < H);
            assert!(p.radius >= 4.0 && p.radius < 9.0);
        }
    }

    #[test]
    fn test_wrap_keeps_positions_in_bounds() {
        let mut engine = Engine::with_seed(FieldConfig::fluid(), W, H, 11).unwrap();
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(W / 2.0, H / 2.0)));
        engine.handle_pointer(PointerEvent::Pressed);
        for _ in 0..500 {
            engine.tick();
            assert_all_in_bounds(&engine, true);
        }
    }

    #[test]
    fn test_reflect_keeps_positions_in_bounds() {
        let mut engine = Engine::with_seed(FieldConfig::ripple(), W, H, 13).unwrap();
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(10.0, 10.0)));
        for _ in 0..500 {
            engine.tick();
            assert_all_in_bounds(&engine, false);
        }
    }

    #[test]
    fn test_reflect_recovers_from_huge_overshoot() {
        let mut engine = Engine::with_seed(FieldConfig::ripple(), W, H, 17).unwrap();
        engine.particles[0].velocity = Vec2::new(5000.0, -4000.0);
        engine.tick();
        assert_all_in_bounds(&engine, false);
    }

    #[test]
    fn test_attractors_stay_in_bounds() {
        let mut engine = Engine::with_seed(FieldConfig::fluid(), W, H, 19).unwrap();
        for _ in 0..1000 {
            engine.tick();
            for a in engine.attractors() {
                assert!(a.position.x >= 0.0 && a.position.x <= W);
                assert!(a.position.y >= 0.0 && a.position.y <= H);
            }
        }
    }

    #[test]
    fn test_resize_recovers_out_of_range_particles() {
        let mut engine = Engine::with_seed(FieldConfig::fluid(), W, H, 23).unwrap();
        engine.set_bounds(200.0, 150.0).unwrap();
        engine.tick();
        for p in engine.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 200.0);
            assert!(p.position.y >= 0.0 && p.position.y < 150.0);
        }
        assert!(engine.set_bounds(0.0, 10.0).is_err());
    }

    // ========== Damping ==========

    #[test]
    fn test_damping_decays_speed_without_forces() {
        let mut cfg = inert_config();
        cfg.spawn_speed = 10.0;
        let mut engine = Engine::with_seed(cfg, W, H, 29).unwrap();

        let mut last: Vec<f32> = engine.particles().iter().map(|p| p.velocity.length()).collect();
        for _ in 0..50 {
            engine.tick();
            for (p, prev) in engine.particles().iter().zip(&last) {
                if *prev > 1e-6 {
                    assert!(p.velocity.length() < *prev);
                }
            }
            last = engine.particles().iter().map(|p| p.velocity.length()).collect();
        }

        for _ in 0..150 {
            engine.tick();
        }
        for p in engine.particles() {
            assert!(p.velocity.length() < 1e-4);
        }
    }

    // ========== Pointer ==========

    #[test]
    fn test_pointer_force_persists_after_leave() {
        let mut cfg = inert_config();
        cfg.particle_count = 1;
        cfg.spawn_speed = 0.0;
        cfg.pointer.idle.strength = 2.0;
        let mut engine = Engine::with_seed(cfg, W, H, 31).unwrap();

        let target = engine.particles[0].position + Vec2::new(50.0, 0.0);
        engine.handle_pointer(PointerEvent::Moved(target));
        engine.handle_pointer(PointerEvent::Left);
        engine.tick();

        // Idle repel from the retained position still pushes the particle.
        assert!(engine.particles[0].velocity.x < 0.0);
    }

    // ========== Ripples ==========

    fn ripple_engine(decay: f32) -> Engine {
        let mut cfg = inert_config();
        cfg.particle_count = 0;
        cfg.ripples = Some(RippleConfig {
            growth: 1.0,
            decay,
        });
        Engine::with_seed(cfg, W, H, 37).unwrap()
    }

    #[test]
    fn test_ripple_grows_and_fades_then_disappears() {
        // 1/512 subtracts exactly in f32, so the removal tick is exact.
        let decay = 1.0 / 512.0;
        let mut engine = ripple_engine(decay);
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(100.0, 100.0)));
        assert_eq!(engine.ripples().len(), 1);
        assert_eq!(engine.ripples()[0].radius, 0.0);
        assert_eq!(engine.ripples()[0].alpha, 1.0);

        for tick in 1..=511 {
            engine.tick();
            assert_eq!(engine.ripples().len(), 1, "gone early at tick {}", tick);
            assert_eq!(engine.ripples()[0].radius, tick as f32);
            let expected = 1.0 - tick as f32 * decay;
            assert!((engine.ripples()[0].alpha - expected).abs() < 1e-6);
        }

        // The tick that brings alpha to zero also removes the ripple.
        engine.tick();
        assert!(engine.ripples().is_empty());
    }

    #[test]
    fn test_ripple_preset_lives_about_five_hundred_ticks() {
        let mut engine = ripple_engine(0.002);
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(50.0, 50.0)));

        let mut last_alpha = f32::INFINITY;
        let mut lifetime = 0u32;
        while !engine.ripples().is_empty() {
            let alpha = engine.ripples()[0].alpha;
            assert!(alpha <= last_alpha);
            last_alpha = alpha;
            engine.tick();
            lifetime += 1;
            assert!(lifetime < 600, "ripple never removed");
        }
        assert!((499..=502).contains(&lifetime), "lifetime {}", lifetime);
    }

    #[test]
    fn test_ripples_decay_independently() {
        let mut engine = ripple_engine(0.002);
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(10.0, 10.0)));
        for _ in 0..100 {
            engine.tick();
        }
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(20.0, 20.0)));
        engine.tick();

        assert_eq!(engine.ripples().len(), 2);
        assert!(engine.ripples()[0].alpha < engine.ripples()[1].alpha);
        assert!(engine.ripples()[0].radius > engine.ripples()[1].radius);
    }

    #[test]
    fn test_click_without_ripple_config_spawns_nothing() {
        let mut engine = Engine::with_seed(FieldConfig::fluid(), W, H, 41).unwrap();
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(10.0, 10.0)));
        engine.tick();
        assert!(engine.ripples().is_empty());
    }

    // ========== Click boost ==========

    fn boosted_config() -> FieldConfig {
        let mut cfg = inert_config();
        cfg.particle_count = 1;
        cfg.spawn_speed = 0.0;
        cfg.pointer.idle = crate::config::PointerRule {
            mode: PointerMode::Attract,
            strength: 1.0,
        };
        cfg.click_boost = Some(ClickBoost {
            multiplier: 4.0,
            duration_ticks: 100,
        });
        cfg
    }

    #[test]
    fn test_boost_amplifies_pointer_force() {
        let mut plain = Engine::with_seed(boosted_config(), W, H, 43).unwrap();
        let mut boosted = Engine::with_seed(boosted_config(), W, H, 43).unwrap();

        let target = plain.particles[0].position + Vec2::new(50.0, 0.0);
        plain.handle_pointer(PointerEvent::Moved(target));
        boosted.handle_pointer(PointerEvent::Moved(target));
        boosted.handle_pointer(PointerEvent::Clicked(target));

        plain.tick();
        boosted.tick();
        let ratio = boosted.particles[0].velocity.length() / plain.particles[0].velocity.length();
        assert!((ratio - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let mut engine = Engine::with_seed(boosted_config(), W, H, 47).unwrap();
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(10.0, 10.0)));

        for _ in 0..99 {
            engine.tick();
            assert!(engine.boost_active());
        }
        engine.tick();
        assert!(!engine.boost_active());
    }

    #[test]
    fn test_reclick_resets_boost_countdown() {
        let mut engine = Engine::with_seed(boosted_config(), W, H, 53).unwrap();
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(10.0, 10.0)));
        for _ in 0..50 {
            engine.tick();
        }
        assert!(engine.boost_active());

        // Re-arming replaces the countdown; the original expiry is gone.
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(10.0, 10.0)));
        for _ in 0..99 {
            engine.tick();
            assert!(engine.boost_active());
        }
        engine.tick();
        assert!(!engine.boost_active());
    }

    // ========== Determinism ==========

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = Engine::with_seed(FieldConfig::fluid(), W, H, 59).unwrap();
        let mut b = Engine::with_seed(FieldConfig::fluid(), W, H, 59).unwrap();
        for engine in [&mut a, &mut b] {
            engine.handle_pointer(PointerEvent::Moved(Vec2::new(100.0, 100.0)));
            engine.handle_pointer(PointerEvent::Pressed);
            for _ in 0..200 {
                engine.tick();
            }
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }

    #[test]
    fn test_connections_match_current_positions() {
        let mut cfg = inert_config();
        cfg.particle_count = 2;
        cfg.spawn_speed = 0.0;
        cfg.connection_threshold = 100.0;
        let mut engine = Engine::with_seed(cfg, W, H, 61).unwrap();
        engine.particles[0].position = Vec2::new(10.0, 10.0);
        engine.particles[1].position = Vec2::new(60.0, 10.0);

        let edges = engine.connections();
        assert_eq!(edges.len(), 1);
        assert!((edges[0].alpha - 0.5).abs() < 1e-6);
    }
}
