//! The force field: every per-particle force contribution.
//!
//! All forces share one shape: a unit direction times a linear falloff
//! (full strength at zero distance, zero at the cutoff radius) times a
//! configured strength. There is no smoothing at the cutoff; a particle
//! sitting just inside the radius feels a vanishingly small pull and a
//! particle just outside feels nothing, which in practice is invisible.
//!
//! These functions are pure: they read entity state and return a velocity
//! delta for one particle. The engine sums them and owns the random jitter
//! part of the ambient drift, so everything here is deterministic and easy
//! to test in isolation.

use glam::Vec2;

use crate::config::{AttractorConfig, DriftConfig, PointerConfig, PointerMode, RepulsionConfig};
use crate::entity::{Attractor, Particle};
use crate::input::PointerState;
use crate::math::{direction_and_distance, linear_falloff};

/// Sum of pulls from every attractor within its influence radius.
pub fn attractor_pull(position: Vec2, attractors: &[Attractor], cfg: &AttractorConfig) -> Vec2 {
    let mut force = Vec2::ZERO;
    for attractor in attractors {
        let (dir, dist) = direction_and_distance(position, attractor.position);
        if dist < cfg.influence_radius {
            force += dir * (linear_falloff(dist, cfg.influence_radius) * cfg.strength);
        }
    }
    force
}

/// Force from the pointer, if the particle is within its radius.
///
/// The direction and strength come from the rule for the current press
/// state, so a variant can repel when idle and attract when pressed.
/// `boost` multiplies the strength; pass 1.0 when no click boost is active.
pub fn pointer_force(
    position: Vec2,
    pointer: &PointerState,
    cfg: &PointerConfig,
    boost: f32,
) -> Vec2 {
    let (dir, dist) = direction_and_distance(position, pointer.position);
    if dist >= cfg.radius {
        return Vec2::ZERO;
    }
    let rule = if pointer.pressed {
        cfg.pressed
    } else {
        cfg.idle
    };
    let magnitude = linear_falloff(dist, cfg.radius) * rule.strength * boost;
    match rule.mode {
        PointerMode::Attract => dir * magnitude,
        PointerMode::Repel => -dir * magnitude,
    }
}

/// Push away from every other particle within the repulsion radius.
///
/// O(n) per particle, O(n squared) for the whole pool. Fine for a few
/// dozen particles; a spatial index would be needed beyond a few hundred.
pub fn repulsion(index: usize, particles: &[Particle], cfg: &RepulsionConfig) -> Vec2 {
    let position = particles[index].position;
    let mut force = Vec2::ZERO;
    for (other_index, other) in particles.iter().enumerate() {
        if other_index == index {
            continue;
        }
        let (dir, dist) = direction_and_distance(other.position, position);
        if dist < cfg.radius {
            force += dir * (linear_falloff(dist, cfg.radius) * cfg.strength);
        }
    }
    force
}

/// Deterministic part of the ambient drift: a spatial sine/cosine wave
/// sampled at the particle's own position.
///
/// The random jitter part lives in the engine, next to its RNG.
pub fn drift_wave(position: Vec2, cfg: &DriftConfig) -> Vec2 {
    Vec2::new(
        (position.x * cfg.wave_scale).sin() * cfg.wave_strength,
        (position.y * cfg.wave_scale).cos() * cfg.wave_strength,
    )
}
