//! Engine configuration.
//!
//! A [`FieldConfig`] fully describes one force-field variant: pool sizes,
//! force strengths and radii, boundary behavior, and the optional ripple and
//! click-boost features. The two built-in variants are available as presets:
//!
//! ```ignore
//! let fluid = FieldConfig::fluid();    // dense, fast, wrapping
//! let ripple = FieldConfig::ripple();  // sparse, slow, reflecting
//! ```
//!
//! Presets are plain structs; tweak fields directly or through
//! [`Simulation::with_field`](crate::Simulation::with_field).

use std::ops::Range;

/// What happens when a particle crosses a surface edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Re-enter from the opposite edge. Position is taken modulo the
    /// surface size, so the field behaves like a torus.
    #[default]
    Wrap,

    /// Bounce: the crossed velocity component flips sign and the position
    /// is mirrored back inside the surface.
    Reflect,
}

/// Roaming attractor behavior.
#[derive(Debug, Clone, Copy)]
pub struct AttractorConfig {
    /// Number of attractors in the pool.
    pub count: usize,
    /// Pull reaches particles closer than this, with a hard cutoff beyond.
    pub influence_radius: f32,
    /// Pull magnitude at zero distance; falls off linearly to 0 at the
    /// influence radius.
    pub strength: f32,
    /// Initial velocity amplitude: each axis starts uniform in
    /// `[-speed/2, speed/2]` pixels per tick.
    pub speed: f32,
    /// Random velocity kick applied on each edge bounce, same per-axis
    /// uniform convention as `speed`.
    pub bounce_jitter: f32,
}

/// Whether the pointer pulls particles in or pushes them away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    Attract,
    Repel,
}

/// Pointer force for one press state.
#[derive(Debug, Clone, Copy)]
pub struct PointerRule {
    pub mode: PointerMode,
    /// Force magnitude at zero distance; falls off linearly to 0 at the
    /// pointer radius.
    pub strength: f32,
}

/// Pointer force field around the cursor.
///
/// The force direction and strength switch with the press state, which is
/// how the fluid variant gets its push-then-grab feel: idle repels, holding
/// the button attracts much harder.
#[derive(Debug, Clone, Copy)]
pub struct PointerConfig {
    /// Particles closer than this feel the pointer.
    pub radius: f32,
    /// Rule while no button is held.
    pub idle: PointerRule,
    /// Rule while the primary button is held.
    pub pressed: PointerRule,
}

/// Short-range pairwise particle repulsion.
///
/// Every particle pushes every other particle within `radius` apart. The
/// pass is O(n squared) and meant for pools of a few dozen particles.
#[derive(Debug, Clone, Copy)]
pub struct RepulsionConfig {
    pub radius: f32,
    /// Push magnitude at zero distance, linear falloff to 0 at `radius`.
    pub strength: f32,
}

/// Ambient motion keeping the field alive when nothing else acts.
///
/// Two parts: a deterministic spatial wave (`sin` on x, `cos` on y, sampled
/// at the particle's own position) and uniform per-axis jitter. Zero both
/// strengths to disable.
#[derive(Debug, Clone, Copy)]
pub struct DriftConfig {
    /// Spatial frequency of the wave term, in radians per pixel.
    pub wave_scale: f32,
    /// Amplitude of the wave term in velocity units.
    pub wave_strength: f32,
    /// Amplitude of the jitter term: each axis adds uniform
    /// `[-jitter/2, jitter/2]` per tick.
    pub jitter: f32,
}

impl DriftConfig {
    /// No ambient motion at all.
    pub fn none() -> Self {
        Self {
            wave_scale: 0.0,
            wave_strength: 0.0,
            jitter: 0.0,
        }
    }
}

/// Growth and decay of click-spawned ripples.
#[derive(Debug, Clone, Copy)]
pub struct RippleConfig {
    /// Radius increase per tick, in pixels.
    pub growth: f32,
    /// Alpha decrease per tick. A new ripple starts at alpha 1, so it lives
    /// for about `1 / decay` ticks.
    pub decay: f32,
}

/// Temporary pointer-force amplification armed by a click.
///
/// While active, pointer force strengths are multiplied by `multiplier`.
/// A single countdown tracks the remaining duration; clicking again resets
/// it to `duration_ticks`, it never stacks.
#[derive(Debug, Clone, Copy)]
pub struct ClickBoost {
    pub multiplier: f32,
    pub duration_ticks: u32,
}

/// Complete description of one force-field variant.
///
/// # Example
///
/// ```ignore
/// let mut config = FieldConfig::fluid();
/// config.particle_count = 120;
/// config.pointer.radius = 200.0;
/// let engine = Engine::new(config, 1280.0, 720.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles in the pool, fixed for the engine's lifetime.
    pub particle_count: usize,
    /// Velocity multiplier applied every tick after forces, before
    /// integration. Values below 1 keep speeds bounded no matter how hard
    /// the field pushes.
    pub damping: f32,
    /// Edge behavior for particles. Attractors always reflect.
    pub boundary: Boundary,
    /// Initial particle velocity amplitude, per-axis uniform in
    /// `[-speed/2, speed/2]`.
    pub spawn_speed: f32,
    /// Particle radius range at spawn.
    pub radius_range: Range<f32>,
    pub attractors: AttractorConfig,
    pub pointer: PointerConfig,
    /// Pairwise repulsion, if the variant uses it.
    pub repulsion: Option<RepulsionConfig>,
    pub drift: DriftConfig,
    /// Click-spawned ripples, if the variant uses them.
    pub ripples: Option<RippleConfig>,
    /// Click-armed pointer boost, if the variant uses it.
    pub click_boost: Option<ClickBoost>,
    /// Particle pairs closer than this get a connection edge. Scales with
    /// particle density; sparse pools need a longer reach to stay webbed.
    pub connection_threshold: f32,
}

impl FieldConfig {
    /// The fluid variant: 80 small fast particles on a wrapping surface.
    ///
    /// Idle pointer repels gently; holding the button attracts five times
    /// as hard, so pressing scoops particles toward the cursor. Ambient
    /// drift keeps the pool churning.
    pub fn fluid() -> Self {
        Self {
            particle_count: 80,
            damping: 0.92,
            boundary: Boundary::Wrap,
            spawn_speed: 4.0,
            radius_range: 4.0..9.0,
            attractors: AttractorConfig {
                count: 3,
                influence_radius: 300.0,
                strength: 1.2,
                speed: 3.0,
                bounce_jitter: 0.5,
            },
            pointer: PointerConfig {
                radius: 140.0,
                idle: PointerRule {
                    mode: PointerMode::Repel,
                    strength: 2.0,
                },
                pressed: PointerRule {
                    mode: PointerMode::Attract,
                    strength: 10.0,
                },
            },
            repulsion: None,
            drift: DriftConfig {
                wave_scale: 0.01,
                wave_strength: 0.15,
                jitter: 0.3,
            },
            ripples: None,
            click_boost: None,
            connection_threshold: 100.0,
        }
    }

    /// The ripple variant: 25 large slow particles on a reflecting surface.
    ///
    /// The pointer attracts weakly in both press states, particles repel
    /// each other at short range, and clicking spawns an expanding ring.
    pub fn ripple() -> Self {
        Self {
            particle_count: 25,
            damping: 0.97,
            boundary: Boundary::Reflect,
            spawn_speed: 0.2,
            radius_range: 7.5..17.5,
            attractors: AttractorConfig {
                count: 5,
                influence_radius: 400.0,
                strength: 0.1,
                speed: 0.1,
                bounce_jitter: 0.02,
            },
            pointer: PointerConfig {
                radius: 300.0,
                idle: PointerRule {
                    mode: PointerMode::Attract,
                    strength: 0.5,
                },
                pressed: PointerRule {
                    mode: PointerMode::Attract,
                    strength: 0.5,
                },
            },
            repulsion: Some(RepulsionConfig {
                radius: 100.0,
                strength: 0.2,
            }),
            drift: DriftConfig::none(),
            ripples: Some(RippleConfig {
                growth: 1.0,
                decay: 0.002,
            }),
            click_boost: None,
            connection_threshold: 250.0,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::fluid()
    }
}
