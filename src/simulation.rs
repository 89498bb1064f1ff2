//! Simulation builder and runner.
//!
//! [`Simulation`] is the crate's front door: pick a preset, adjust the field
//! and visuals, then either [`run`](Simulation::run) a window or
//! [`build`](Simulation::build) a headless [`Engine`] for tests and tools.
//!
//! ```ignore
//! Simulation::fluid()
//!     .with_title("fluid field")
//!     .with_field(|f| f.particle_count = 120)
//!     .run()?;
//! ```

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::FieldConfig;
use crate::engine::Engine;
use crate::error::{EngineError, SimulationError};
use crate::visuals::VisualConfig;
use crate::window::App;

/// A force-field simulation builder.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Simulation {
    pub(crate) field: FieldConfig,
    pub(crate) visuals: VisualConfig,
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) seed: Option<u64>,
}

impl Simulation {
    /// Start from an explicit field configuration, with the fluid visuals.
    pub fn new(field: FieldConfig) -> Self {
        Self {
            field,
            ..Self::fluid()
        }
    }

    /// The fluid preset: dense wrapping field with push-then-grab pointer.
    pub fn fluid() -> Self {
        Self {
            field: FieldConfig::fluid(),
            visuals: VisualConfig::fluid(),
            title: "Force Field".to_string(),
            width: 1280,
            height: 720,
            seed: None,
        }
    }

    /// The ripple preset: sparse reflecting field with click-spawned rings.
    pub fn ripple() -> Self {
        Self {
            field: FieldConfig::ripple(),
            visuals: VisualConfig::ripple(),
            ..Self::fluid()
        }
    }

    /// Adjust the force field in place.
    pub fn with_field(mut self, configure: impl FnOnce(&mut FieldConfig)) -> Self {
        configure(&mut self.field);
        self
    }

    /// Adjust the visual style in place.
    pub fn with_visuals(mut self, configure: impl FnOnce(&mut VisualConfig)) -> Self {
        configure(&mut self.visuals);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.field.particle_count = count;
        self
    }

    /// Fix the random seed. Two simulations with the same seed, size and
    /// input history produce identical fields.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine without opening a window, over the given surface
    /// bounds in pixels.
    pub fn build(&self, width: f32, height: f32) -> Result<Engine, EngineError> {
        match self.seed {
            Some(seed) => Engine::with_seed(self.field.clone(), width, height, seed),
            None => Engine::new(self.field.clone(), width, height),
        }
    }

    /// Run the simulation in a window. This blocks until the window is
    /// closed. Space pauses; the pointer and clicks drive the field.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        // Window or GPU setup failures surface here; the handler can only
        // stash them and stop the loop.
        match app.take_init_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::fluid()
    }
}
