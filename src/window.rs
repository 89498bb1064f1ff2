//! The windowed event loop.
//!
//! [`App`] owns the window, GPU state, engine and painter, and wires winit
//! events into the engine: cursor and button events become
//! [`PointerEvent`]s, each `RedrawRequested` advances one tick and paints
//! one frame, and Space toggles pause. One tick per frame keeps the field's
//! per-frame constants meaningful under vsync.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::engine::Engine;
use crate::error::SimulationError;
use crate::gpu::{GpuState, Painter};
use crate::input::PointerEvent;
use crate::render::draw_frame;
use crate::simulation::Simulation;
use crate::time::Time;

pub(crate) struct App {
    settings: Simulation,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    engine: Option<Engine>,
    painter: Option<Painter>,
    time: Time,
    last_title_fps: f32,
    init_error: Option<SimulationError>,
}

impl App {
    pub(crate) fn new(settings: Simulation) -> Self {
        Self {
            settings,
            window: None,
            gpu_state: None,
            engine: None,
            painter: None,
            time: Time::new(),
            last_title_fps: -1.0,
            init_error: None,
        }
    }

    /// The setup failure, if window or GPU creation failed. `resumed`
    /// cannot return errors, so the handler stashes them here and
    /// [`Simulation::run`] picks them up after the loop stops.
    pub(crate) fn take_init_error(&mut self) -> Option<SimulationError> {
        self.init_error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let gpu_state = pollster::block_on(GpuState::new(window))?;

        // The engine works in physical pixels, the same space cursor
        // events arrive in.
        let width = gpu_state.config.width as f32;
        let height = gpu_state.config.height as f32;
        let engine = match self.settings.seed {
            Some(seed) => Engine::with_seed(self.settings.field.clone(), width, height, seed),
            None => Engine::new(self.settings.field.clone(), width, height),
        }?;

        self.painter = Some(Painter::new(width, height));
        self.gpu_state = Some(gpu_state);
        self.engine = Some(engine);
        self.time = Time::new();
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gpu_state), Some(engine), Some(painter)) =
            (&mut self.gpu_state, &mut self.engine, &mut self.painter)
        else {
            return;
        };

        self.time.update();
        if !self.time.is_paused() {
            engine.tick();
        }

        painter.clear();
        draw_frame(painter, engine, &self.settings.visuals);

        match gpu_state.render(painter) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                width: gpu_state.config.width,
                height: gpu_state.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        let fps = self.time.fps();
        if (fps - self.last_title_fps).abs() > 0.5 {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} fps", self.settings.title, fps));
            }
            self.last_title_fps = fps;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            eprintln!("Failed to start: {}", err);
            self.init_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if physical_size.width > 0 && physical_size.height > 0 {
                    let width = physical_size.width as f32;
                    let height = physical_size.height as f32;
                    if let Some(engine) = &mut self.engine {
                        if let Err(err) = engine.set_bounds(width, height) {
                            eprintln!("Resize rejected: {}", err);
                        }
                    }
                    if let Some(painter) = &mut self.painter {
                        painter.set_size(width, height);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(PointerEvent::Moved(Vec2::new(
                        position.x as f32,
                        position.y as f32,
                    )));
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(PointerEvent::Left);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    if let Some(engine) = &mut self.engine {
                        match state {
                            ElementState::Pressed => {
                                engine.handle_pointer(PointerEvent::Pressed);
                            }
                            ElementState::Released => {
                                // Release over the surface completes a click
                                // at the last known position.
                                let was_pressed = engine.pointer().pressed;
                                let position = engine.pointer().position;
                                engine.handle_pointer(PointerEvent::Released);
                                if was_pressed {
                                    engine.handle_pointer(PointerEvent::Clicked(position));
                                }
                            }
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.time.toggle_pause();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
