//! Pointer input as the engine sees it.
//!
//! The engine does not talk to any windowing layer. Whatever drives it
//! (the built-in winit runner, or a test) translates raw input into
//! [`PointerEvent`]s and feeds them to
//! [`Engine::handle_pointer`](crate::Engine::handle_pointer); the engine
//! folds them into a single [`PointerState`] read once per tick.

use glam::Vec2;

/// A pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved to a new position.
    Moved(Vec2),
    /// The primary button went down.
    Pressed,
    /// The primary button went up.
    Released,
    /// The pointer left the surface. Forces a release; the last known
    /// position is retained and keeps exerting force.
    Left,
    /// A full click at the given position. Spawns a ripple and arms the
    /// click boost (where configured); does not touch hover or press state.
    Clicked(Vec2),
}

/// Current pointer state, owned by the engine.
///
/// Starts at the surface origin with no button held, matching a pointer
/// that has never entered the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last known position in surface pixels.
    pub position: Vec2,
    /// Whether the primary button is currently held.
    pub pressed: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            pressed: false,
        }
    }

    /// Fold one event into the state.
    ///
    /// [`PointerEvent::Clicked`] is deliberately a no-op here: clicks drive
    /// ripple spawning and the boost timer, both owned by the engine, and
    /// are orthogonal to hover and press tracking.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => self.position = pos,
            PointerEvent::Pressed => self.pressed = true,
            PointerEvent::Released | PointerEvent::Left => self.pressed = false,
            PointerEvent::Clicked(_) => {}
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
