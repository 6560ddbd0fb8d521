// Math types used across the public API.
pub use glam;

pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, TICK_INTERVAL_MS};
pub use api::types::SoundEvent;
pub use crate::core::vector::Vector;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::surface::{Color, Surface};
pub use renderer::draw_list::{DrawCommand, DrawList, DrawOp};
pub use systems::rng::Rng;
pub use systems::starfield::{
    FieldState, SpeedRamp, Star, Starfield, StarfieldConfig, Viewport,
};
