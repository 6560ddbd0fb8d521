use crate::api::types::SoundEvent;
use crate::input::queue::InputQueue;
use crate::renderer::surface::Surface;
use crate::systems::starfield::{Starfield, StarfieldConfig, Viewport};

/// Period of the simulation timer in milliseconds (~100 ticks per second).
pub const TICK_INTERVAL_MS: u32 = 10;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Timer period in milliseconds. One tick is one simulation step.
    pub tick_interval_ms: u32,
    /// Surface width in pixels. Hosts overwrite it with the viewport size.
    pub world_width: f32,
    /// Surface height in pixels. Hosts overwrite it with the viewport size.
    pub world_height: f32,
    /// Ambient audio asset started at bootstrap, if any.
    pub audio_src: Option<String>,
    pub starfield: StarfieldConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            world_width: 800.0,
            world_height: 600.0,
            audio_src: None,
            starfield: StarfieldConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.world_width, self.world_height)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state. Runs once, before the first tick.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Apply the input gathered since the previous tick.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Draw the frame onto a freshly cleared surface.
    ///
    /// Drawing and simulation share this pass: rendering the starfield also
    /// advances it by one step.
    fn render(&mut self, ctx: &mut EngineContext, surface: &mut dyn Surface) {
        ctx.starfield.render(surface);
    }
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub starfield: Starfield,
    pub sounds: Vec<SoundEvent>,
}

impl EngineContext {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            starfield: Starfield::new(&config.starfield, config.viewport(), seed),
            sounds: Vec::new(),
        }
    }

    /// Queue an audio request for the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Take the audio requests queued so far.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }
}
