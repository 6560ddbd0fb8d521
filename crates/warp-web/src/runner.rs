use warp_engine::{
    EngineContext, Game, GameConfig, InputEvent, InputQueue, SoundEvent, Surface, Viewport,
};

/// Generic game runner that wires up the engine loop.
///
/// The bootstrap keeps one runner behind an `Rc<RefCell<..>>` shared by the
/// timer callback and the DOM listeners; every callback runs to completion,
/// so input pushes and ticks never interleave.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    config: GameConfig,
    initialized: bool,
    ticks: u64,
}

impl<G: Game> GameRunner<G> {
    /// Build the runner for a surface of `viewport` size.
    /// The viewport replaces the game's configured world size.
    pub fn new(game: G, viewport: Viewport, seed: u64) -> Self {
        let mut config = game.config();
        config.world_width = viewport.width;
        config.world_height = viewport.height;
        let ctx = EngineContext::new(&config, seed);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            config,
            initialized: false,
            ticks: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one tick: apply queued input, then clear and redraw the surface.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        if !self.initialized {
            return;
        }

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.game.render(&mut self.ctx, surface);
        self.ticks += 1;
    }

    /// Audio requests emitted since the last call.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        self.ctx.drain_sounds()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
