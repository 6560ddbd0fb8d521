use warp_engine::glam::Vec2;
use warp_engine::*;

/// Ambient track, relative to the page.
const AUDIO_SRC: &str = "assets/void.mp3";

/// Warp-speed starfield: stars stream away from the cursor and speed up
/// while the pointer is held down.
pub struct WarpSpeed {
    starfield: StarfieldConfig,
}

impl WarpSpeed {
    pub fn new(starfield: StarfieldConfig) -> Self {
        Self { starfield }
    }
}

impl Default for WarpSpeed {
    fn default() -> Self {
        Self::new(StarfieldConfig::default())
    }
}

impl Game for WarpSpeed {
    fn config(&self) -> GameConfig {
        GameConfig {
            tick_interval_ms: TICK_INTERVAL_MS,
            audio_src: Some(AUDIO_SRC.to_string()),
            starfield: self.starfield.clone(),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.emit_sound(SoundEvent::AmbientPlay);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => ctx.starfield.aim_at(Vec2::new(x, y)),
                InputEvent::PointerDown { .. } => {
                    ctx.starfield.press();
                    if self.starfield.pause_audio_on_release {
                        ctx.emit_sound(SoundEvent::AmbientPlay);
                    }
                }
                InputEvent::PointerUp { .. } => {
                    ctx.starfield.release();
                    if self.starfield.pause_audio_on_release {
                        ctx.emit_sound(SoundEvent::AmbientPause);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(game: &mut WarpSpeed) -> EngineContext {
        let mut ctx = EngineContext::new(&game.config(), 11);
        game.init(&mut ctx);
        ctx
    }

    #[test]
    fn init_starts_the_soundtrack() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        assert_eq!(ctx.drain_sounds(), vec![SoundEvent::AmbientPlay]);
        assert_eq!(game.config().audio_src.as_deref(), Some(AUDIO_SRC));
    }

    #[test]
    fn pointer_move_sets_origin() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 100.0, y: 50.0 });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.starfield.origin(), Vector::new(-300.0, -250.0, 0.0));
    }

    #[test]
    fn press_does_not_move_origin() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 10.0, y: 10.0 });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.starfield.origin(), Vector::ZERO);
        assert_eq!(ctx.starfield.speed_multiplier(), 4.0);
    }

    #[test]
    fn hold_and_release_round_trip() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        let before = ctx.starfield.speed_multiplier();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        input.push(InputEvent::PointerUp { x: 0.0, y: 0.0 });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.starfield.speed_multiplier(), before);
    }

    #[test]
    fn pause_path_is_off_by_default() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        ctx.drain_sounds();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        input.push(InputEvent::PointerUp { x: 0.0, y: 0.0 });
        game.update(&mut ctx, &input);
        assert!(ctx.drain_sounds().is_empty());
    }

    #[test]
    fn pause_path_when_enabled() {
        let mut game = WarpSpeed::new(StarfieldConfig {
            pause_audio_on_release: true,
            ..StarfieldConfig::default()
        });
        let mut ctx = setup(&mut game);
        ctx.drain_sounds();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        input.push(InputEvent::PointerUp { x: 0.0, y: 0.0 });
        game.update(&mut ctx, &input);
        assert_eq!(
            ctx.drain_sounds(),
            vec![SoundEvent::AmbientPlay, SoundEvent::AmbientPause]
        );
    }

    #[test]
    fn render_keeps_the_pool_full() {
        let mut game = WarpSpeed::default();
        let mut ctx = setup(&mut game);
        let mut list = DrawList::new();
        for _ in 0..500 {
            list.clear();
            game.render(&mut ctx, &mut list);
        }
        assert_eq!(ctx.starfield.len(), 100);
    }
}
