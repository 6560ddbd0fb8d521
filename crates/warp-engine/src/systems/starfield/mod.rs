//! Warp-speed starfield: a fixed pool of stars streaming away from a
//! pointer-driven origin.
//!
//! [`Starfield`] owns the pool, the RNG used for respawns, and the shared
//! [`FieldState`] every star reads while rendering. Input only ever writes
//! the origin and the speed multiplier; rendering only reads them.

mod config;
mod speed;
mod star;

pub use config::StarfieldConfig;
pub use speed::SpeedRamp;
pub use star::{to_screen, Star, TRAILS};

use glam::Vec2;

use crate::core::vector::Vector;
use crate::renderer::surface::Surface;
use crate::systems::rng::Rng;

/// Drawing-surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Screen position of the origin-centred coordinate system.
    pub fn center(&self) -> Vec2 {
        self.half_extents()
    }

    /// Distance from the centre to a corner.
    pub fn half_diagonal(&self) -> f32 {
        self.half_extents().length()
    }
}

/// State shared by every star during a tick.
#[derive(Debug, Clone)]
pub struct FieldState {
    /// Point stars stream away from; z is always 0.
    pub origin: Vector,
    pub speed: SpeedRamp,
    pub viewport: Viewport,
    pub depth: f32,
    pub max_size: f32,
}

/// The star pool and its shared state.
pub struct Starfield {
    state: FieldState,
    stars: Vec<Star>,
    rng: Rng,
}

impl Starfield {
    /// Allocate `config.max_particles` stars, each reset onto the far plane.
    pub fn new(config: &StarfieldConfig, viewport: Viewport, seed: u64) -> Self {
        let config = config.clone().sanitized();
        let state = FieldState {
            origin: Vector::ZERO,
            speed: config.speed_ramp(),
            viewport,
            depth: config.depth,
            max_size: config.max_size,
        };
        let mut rng = Rng::new(seed);
        let stars = (0..config.max_particles)
            .map(|_| {
                let mut star = Star::new(Vector::ZERO);
                star.reset(&state, &mut rng);
                star
            })
            .collect::<Vec<_>>();

        log::debug!(
            "starfield: {} stars in {}x{}, depth {}",
            stars.len(),
            viewport.width,
            viewport.height,
            state.depth
        );

        Self { state, stars, rng }
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn origin(&self) -> Vector {
        self.state.origin
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.state.speed.value()
    }

    /// Move the origin under a surface-relative pointer position
    /// (top-left corner at `(0, 0)`).
    pub fn aim_at(&mut self, surface_pos: Vec2) {
        let p = surface_pos - self.state.viewport.center();
        self.state.origin = Vector::new(p.x, p.y, 0.0);
    }

    pub fn press(&mut self) {
        self.state.speed.press();
    }

    pub fn release(&mut self) {
        self.state.speed.release();
    }

    /// One simulation step: clear the surface, then draw and advance every
    /// star in pool order.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        self.state.speed.tick();
        surface.clear_rect(Vec2::ZERO, self.state.viewport.size());
        for star in &mut self.stars {
            star.render(surface, &self.state, &mut self.rng);
        }
    }
}
