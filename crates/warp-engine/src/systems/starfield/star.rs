//! A single star: the particle that streams away from the origin.

use glam::Vec2;

use super::FieldState;
use crate::core::vector::Vector;
use crate::renderer::surface::{Color, Surface};
use crate::systems::rng::Rng;

/// Trail segments as `(position ratio, origin ratio, alpha)`.
/// Each ends at `position * ratio - origin * origin_ratio`.
pub const TRAILS: [(f32, f32, f32); 3] = [
    (5.0 / 6.0, 1.0 / 4.0, 0.01),
    (7.0 / 8.0, 1.0 / 10.0, 0.02),
    (9.0 / 10.0, 1.0 / 10.0, 0.03),
];

/// A star with origin-centred position (x right, y down, z toward the far plane).
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vector,
    pub velocity: Vector,
    pub size: f32,
}

impl Star {
    pub fn new(position: Vector) -> Self {
        Star {
            position,
            velocity: Vector::new(1.0, 1.0, -10.0),
            size: 0.0,
        }
    }

    /// Velocity for the current position under the shared field state.
    ///
    /// Direction follows `origin + position`, so stars spread away from the
    /// origin. Speed grows with the in-plane distance to the origin,
    /// normalized by the viewport half-diagonal. Depth never increases.
    /// A viewport with no area gives zero velocity.
    pub fn compute_velocity(&self, field: &FieldState) -> Vector {
        let half_diagonal = field.viewport.half_diagonal();
        if !(half_diagonal > 0.0) {
            return Vector::ZERO;
        }
        let dir = field.origin.sum(self.position).unit_vector();
        let planar = Vector::new(self.position.x, self.position.y, 0.0);
        let m = planar.distance_from(field.origin) / half_diagonal;
        let k = m * field.speed.value();
        Vector::new(dir.x * k, dir.y * k, -k)
    }

    /// Ellipsoidal size falloff with depth, in `[0, max_size]`.
    pub fn compute_size(&self, field: &FieldState) -> f32 {
        let d = self.position.z / field.depth;
        let s = field.max_size * (1.0 - d * d).max(0.0).sqrt();
        s.min(field.max_size)
    }

    /// Respawn on the far plane at a random in-viewport offset.
    pub fn reset(&mut self, field: &FieldState, rng: &mut Rng) {
        let half = field.viewport.half_extents();
        self.position = Vector::new(
            rng.range(-half.x, half.x),
            rng.range(-half.y, half.y),
            field.depth,
        );
    }

    /// Whether the star has left the visible x/y bounds. A non-finite
    /// position counts as outside.
    pub fn out_of_bounds(&self, field: &FieldState) -> bool {
        let half = field.viewport.half_extents();
        !(self.position.x.abs() <= half.x && self.position.y.abs() <= half.y)
    }

    /// Whether the star has no in-plane motion and so can never leave the
    /// viewport on its own.
    pub fn is_stalled(&self) -> bool {
        self.velocity.x == 0.0 && self.velocity.y == 0.0
    }

    /// Draw the star and its trails, then advance one step.
    ///
    /// This is the only per-tick update: a star that leaves the viewport,
    /// or that is stalled, is reset on the same call.
    pub fn render(&mut self, surface: &mut dyn Surface, field: &FieldState, rng: &mut Rng) {
        self.velocity = self.compute_velocity(field);
        self.size = self.compute_size(field);

        let center = field.viewport.center();
        let head = to_screen(field, self.position);
        let origin = field.origin.truncate();

        surface.set_fill_color(Color::WHITE);
        surface.fill_circle(head, self.size);

        surface.set_stroke_color(Color::WHITE);
        for (ratio, origin_ratio, alpha) in TRAILS {
            surface.set_alpha(alpha);
            let tail = center + self.position.truncate() * ratio - origin * origin_ratio;
            surface.stroke_line(head, tail);
        }
        surface.set_alpha(1.0);

        self.position = self.position.sum(self.velocity);
        if self.out_of_bounds(field) || self.is_stalled() {
            self.reset(field, rng);
        }
    }
}

/// Screen position of an origin-centred point.
pub fn to_screen(field: &FieldState, p: Vector) -> Vec2 {
    field.viewport.center() + p.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawList, DrawOp};
    use crate::systems::starfield::{SpeedRamp, Viewport};

    fn field() -> FieldState {
        FieldState {
            origin: Vector::ZERO,
            speed: SpeedRamp::default(),
            viewport: Viewport::new(800.0, 600.0),
            depth: 200.0,
            max_size: 1.0,
        }
    }

    #[test]
    fn velocity_for_known_scenario() {
        let f = field();
        let star = Star::new(Vector::new(100.0, 0.0, 200.0));
        let v = star.compute_velocity(&f);
        let expected = -2.0 * (100.0 / (400.0f32 * 400.0 + 300.0 * 300.0).sqrt());
        assert_eq!(v.z, expected);
        assert!(v.x > 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn velocity_depth_always_decreases() {
        let mut f = field();
        f.origin = Vector::new(-50.0, 120.0, 0.0);
        for p in [
            Vector::new(10.0, -20.0, 200.0),
            Vector::new(-390.0, 290.0, 5.0),
            Vector::new(0.5, 0.5, -30.0),
        ] {
            assert!(Star::new(p).compute_velocity(&f).z < 0.0);
        }
    }

    #[test]
    fn velocity_at_mirror_of_origin_is_finite() {
        let mut f = field();
        f.origin = Vector::new(30.0, -40.0, 0.0);
        // origin + position == 0: no direction to normalize
        let star = Star::new(Vector::new(-30.0, 40.0, 0.0));
        let v = star.compute_velocity(&f);
        assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        assert_eq!((v.x, v.y), (0.0, 0.0));
    }

    #[test]
    fn size_stays_in_range_for_any_depth() {
        let f = field();
        let mut z = -1000.0;
        while z <= 1000.0 {
            let s = Star::new(Vector::new(0.0, 0.0, z)).compute_size(&f);
            assert!((0.0..=1.0).contains(&s), "size {} at z {}", s, z);
            z += 12.5;
        }
        assert_eq!(Star::new(Vector::new(0.0, 0.0, 0.0)).compute_size(&f), 1.0);
        assert_eq!(Star::new(Vector::new(0.0, 0.0, 200.0)).compute_size(&f), 0.0);
    }

    #[test]
    fn reset_lands_on_far_plane_within_viewport() {
        let f = field();
        let mut rng = Rng::new(1234);
        let mut star = Star::new(Vector::ZERO);
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        for _ in 0..1000 {
            star.reset(&f, &mut rng);
            let p = star.position;
            assert!((-400.0..=400.0).contains(&p.x), "x {}", p.x);
            assert!((-300.0..=300.0).contains(&p.y), "y {}", p.y);
            assert_eq!(p.z, 200.0);
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            sum_x += p.x;
            sum_y += p.y;
        }
        // spread covers most of the viewport and centres near zero
        assert!(max_x - min_x > 700.0, "x spread {}", max_x - min_x);
        assert!(max_y - min_y > 500.0, "y spread {}", max_y - min_y);
        assert!((sum_x / 1000.0).abs() < 40.0);
        assert!((sum_y / 1000.0).abs() < 30.0);
    }

    #[test]
    fn crossing_the_edge_resets_on_same_render() {
        let f = field();
        let mut rng = Rng::new(5);
        let mut star = Star::new(Vector::new(399.0, 10.0, 50.0));
        let mut list = DrawList::new();
        star.render(&mut list, &f, &mut rng);
        assert_eq!(star.position.z, 200.0, "star should be back on the far plane");
        assert!(!star.out_of_bounds(&f));
    }

    #[test]
    fn inside_star_advances_by_velocity() {
        let f = field();
        let mut rng = Rng::new(5);
        let start = Vector::new(100.0, 50.0, 200.0);
        let mut star = Star::new(start);
        let v = star.compute_velocity(&f);
        star.render(&mut DrawList::new(), &f, &mut rng);
        assert_eq!(star.position, start.sum(v));
        assert_eq!(star.velocity, v);
    }

    #[test]
    fn render_draws_head_and_three_trails() {
        let mut f = field();
        f.origin = Vector::new(40.0, -20.0, 0.0);
        let mut rng = Rng::new(5);
        let mut star = Star::new(Vector::new(120.0, 60.0, 100.0));
        let mut list = DrawList::new();
        star.render(&mut list, &f, &mut rng);

        let circles: Vec<_> = list.iter_op(DrawOp::Circle).collect();
        assert_eq!(circles.len(), 1);
        assert_eq!((circles[0].x0, circles[0].y0), (520.0, 360.0));
        assert_eq!(circles[0].alpha, 1.0);

        let lines: Vec<_> = list.iter_op(DrawOp::Line).collect();
        assert_eq!(lines.len(), 3);
        let alphas: Vec<f32> = lines.iter().map(|l| l.alpha).collect();
        assert_eq!(alphas, vec![0.01, 0.02, 0.03]);
        for l in &lines {
            assert_eq!((l.x0, l.y0), (520.0, 360.0));
            assert_eq!((l.r, l.g, l.b), (1.0, 1.0, 1.0));
        }
        // 400 + 120*5/6 - 40/4
        assert!((lines[0].x1 - 490.0).abs() < 1e-3);
        // 300 + 60*7/8 + 20/10
        assert!((lines[1].y1 - 354.5).abs() < 1e-3);
        // 400 + 120*9/10 - 40/10
        assert!((lines[2].x1 - 504.0).abs() < 1e-3);
    }

    #[test]
    fn star_under_the_origin_is_recycled() {
        let mut f = field();
        f.origin = Vector::new(30.0, -40.0, 0.0);
        let mut rng = Rng::new(5);
        let mut star = Star::new(Vector::new(30.0, -40.0, 100.0));
        assert_eq!(star.compute_velocity(&f), Vector::ZERO);
        star.render(&mut DrawList::new(), &f, &mut rng);
        assert_eq!(star.position.z, 200.0);
    }

    #[test]
    fn star_at_mirror_of_origin_is_recycled() {
        let mut f = field();
        f.origin = Vector::new(30.0, -40.0, 0.0);
        let mut rng = Rng::new(5);
        let mut star = Star::new(Vector::new(-30.0, 40.0, 100.0));
        star.render(&mut DrawList::new(), &f, &mut rng);
        assert_eq!(star.position.z, 200.0);
    }

    #[test]
    fn zero_area_viewport_keeps_positions_finite() {
        let mut f = field();
        f.viewport = Viewport::new(0.0, 0.0);
        let mut rng = Rng::new(5);
        let mut star = Star::new(Vector::ZERO);
        star.reset(&f, &mut rng);
        for _ in 0..3 {
            star.render(&mut DrawList::new(), &f, &mut rng);
            let p = star.position;
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite(), "{:?}", p);
            assert!(!star.out_of_bounds(&f));
        }
    }

    #[test]
    fn nan_position_counts_as_out_of_bounds() {
        let f = field();
        let star = Star::new(Vector::new(f32::NAN, 0.0, 100.0));
        assert!(star.out_of_bounds(&f));
    }

    #[test]
    fn to_screen_offsets_by_viewport_centre() {
        let f = field();
        assert_eq!(to_screen(&f, Vector::new(-400.0, -300.0, 7.0)), Vec2::ZERO);
    }
}
