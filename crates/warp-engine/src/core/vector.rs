//! 3D value vector used for star positions, velocities and the origin.

use glam::{Vec2, Vec3};

/// Immutable 3D vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f32 {
        Vec3::from(self).length()
    }

    /// Direction of this vector with unit length.
    ///
    /// The zero vector has no direction and maps to `Vector::ZERO`.
    pub fn unit_vector(self) -> Self {
        let m = self.magnitude();
        if m > 0.0 && m.is_finite() {
            self.scale(1.0 / m)
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn sum(self, other: Self) -> Self {
        (Vec3::from(self) + Vec3::from(other)).into()
    }

    #[inline]
    pub fn difference(self, other: Self) -> Self {
        (Vec3::from(self) - Vec3::from(other)).into()
    }

    #[inline]
    pub fn distance_from(self, other: Self) -> f32 {
        Vec3::from(self).distance(Vec3::from(other))
    }

    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        (Vec3::from(self) * factor).into()
    }

    /// Drop the z component.
    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vec3 {
    fn from(v: Vector) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
