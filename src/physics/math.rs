//! Vector arithmetic and random sampling for the particle model

use bevy::prelude::{Deref, DerefMut};
use core::fmt;
use core::ops::{Add, AddAssign, Mul};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// Raw 3D vector backing [`Vector3D`]
pub type Vector = bevy::math::DVec3;

/// A 3-component real vector used for positions, velocities and accelerations.
///
/// Binary operators return new values; [`Vector3D::accumulate`] is the only
/// mutating operation. Components are not checked for finiteness, so values
/// that overflow keep propagating through later arithmetic.
#[derive(Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct Vector3D(pub Vector);

impl Vector3D {
    pub const ZERO: Self = Self(Vector::ZERO);

    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self(Vector::new(x, y, z))
    }

    pub const fn from_array(components: [Scalar; 3]) -> Self {
        Self(Vector::from_array(components))
    }

    #[inline]
    pub fn value(&self) -> Vector {
        self.0
    }

    /// Component-wise product with a scalar
    #[inline]
    pub fn scale(self, k: Scalar) -> Self {
        Self(self.0 * k)
    }

    /// In-place `self := self + other`, returning `self` for chaining
    #[inline]
    pub fn accumulate(&mut self, other: Self) -> &mut Self {
        self.0 += other.0;
        self
    }
}

impl From<Vector> for Vector3D {
    fn from(value: Vector) -> Self {
        Self(value)
    }
}

impl From<[Scalar; 3]> for Vector3D {
    fn from(value: [Scalar; 3]) -> Self {
        Self::from_array(value)
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Self) {
        self.accumulate(rhs);
    }
}

impl Mul<Scalar> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Closed interval of scalars used for every randomized parameter
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: Scalar,
    pub max: Scalar,
}

impl Interval {
    pub const fn new(min: Scalar, max: Scalar) -> Self {
        Self { min, max }
    }

    /// Degenerate interval containing a single value
    pub const fn point(value: Scalar) -> Self {
        Self::new(value, value)
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn contains(&self, value: Scalar) -> bool {
        let (low, high) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        (low..=high).contains(&value)
    }
}

/// Draws `min + (max - min) * u` with `u` uniform in `[0, 1)`.
///
/// Accepts `min == max` (always returns `min`) and `min > max` (samples the
/// reversed interval) without panicking.
pub fn uniform(rng: &mut impl Rng, interval: Interval) -> Scalar {
    let u: Scalar = rng.random();
    interval.min + (interval.max - interval.min) * u
}

/// Draws each axis independently from `interval`, in x, y, z order
pub fn random_vector(rng: &mut impl Rng, interval: Interval) -> Vector3D {
    let x = uniform(rng, interval);
    let y = uniform(rng, interval);
    let z = uniform(rng, interval);
    Vector3D::new(x, y, z)
}
