//! Constant forces acting on particles

use crate::physics::integrators::AccelerationField;
use crate::physics::math::{Interval, Scalar, Vector, Vector3D, random_vector, uniform};
use rand::Rng;

/// Axis range for randomly generated force directions
pub const RANDOM_DIRECTION_RANGE: Interval = Interval::new(-1.0, 1.0);

/// A direction and a magnitude, both kept exactly as given
///
/// The direction is not normalized and the magnitude may be negative; the
/// acceleration contributed is simply `direction * magnitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub direction: Vector3D,
    pub magnitude: Scalar,
}

impl Force {
    pub fn new(direction: Vector3D, magnitude: Scalar) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    /// Direction drawn per axis from `[-1, 1]`, then magnitude from `magnitude_range`
    pub fn random(rng: &mut impl Rng, magnitude_range: Interval) -> Self {
        let direction = random_vector(rng, RANDOM_DIRECTION_RANGE);
        let magnitude = uniform(rng, magnitude_range);
        Self::new(direction, magnitude)
    }

    #[inline]
    pub fn acceleration(&self) -> Vector3D {
        self.direction * self.magnitude
    }
}

/// Sum of accelerations, accumulated from zero in slice order
pub fn net_acceleration(forces: &[Force]) -> Vector3D {
    let mut net = Vector3D::ZERO;
    for force in forces {
        net.accumulate(force.acceleration());
    }
    net
}

impl AccelerationField for Vec<Force> {
    fn at(&self, _position: Vector) -> Vector {
        net_acceleration(self).value()
    }
}
