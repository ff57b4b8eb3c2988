//! Velocity-first Euler integration
//!
//! This is the update law of the particle model: the velocity absorbs the
//! acceleration first, then the position moves by the NEW velocity.

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// # Algorithm
///
/// ```text
/// Stage 1: Velocity update using current position
///   a(t) = field(x(t))
///   v(t+dt) = v(t) + a(t) * dt
///
/// Stage 2: Position update using NEW velocity
///   x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// With `dt = 1` the multiplications are exact, so one step is bit-for-bit
/// `v += a; x += v`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    ) {
        let acceleration = field.at(*position);

        *velocity += acceleration * dt;

        *position += *velocity * dt;
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }
}
