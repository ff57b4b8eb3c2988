//! Numerical integration of particle motion

use crate::physics::math::{Scalar, Vector};

pub mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

/// Time step of every tick; the particle model has no separate `dt`
pub const UNIT_TIME_STEP: Scalar = 1.0;

/// Anything that can report an acceleration at a position
///
/// The particle model only uses position-independent fields (sums of constant
/// forces), but integrators are written against the general signature.
pub trait AccelerationField {
    fn at(&self, position: Vector) -> Vector;
}

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Advance a single particle's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `field` - Acceleration acting on the particle
    /// * `dt` - Time step
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    );

    fn convergence_order(&self) -> usize;

    fn name(&self) -> &'static str;
}
