//! Particle state and the per-tick update rule

use crate::physics::force::Force;
use crate::physics::integrators::{Integrator, SymplecticEuler, UNIT_TIME_STEP};
use crate::physics::math::{Interval, Scalar, Vector3D, random_vector, uniform};
use rand::Rng;

/// Ranges used for the one-time randomization of a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomProperties {
    /// Drawn and stored on the particle, never applied to motion
    pub dissipation_range: Interval,
    pub initial_velocity_range: Interval,
    pub force_count: usize,
    pub acceleration_range: Interval,
}

/// A point particle moved by a fixed set of constant forces
///
/// The trajectory always holds the initial position followed by one entry per
/// executed tick. Forces are fixed once stepping begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vector3D,
    velocity: Vector3D,
    initial_velocity: Vector3D,
    trajectory: Vec<Vector3D>,
    forces: Vec<Force>,
    dissipation: Option<Scalar>,
}

impl Particle {
    pub fn new(position: Vector3D, velocity: Vector3D) -> Self {
        Self {
            position,
            velocity,
            initial_velocity: velocity,
            trajectory: vec![position],
            forces: Vec::new(),
            dissipation: None,
        }
    }

    /// Builder used for hand-made particles and the constant-force variant
    pub fn with_forces(mut self, forces: impl IntoIterator<Item = Force>) -> Self {
        self.forces.extend(forces);
        self
    }

    /// Draws a fresh initial velocity and replaces the forces with `force_count` random ones.
    ///
    /// Draw order: dissipation, velocity x/y/z, then for each force direction
    /// x/y/z followed by its magnitude.
    pub fn apply_random_properties(&mut self, properties: &RandomProperties, rng: &mut impl Rng) {
        self.dissipation = Some(uniform(rng, properties.dissipation_range));

        let initial_velocity = random_vector(rng, properties.initial_velocity_range);
        self.initial_velocity = initial_velocity;
        self.velocity = initial_velocity;

        self.forces = (0..properties.force_count)
            .map(|_| Force::random(rng, properties.acceleration_range))
            .collect();
    }

    /// Adds forces before the first tick; ignored once the particle has moved
    pub(crate) fn inject_forces(&mut self, forces: &[Force]) {
        if self.ticks_elapsed() == 0 {
            self.forces.extend_from_slice(forces);
        }
    }

    pub fn net_acceleration(&self) -> Vector3D {
        crate::physics::force::net_acceleration(&self.forces)
    }

    /// Advances one tick: `velocity += net_acceleration`, then `position += velocity`
    pub fn step(&mut self) {
        SymplecticEuler.step(
            &mut self.position.0,
            &mut self.velocity.0,
            &self.forces,
            UNIT_TIME_STEP,
        );
        self.trajectory.push(self.position);
    }

    #[inline]
    pub fn position(&self) -> Vector3D {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector3D {
        self.velocity
    }

    #[inline]
    pub fn initial_velocity(&self) -> Vector3D {
        self.initial_velocity
    }

    #[inline]
    pub fn initial_position(&self) -> Vector3D {
        self.trajectory[0]
    }

    pub fn trajectory(&self) -> &[Vector3D] {
        &self.trajectory
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Value drawn from the dissipation range, if the particle was randomized
    pub fn dissipation(&self) -> Option<Scalar> {
        self.dissipation
    }

    pub fn ticks_elapsed(&self) -> usize {
        self.trajectory.len() - 1
    }
}
