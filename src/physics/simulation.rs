//! Simulation driver: randomized construction and tick-by-tick advancement

use crate::physics::force::Force;
use crate::physics::math::{Interval, Scalar, Vector3D, random_vector};
use crate::physics::particle::{Particle, RandomProperties};
use crate::report::TrajectoryObserver;
use bevy::prelude::*;
use rand::Rng;

/// Construction parameters of a [`Simulation`]
///
/// `dissipation_range` and `velocity_range` are accepted for parameter
/// compatibility and have no effect on motion: the dissipation value is drawn
/// and stored per particle, the velocity range is never read.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Edge length `L` of the cube `[-L/2, L/2]^3` initial positions are drawn from
    pub domain_size: Scalar,
    pub particle_count: usize,
    /// Random forces generated per particle
    pub force_count: usize,
    pub dissipation_range: Interval,
    pub acceleration_range: Interval,
    pub velocity_range: Interval,
    pub initial_velocity_range: Interval,
    pub step_count: usize,
    /// Added to every particle after randomization
    pub constant_forces: Vec<Force>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            domain_size: 100.0,
            particle_count: 5,
            force_count: 3,
            dissipation_range: Interval::new(0.1, 0.5),
            acceleration_range: Interval::new(-1.0, 1.0),
            velocity_range: Interval::new(-2.0, 2.0),
            initial_velocity_range: Interval::new(-1.0, 1.0),
            step_count: 30,
            constant_forces: Vec::new(),
        }
    }
}

impl SimulationParameters {
    pub fn position_range(&self) -> Interval {
        Interval::new(-self.domain_size / 2.0, self.domain_size / 2.0)
    }

    pub fn random_properties(&self) -> RandomProperties {
        RandomProperties {
            dissipation_range: self.dissipation_range,
            initial_velocity_range: self.initial_velocity_range,
            force_count: self.force_count,
            acceleration_range: self.acceleration_range,
        }
    }
}

/// Owns every particle and advances them together, one tick at a time
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    particles: Vec<Particle>,
    step_count: usize,
    ticks_elapsed: usize,
    parameters: Option<SimulationParameters>,
}

impl Simulation {
    /// Builds `particle_count` randomized particles, consuming draws from `rng` in order.
    ///
    /// Per particle: position x/y/z, a first velocity x/y/z that is replaced
    /// immediately, then the draws of [`Particle::apply_random_properties`].
    pub fn new(parameters: SimulationParameters, rng: &mut impl Rng) -> Self {
        let position_range = parameters.position_range();
        let random_properties = parameters.random_properties();

        let particles = (0..parameters.particle_count)
            .map(|_| {
                let position = random_vector(rng, position_range);
                let velocity = random_vector(rng, parameters.initial_velocity_range);

                let mut particle = Particle::new(position, velocity);
                particle.apply_random_properties(&random_properties, rng);
                particle.inject_forces(&parameters.constant_forces);
                particle
            })
            .collect();

        Self {
            particles,
            step_count: parameters.step_count,
            ticks_elapsed: 0,
            parameters: Some(parameters),
        }
    }

    /// Wraps already-built particles, e.g. hand-placed ones in tests
    pub fn from_particles(particles: Vec<Particle>, step_count: usize) -> Self {
        Self {
            particles,
            step_count,
            ticks_elapsed: 0,
            parameters: None,
        }
    }

    /// Advances every particle one tick, in insertion order.
    ///
    /// Returns `false` without touching any state once `step_count` ticks
    /// have been executed.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        for particle in &mut self.particles {
            particle.step();
        }
        self.ticks_elapsed += 1;

        true
    }

    /// Executes the remaining ticks up to `step_count`
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Executes the remaining ticks, notifying `observer` after each one
    pub fn run_observed(&mut self, observer: &mut dyn TrajectoryObserver) {
        while self.step() {
            observer.on_tick(self.ticks_elapsed, &self.particles);
        }
        observer.on_complete(self);
    }

    pub fn is_complete(&self) -> bool {
        self.ticks_elapsed >= self.step_count
    }

    pub fn remaining_ticks(&self) -> usize {
        self.step_count.saturating_sub(self.ticks_elapsed)
    }

    pub fn ticks_elapsed(&self) -> usize {
        self.ticks_elapsed
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Parameters the particles were generated from, if built by [`Simulation::new`]
    pub fn parameters(&self) -> Option<&SimulationParameters> {
        self.parameters.as_ref()
    }

    pub fn trajectories(&self) -> impl Iterator<Item = &[Vector3D]> {
        self.particles.iter().map(Particle::trajectory)
    }

    /// Indices of particles whose current position is no longer finite
    pub fn non_finite_particles(&self) -> impl Iterator<Item = usize> + '_ {
        self.particles
            .iter()
            .enumerate()
            .filter(|(_, particle)| !particle.position().is_finite())
            .map(|(index, _)| index)
    }
}
