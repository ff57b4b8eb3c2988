//! Particle-motion model: vectors, forces, particles and the simulation driver

pub mod force;
pub mod integrators;
pub mod math;
pub mod particle;
pub mod simulation;

pub use force::Force;
pub use math::{Interval, Scalar, Vector, Vector3D};
pub use particle::{Particle, RandomProperties};
pub use simulation::{Simulation, SimulationParameters};
