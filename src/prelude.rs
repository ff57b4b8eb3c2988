//! driftsim prelude module
//!
//! Re-exports the types most code touching the simulation needs.

pub use rand::Rng;

pub use crate::config::{Preset, SimulationConfig};
pub use crate::physics::{
    Force, Interval, Particle, RandomProperties, Scalar, Simulation, SimulationParameters,
    Vector3D,
};
pub use crate::report::TrajectoryObserver;
pub use crate::resources::SharedRng;
