//! driftsim library
//!
//! Particle-motion core, configuration and the headless driver plugin,
//! exposed as a library to enable integration testing.

pub mod cli;
pub mod config;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod report;
pub mod resources;

// Re-export commonly used items
pub use config::{Preset, SimulationConfig};
pub use physics::{
    Force, Interval, Particle, RandomProperties, Scalar, Simulation, SimulationParameters,
    Vector, Vector3D,
};
pub use plugins::simulation::SimulationPlugin;
pub use report::{ConsoleReporter, TrajectoryObserver};
pub use resources::SharedRng;
