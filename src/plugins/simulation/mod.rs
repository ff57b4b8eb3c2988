//! Simulation plugin - Self-contained plugin pattern
//!
//! Builds the [`Simulation`] resource from the configuration and advances it
//! one tick per app update until every tick has run, then requests exit.

use crate::config::SimulationConfig;
use crate::physics::simulation::Simulation;
use crate::report::{ConsoleReporter, SilentObserver, TrajectoryObserver};
use crate::resources::SharedRng;
use bevy::prelude::*;

mod physics;

pub use physics::{PhysicsSet, TickReporter};
use physics::{
    advance_simulation, exit_when_complete, log_simulation_summary, simulation_in_progress,
    warn_on_non_finite_positions,
};

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match config.to_toml() {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let mut rng = SharedRng::from_optional_seed(config.physics.initial_seed);
        let simulation = Simulation::new(config.physics.to_parameters(), &mut *rng);

        let reporter: Box<dyn TrajectoryObserver> = if config.reporting.print_positions {
            Box::new(ConsoleReporter::stdout())
        } else {
            Box::new(SilentObserver)
        };

        app.insert_resource(config);
        app.insert_resource(simulation);
        app.insert_resource(TickReporter(reporter));

        app.configure_sets(
            Update,
            (
                PhysicsSet::Integrate,
                PhysicsSet::Inspect,
                PhysicsSet::Finish,
            )
                .chain(),
        );

        app.add_systems(Startup, log_simulation_summary);
        app.add_systems(
            Update,
            (
                advance_simulation
                    .run_if(simulation_in_progress)
                    .in_set(PhysicsSet::Integrate),
                warn_on_non_finite_positions.in_set(PhysicsSet::Inspect),
                exit_when_complete.in_set(PhysicsSet::Finish),
            ),
        );
    }
}
