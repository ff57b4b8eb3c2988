use crate::physics::simulation::Simulation;
use crate::report::TrajectoryObserver;
use bevy::prelude::*;
use std::collections::HashSet;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Integrate,
    Inspect,
    Finish,
}

/// Observer notified after every tick the app executes
#[derive(Resource)]
pub struct TickReporter(pub Box<dyn TrajectoryObserver>);

pub fn simulation_in_progress(simulation: Res<Simulation>) -> bool {
    !simulation.is_complete()
}

pub fn log_simulation_summary(simulation: Res<Simulation>) {
    info!(
        "Simulating {} particles for {} ticks",
        simulation.particle_count(),
        simulation.step_count()
    );
}

/// Advance every particle by one tick and hand the new state to the reporter
pub fn advance_simulation(
    mut simulation: ResMut<Simulation>,
    mut reporter: ResMut<TickReporter>,
) {
    if simulation.step() {
        reporter
            .0
            .on_tick(simulation.ticks_elapsed(), simulation.particles());
    }
}

/// Non-finite positions keep propagating; each particle is reported once
pub fn warn_on_non_finite_positions(
    simulation: Res<Simulation>,
    mut reported: Local<HashSet<usize>>,
) {
    if !simulation.is_changed() {
        return;
    }

    for index in simulation.non_finite_particles() {
        if reported.insert(index) {
            warn!(
                "Particle {index} left the finite range at tick {}",
                simulation.ticks_elapsed()
            );
        }
    }
}

pub fn exit_when_complete(
    simulation: Res<Simulation>,
    mut reporter: ResMut<TickReporter>,
    mut exit: EventWriter<AppExit>,
    mut finished: Local<bool>,
) {
    if *finished || !simulation.is_complete() {
        return;
    }

    *finished = true;
    reporter.0.on_complete(&simulation);
    info!(
        "Simulation complete after {} ticks",
        simulation.ticks_elapsed()
    );
    exit.write(AppExit::Success);
}
