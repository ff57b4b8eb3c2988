//! Read-only trajectory feed for consumers of the simulation

use crate::physics::particle::Particle;
use crate::physics::simulation::Simulation;
use bevy::log::warn;
use std::io::{self, Write};

/// Receives the particle state after every tick.
///
/// Observers only get shared references; they cannot alter the simulation.
pub trait TrajectoryObserver: Send + Sync {
    fn on_tick(&mut self, tick: usize, particles: &[Particle]);

    fn on_complete(&mut self, _simulation: &Simulation) {}
}

/// Prints a header per tick followed by every particle's position
///
/// ```text
/// --- Time step 0 ---
/// (12.31, -4.20, 0.07)
/// ```
///
/// Headers count from zero, so tick `n` is announced as step `n - 1`.
pub struct ConsoleReporter<W: Write + Send + Sync> {
    writer: W,
    failed: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_tick(&mut self, tick: usize, particles: &[Particle]) -> io::Result<()> {
        writeln!(self.writer, "--- Time step {} ---", tick.saturating_sub(1))?;
        for particle in particles {
            writeln!(self.writer, "{}", particle.position())?;
        }
        self.writer.flush()
    }
}

impl<W: Write + Send + Sync> TrajectoryObserver for ConsoleReporter<W> {
    fn on_tick(&mut self, tick: usize, particles: &[Particle]) {
        if self.failed {
            return;
        }

        if let Err(e) = self.write_tick(tick, particles) {
            warn!("Failed to write trajectory report: {e}. Further reports are skipped.");
            self.failed = true;
        }
    }
}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl TrajectoryObserver for SilentObserver {
    fn on_tick(&mut self, _tick: usize, _particles: &[Particle]) {}
}
