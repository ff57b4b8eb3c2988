//! Integration tests for the motion laws of the particle model

use driftsim::prelude::*;

fn seeded(parameters: SimulationParameters, seed: u64) -> Simulation {
    let mut rng = SharedRng::from_seed(seed);
    Simulation::new(parameters, &mut *rng)
}

#[test]
fn test_trajectory_length_is_ticks_plus_one() {
    let mut simulation = seeded(
        SimulationParameters {
            particle_count: 7,
            step_count: 12,
            ..Default::default()
        },
        1,
    );

    for trajectory in simulation.trajectories() {
        assert_eq!(trajectory.len(), 1);
    }

    for tick in 1..=12 {
        simulation.step();
        for trajectory in simulation.trajectories() {
            assert_eq!(trajectory.len(), tick + 1);
        }
    }
}

#[test]
fn test_each_tick_follows_the_euler_law() {
    let mut simulation = seeded(
        SimulationParameters {
            particle_count: 6,
            force_count: 5,
            step_count: 40,
            ..Default::default()
        },
        2,
    );

    while !simulation.is_complete() {
        let before: Vec<Particle> = simulation.particles().to_vec();
        simulation.step();

        for (previous, current) in before.iter().zip(simulation.particles()) {
            let velocity = previous.velocity() + previous.net_acceleration();
            let position = previous.position() + velocity;
            assert_eq!(current.velocity(), velocity);
            assert_eq!(current.position(), position);
            assert_eq!(current.trajectory().last(), Some(&position));
        }
    }
}

#[test]
fn test_removing_a_particle_leaves_others_unchanged() {
    let step_count = 30;
    let mut full = seeded(
        SimulationParameters {
            particle_count: 5,
            step_count,
            ..Default::default()
        },
        3,
    );

    let mut remaining = full.particles().to_vec();
    remaining.remove(2);
    let mut reduced = Simulation::from_particles(remaining, step_count);

    full.run();
    reduced.run();

    let full_trajectories: Vec<_> = full
        .trajectories()
        .enumerate()
        .filter(|(index, _)| *index != 2)
        .map(|(_, trajectory)| trajectory)
        .collect();
    let reduced_trajectories: Vec<_> = reduced.trajectories().collect();
    assert_eq!(full_trajectories, reduced_trajectories);
}

#[test]
fn test_no_forces_closed_form() {
    let step_count = 60;
    let mut simulation = seeded(
        SimulationParameters {
            particle_count: 10,
            force_count: 0,
            step_count,
            ..Default::default()
        },
        4,
    );
    simulation.run();

    for particle in simulation.particles() {
        assert_eq!(particle.velocity(), particle.initial_velocity());

        let expected =
            particle.initial_position() + particle.initial_velocity() * step_count as Scalar;
        let error = (particle.position().value() - expected.value()).length();
        assert!(error < 1e-9, "closed form off by {error}");
    }
}

#[test]
fn test_single_constant_force_scenario() {
    let particle = Particle::new(Vector3D::ZERO, Vector3D::ZERO)
        .with_forces([Force::new(Vector3D::new(0.0, 0.0, 1.0), 2.0)]);
    let mut simulation = Simulation::from_particles(vec![particle], 3);

    let expected = [
        (Vector3D::new(0.0, 0.0, 2.0), Vector3D::new(0.0, 0.0, 2.0)),
        (Vector3D::new(0.0, 0.0, 4.0), Vector3D::new(0.0, 0.0, 6.0)),
        (Vector3D::new(0.0, 0.0, 6.0), Vector3D::new(0.0, 0.0, 12.0)),
    ];
    for (velocity, position) in expected {
        assert!(simulation.step());
        let particle = &simulation.particles()[0];
        assert_eq!(particle.velocity(), velocity);
        assert_eq!(particle.position(), position);
    }
    assert!(!simulation.step());
}

#[test]
fn test_gravity_preset_runs_to_completion() {
    let mut config = SimulationConfig::from_preset(Preset::Gravity);
    config.physics.initial_seed = Some(12);

    let mut rng = SharedRng::from_optional_seed(config.physics.initial_seed);
    let mut simulation = Simulation::new(config.physics.to_parameters(), &mut *rng);
    simulation.run();

    assert_eq!(simulation.particle_count(), 10);
    assert_eq!(simulation.ticks_elapsed(), 100);
    for particle in simulation.particles() {
        // 0.1 * (1 + 2 + ... + 100)
        let drop = particle.initial_position().z - particle.position().z;
        assert!((drop - 505.0).abs() < 1e-9, "dropped {drop}");
    }
}
