//! Command line interface for driftsim

use clap::Parser;
use std::fmt;

use crate::config::{ConfigError, Preset, SimulationConfig};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// The resulting configuration is unusable
    InvalidConfig(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(_) => None,
            CliError::InvalidConfig(err) => Some(err),
        }
    }
}

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// driftsim - particles under constant forces
#[derive(Parser, Debug, Default)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Start from a named preset instead of the configured physics
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<Preset>,

    /// Number of particles to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub particles: Option<usize>,

    /// Random forces per particle (overrides config file)
    #[arg(short = 'm', long, value_name = "COUNT")]
    pub forces: Option<usize>,

    /// Number of ticks to run (overrides config file)
    #[arg(short = 't', long, value_name = "TICKS")]
    pub steps: Option<usize>,

    /// Random seed for particle generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Ticks per second; 0 runs unpaced
    #[arg(short = 'r', long, value_name = "RATE")]
    pub rate: Option<f64>,

    /// Do not print positions after each tick
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to the user config file
    #[arg(long)]
    pub save_config: bool,
}

/// Handles the --list-presets flag by printing available presets
pub fn handle_list_presets() {
    println!("Available presets:");
    for preset in Preset::ALL {
        let physics = preset.physics();
        println!(
            "  - {} ({} particles, {} random forces each, {} constant forces, {} ticks)",
            preset.name(),
            physics.particle_count,
            physics.force_count,
            physics.constant_forces.len(),
            physics.step_count,
        );
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load(config_path).map_err(|err| CliError::ConfigLoad(err.to_string()))?
    } else {
        SimulationConfig::load_from_user_config()
    };

    apply_overrides(args, &mut config);

    config.validate().map_err(CliError::InvalidConfig)?;

    Ok(config)
}

/// Applies every command-line override on top of `config`
pub fn apply_overrides(args: &Args, config: &mut SimulationConfig) {
    if let Some(preset) = args.preset {
        println!("Using preset: {}", preset.name());
        config.physics = preset.physics();
    }

    if let Some(particle_count) = args.particles {
        println!("Overriding particle count to: {particle_count}");
        config.physics.particle_count = particle_count;
    }

    if let Some(force_count) = args.forces {
        println!("Overriding force count to: {force_count}");
        config.physics.force_count = force_count;
    }

    if let Some(step_count) = args.steps {
        println!("Overriding step count to: {step_count}");
        config.physics.step_count = step_count;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if let Some(rate) = args.rate {
        config.reporting.ticks_per_second = (rate != 0.0).then_some(rate);
    }

    if args.quiet {
        config.reporting.print_positions = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::parse_from(["driftsim", "-n", "8", "-m", "0", "-t", "12", "-s", "3", "-q"]);

        assert_eq!(args.particles, Some(8));
        assert_eq!(args.forces, Some(0));
        assert_eq!(args.steps, Some(12));
        assert_eq!(args.seed, Some(3));
        assert!(args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_preset_names() {
        let args = Args::parse_from(["driftsim", "--preset", "gravity"]);
        assert_eq!(args.preset, Some(Preset::Gravity));

        let args = Args::parse_from(["driftsim", "--preset", "random_forces"]);
        assert_eq!(args.preset, Some(Preset::RandomForces));

        assert!(Args::try_parse_from(["driftsim", "--preset", "orbit"]).is_err());
    }

    #[test]
    fn test_overrides_apply_over_preset() {
        let args = Args {
            preset: Some(Preset::Gravity),
            particles: Some(3),
            seed: Some(99),
            rate: Some(0.0),
            quiet: true,
            ..Default::default()
        };
        let mut config = SimulationConfig::default();

        apply_overrides(&args, &mut config);

        assert_eq!(config.physics.particle_count, 3);
        assert_eq!(config.physics.force_count, 0);
        assert_eq!(config.physics.constant_forces.len(), 1);
        assert_eq!(config.physics.initial_seed, Some(99));
        assert_eq!(config.reporting.ticks_per_second, None);
        assert!(!config.reporting.print_positions);
    }

    #[test]
    fn test_no_overrides_leave_config_untouched() {
        let mut config = SimulationConfig::default();
        apply_overrides(&Args::default(), &mut config);
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args {
            config: Some("/nonexistent/driftsim.toml".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            load_and_apply_config(&args),
            Err(CliError::ConfigLoad(_))
        ));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let path = std::env::temp_dir().join(format!("driftsim-cli-test-{}.toml", std::process::id()));
        SimulationConfig::default().save(&path).unwrap();
        let args = Args {
            config: Some(path.display().to_string()),
            rate: Some(-2.0),
            ..Default::default()
        };

        let result = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
