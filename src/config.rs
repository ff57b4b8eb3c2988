//! Simulation configuration
//!
//! Defaults reproduce the classic random-forces setup. The
//! per-user file lives in the platform config directory (for example
//! `~/.config/driftsim/config.toml` on Linux) and can be overridden by
//! `DRIFTSIM__SECTION__FIELD` environment variables.

use crate::physics::{Force, Interval, Scalar, SimulationParameters, Vector3D};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENVIRONMENT_PREFIX: &str = "DRIFTSIM";

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration sources could not be read or merged
    Load(String),
    /// A configuration file is not valid TOML for [`SimulationConfig`]
    Parse(String),
    /// A field holds a value the simulation cannot use
    InvalidValue { field: &'static str, reason: String },
    /// The configuration could not be written
    Save(String),
    /// No home directory to derive the per-user config location from
    NoConfigDirectory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Failed to load configuration: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Failed to parse configuration: {msg}"),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for {field}: {reason}")
            }
            ConfigError::Save(msg) => write!(f, "Failed to save configuration: {msg}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine the user configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(value: config::ConfigError) -> Self {
        ConfigError::Load(value.to_string())
    }
}

/// Named physics setups
#[derive(clap::ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum Preset {
    /// Random initial velocities and random constant forces per particle
    #[default]
    RandomForces,
    /// Particles at rest falling under one shared constant force
    Gravity,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::RandomForces, Preset::Gravity];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::RandomForces => "random_forces",
            Preset::Gravity => "gravity",
        }
    }

    pub fn physics(&self) -> PhysicsConfig {
        match self {
            Preset::RandomForces => PhysicsConfig::default(),
            Preset::Gravity => PhysicsConfig {
                particle_count: 10,
                force_count: 0,
                initial_velocity_range: Interval::point(0.0),
                step_count: 100,
                constant_forces: vec![ForceConfig {
                    direction: [0.0, 0.0, -1.0],
                    magnitude: 0.1,
                }],
                ..PhysicsConfig::default()
            },
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub reporting: ReportingConfig,
}

/// A constant force given as raw components
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ForceConfig {
    pub direction: [Scalar; 3],
    pub magnitude: Scalar,
}

impl From<ForceConfig> for Force {
    fn from(value: ForceConfig) -> Self {
        Force::new(Vector3D::from_array(value.direction), value.magnitude)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Edge length `L` of the cube initial positions are drawn from
    pub domain_size: Scalar,
    pub particle_count: usize,
    pub force_count: usize,
    /// Drawn per particle and stored, never applied to motion
    pub dissipation_range: Interval,
    pub acceleration_range: Interval,
    /// Accepted for compatibility; unused
    pub velocity_range: Interval,
    pub initial_velocity_range: Interval,
    pub step_count: usize,
    pub initial_seed: Option<u64>,
    pub constant_forces: Vec<ForceConfig>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let parameters = SimulationParameters::default();
        Self {
            domain_size: parameters.domain_size,
            particle_count: parameters.particle_count,
            force_count: parameters.force_count,
            dissipation_range: parameters.dissipation_range,
            acceleration_range: parameters.acceleration_range,
            velocity_range: parameters.velocity_range,
            initial_velocity_range: parameters.initial_velocity_range,
            step_count: parameters.step_count,
            initial_seed: None,
            constant_forces: Vec::new(),
        }
    }
}

impl PhysicsConfig {
    pub fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            domain_size: self.domain_size,
            particle_count: self.particle_count,
            force_count: self.force_count,
            dissipation_range: self.dissipation_range,
            acceleration_range: self.acceleration_range,
            velocity_range: self.velocity_range,
            initial_velocity_range: self.initial_velocity_range,
            step_count: self.step_count,
            constant_forces: self.constant_forces.iter().copied().map(Force::from).collect(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.domain_size.is_finite() {
            return Err(non_finite("physics.domain_size"));
        }

        let intervals = [
            ("physics.dissipation_range", self.dissipation_range),
            ("physics.acceleration_range", self.acceleration_range),
            ("physics.velocity_range", self.velocity_range),
            ("physics.initial_velocity_range", self.initial_velocity_range),
        ];
        for (field, interval) in intervals {
            if !interval.is_finite() {
                return Err(non_finite(field));
            }
        }

        for force in &self.constant_forces {
            if !force.magnitude.is_finite() || force.direction.iter().any(|c| !c.is_finite()) {
                return Err(non_finite("physics.constant_forces"));
            }
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReportingConfig {
    /// Pacing of the headless loop; `None` runs ticks back to back
    pub ticks_per_second: Option<f64>,
    /// Print every particle's position after each tick
    pub print_positions: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: Some(5.0),
            print_positions: true,
        }
    }
}

impl ReportingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.ticks_per_second {
            Some(rate) if !(rate.is_finite() && rate > 0.0) => Err(ConfigError::InvalidValue {
                field: "reporting.ticks_per_second",
                reason: format!("expected a positive number, got {rate}"),
            }),
            _ => Ok(()),
        }
    }
}

fn non_finite(field: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: "value must be finite".to_string(),
    }
}

impl SimulationConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            physics: preset.physics(),
            ..default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.reporting.validate()
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Save(e.to_string()))
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Save(format!("{}: {e}", parent.display())))?;
        }
        std::fs::write(path, content)
            .map_err(|e| ConfigError::Save(format!("{}: {e}", path.display())))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "driftsim").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Layers defaults, the per-user config file and environment overrides
    pub fn load_layered(user_file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::default())?;

        let mut builder = config::Config::builder().add_source(defaults);
        if let Some(path) = user_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENVIRONMENT_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load the per-user configuration, falling back to defaults on any error
    pub fn load_from_user_config() -> Self {
        let path = Self::user_config_path();
        if path.is_none() {
            warn!("{}. Using defaults.", ConfigError::NoConfigDirectory);
        }

        match Self::load_layered(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn save_to_user_config(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::user_config_path().ok_or(ConfigError::NoConfigDirectory)?;
        self.save(&path)?;
        Ok(path)
    }
}
