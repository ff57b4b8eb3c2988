use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use core::time::Duration;
use driftsim::SimulationPlugin;
use driftsim::cli::{self, Args};
use driftsim::config::SimulationConfig;

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_presets {
        cli::handle_list_presets();
        return AppExit::Success;
    }

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    if args.print_config {
        return match config.to_toml() {
            Ok(toml_string) => {
                print!("{toml_string}");
                AppExit::Success
            }
            Err(e) => {
                eprintln!("Error: {e}");
                AppExit::error()
            }
        };
    }

    if args.save_config {
        match config.save_to_user_config() {
            Ok(path) => println!("Configuration saved to: {}", path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                return AppExit::error();
            }
        }
    }

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick_interval(&config))))
        .add_plugins(LogPlugin {
            level: log_level,
            ..default()
        })
        .add_plugins(SimulationPlugin::with_config(config))
        .run()
}

fn tick_interval(config: &SimulationConfig) -> Duration {
    config
        .reporting
        .ticks_per_second
        .map(|rate| Duration::from_secs_f64(1.0 / rate))
        .unwrap_or(Duration::ZERO)
}
