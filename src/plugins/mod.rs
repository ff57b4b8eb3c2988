//! Bevy plugins

pub mod simulation;
