use bevy::prelude::*;

pub mod bounds;
pub mod config;
pub mod input;

pub use bounds::{clamp_axis, map_to_world, MapBounds, ViewExtent};
pub use config::{ConfigError, DemoConfig, LightConfig, PlayerConfig, WindowConfig, CONFIG_FILE};
pub use input::MoveKeys;

/// Core plugin for Torchlit.
/// Guarantees a [`DemoConfig`] resource for the other plugins.
pub struct TlCorePlugin;

impl Plugin for TlCorePlugin {
    fn build(&self, app: &mut App) {
        // Keeps a config inserted by the binary, falls back to defaults otherwise.
        app.init_resource::<DemoConfig>();
    }
}
