use bevy::prelude::*;

pub mod controller;
pub mod systems;

pub use controller::ViewportController;
pub use systems::{FollowCamera, PlayerCircle};

/// Player plugin for Torchlit.
/// Handles the keyboard-driven player, the clamped follow camera, and the light anchor.
pub struct TlPlayerPlugin;

impl Plugin for TlPlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::spawn_player.after(tl_map::load_map))
            .add_systems(
                FixedUpdate,
                systems::step_controller.run_if(resource_exists::<ViewportController>),
            )
            .add_systems(
                Update,
                (
                    systems::sync_player_and_camera.run_if(resource_exists::<ViewportController>),
                    systems::exit_on_escape,
                ),
            );
    }
}
