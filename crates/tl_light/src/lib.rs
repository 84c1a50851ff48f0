use bevy::prelude::*;

pub mod mask;
pub mod overlay;

pub use mask::{light_mask, LightMask};
pub use overlay::LightOverlay;

/// Light plugin for Torchlit.
/// Darkens everything outside a radius around the player.
pub struct TlLightPlugin;

impl Plugin for TlLightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, overlay::spawn_overlay.after(tl_player::systems::spawn_player))
            .add_systems(
                Update,
                overlay::sync_overlay.run_if(resource_exists::<tl_player::ViewportController>),
            );
    }
}
