use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod debug_panel;

pub use debug_panel::HudState;

/// HUD plugin for Torchlit.
/// Optional egui panel with frame rate and controller state, toggled with F3.
pub struct TlHudPlugin;

impl Plugin for TlHudPlugin {
    fn build(&self, app: &mut App) {
        // Only add EguiPlugin if not already added
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.init_resource::<HudState>().add_systems(
            Update,
            (debug_panel::toggle_hud, debug_panel::hud_ui_system).chain(),
        );
    }
}
