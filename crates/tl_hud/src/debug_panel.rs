use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use tl_player::ViewportController;

/// Key that shows or hides the debug panel.
pub const TOGGLE_KEY: KeyCode = KeyCode::F3;

/// Visibility of the debug panel.
#[derive(Resource, Default)]
pub struct HudState {
    pub visible: bool,
}

/// System to flip panel visibility on F3.
pub fn toggle_hud(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<HudState>) {
    if keyboard.just_pressed(TOGGLE_KEY) {
        state.visible = !state.visible;
        debug!("debug panel {}", if state.visible { "shown" } else { "hidden" });
    }
}

/// Text rows shown in the panel.
pub fn hud_lines(controller: &ViewportController, fps: f32) -> Vec<String> {
    let p = controller.position();
    let c = controller.camera();
    let l = controller.light();
    let b = controller.bounds();
    vec![
        format!("FPS: {:.1}", fps),
        format!("Player: ({:.1}, {:.1})", p.x, p.y),
        format!("Camera: ({:.1}, {:.1})", c.x, c.y),
        format!("Light: ({:.1}, {:.1})", l.x, l.y),
        format!("Map: {}x{}", b.width, b.height),
    ]
}

/// System to render the debug panel.
pub fn hud_ui_system(
    mut contexts: EguiContexts,
    state: Res<HudState>,
    controller: Option<Res<ViewportController>>,
    time: Res<Time>,
) {
    if !state.visible {
        return;
    }
    let Some(controller) = controller else { return };

    let dt = time.delta_secs();
    let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };

    egui::Window::new("Debug")
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .show(contexts.ctx_mut(), |ui| {
            for line in hud_lines(&controller, fps) {
                ui.label(line);
            }
            ui.add_space(8.0);
            ui.label("WASD - Move   F3 - Hide   ESC - Quit");
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::{MapBounds, ViewExtent};

    fn controller() -> ViewportController {
        ViewportController::new(
            MapBounds::new(800.0, 600.0),
            ViewExtent::new(400.0, 300.0),
            20.0,
            200.0,
            Vec2::new(0.0, 300.0),
        )
    }

    #[test]
    fn lines_report_clamped_state() {
        let lines = hud_lines(&controller(), 60.0);
        assert_eq!(lines[0], "FPS: 60.0");
        assert_eq!(lines[1], "Player: (20.0, 300.0)");
        assert_eq!(lines[2], "Camera: (400.0, 300.0)");
        assert_eq!(lines[3], "Light: (20.0, 300.0)");
        assert_eq!(lines[4], "Map: 800x600");
    }

    #[test]
    fn f3_toggles_visibility() {
        let mut app = App::new();
        app.init_resource::<HudState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, toggle_hud);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(TOGGLE_KEY);
        app.update();
        assert!(app.world().resource::<HudState>().visible);

        // Held across frames: no second toggle.
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert!(app.world().resource::<HudState>().visible);

        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(TOGGLE_KEY);
        keyboard.press(TOGGLE_KEY);
        app.update();
        assert!(!app.world().resource::<HudState>().visible);
    }
}
