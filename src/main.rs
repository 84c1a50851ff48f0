use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::PresentMode;
use tl_core::{DemoConfig, CONFIG_FILE};
use tl_player::FollowCamera;

/// Where the active config came from, for the startup log.
#[derive(Resource)]
struct ConfigOrigin(Option<PathBuf>);

fn main() -> AppExit {
    let config_path = Path::new(CONFIG_FILE);
    let (config, found) = match DemoConfig::load_or_default(config_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            // Logging is not up yet
            eprintln!("Failed to load {}: {}", config_path.display(), err);
            return AppExit::error();
        }
    };
    let origin = ConfigOrigin(found.then(|| config_path.to_path_buf()));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width, config.window.height).into(),
                resizable: false,
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(config.timestep_hz))
        .insert_resource(config)
        .insert_resource(origin)
        // Plugins
        .add_plugins((
            tl_core::TlCorePlugin,
            tl_map::TlMapPlugin,
            tl_player::TlPlayerPlugin,
            tl_light::TlLightPlugin,
            tl_hud::TlHudPlugin,
        ))
        .add_systems(Startup, (log_config, setup_camera))
        .run()
}

fn log_config(config: Res<DemoConfig>, origin: Res<ConfigOrigin>) {
    match &origin.0 {
        Some(path) => info!("Using config from {}", path.display()),
        None => info!("No {} found, using defaults", CONFIG_FILE),
    }
    info!(
        "Window {}x{}, fixed step {} Hz, player speed {} px/s",
        config.window.width, config.window.height, config.timestep_hz, config.player.speed
    );
}

/// Camera with a fixed view size, so the view extent matches the window
/// regardless of DPI scaling.
fn setup_camera(mut commands: Commands, config: Res<DemoConfig>) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: config.window.width,
                height: config.window.height,
            },
            ..OrthographicProjection::default_2d()
        },
        FollowCamera,
    ));
}
