use bevy::prelude::*;

pub mod loader;

pub use loader::{create_image, load_map_image, LoadedMap, MapLoadError};

/// Map plugin for Torchlit.
/// Loads the map image at startup and publishes its [`tl_core::MapBounds`].
pub struct TlMapPlugin;

impl Plugin for TlMapPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_map);
    }
}

/// Startup system: decode the configured map and spawn it as a top-left anchored sprite.
///
/// A missing or unreadable map is fatal; the app exits with an error code
/// and `MapBounds` is never inserted.
pub fn load_map(
    mut commands: Commands,
    config: Res<tl_core::DemoConfig>,
    mut images: ResMut<Assets<Image>>,
    mut exit: EventWriter<AppExit>,
) {
    let loaded = match load_map_image(&config.map_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("Failed to load map: {}", err);
            exit.send(AppExit::error());
            return;
        }
    };

    info!(
        "Loaded map {} ({}x{})",
        config.map_path.display(),
        loaded.bounds.width,
        loaded.bounds.height
    );

    let handle = images.add(loaded.image);
    commands.spawn((
        Sprite {
            image: handle,
            anchor: bevy::sprite::Anchor::TopLeft,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.insert_resource(loaded.bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tl_core::{DemoConfig, MapBounds};

    fn app_with_map(path: std::path::PathBuf) -> App {
        let mut app = App::new();
        app.insert_resource(DemoConfig {
            map_path: path,
            ..default()
        });
        app.init_resource::<Assets<Image>>();
        app.add_systems(Update, load_map);
        app
    }

    #[test]
    fn missing_map_requests_error_exit() {
        let dir = tempdir().unwrap();
        let mut app = app_with_map(dir.path().join("map.png"));

        app.update();

        assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
        assert!(!app.world().contains_resource::<MapBounds>());
        assert!(app.world().resource::<Assets<Image>>().is_empty());
    }

    #[test]
    fn valid_map_publishes_bounds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.png");
        image::RgbaImage::new(40, 30).save(&path).unwrap();
        let mut app = app_with_map(path);

        app.update();

        assert!(app.should_exit().is_none());
        assert_eq!(*app.world().resource::<MapBounds>(), MapBounds::new(40.0, 30.0));
        assert_eq!(app.world().resource::<Assets<Image>>().len(), 1);
    }
}
