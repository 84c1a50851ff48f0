use bevy::prelude::*;
use tl_core::{map_to_world, DemoConfig, MapBounds, MoveKeys};

use crate::controller::ViewportController;

/// Z layer of the player circle, above the map.
const PLAYER_Z: f32 = 1.0;

/// Marker component for the player circle.
#[derive(Component)]
pub struct PlayerCircle;

/// Marker component for the camera that follows the player.
#[derive(Component)]
pub struct FollowCamera;

/// Sample W/A/S/D into a [`MoveKeys`] set.
pub fn read_move_keys(keyboard: &ButtonInput<KeyCode>) -> MoveKeys {
    let mut keys = MoveKeys::empty();
    keys.set(MoveKeys::UP, keyboard.pressed(KeyCode::KeyW));
    keys.set(MoveKeys::DOWN, keyboard.pressed(KeyCode::KeyS));
    keys.set(MoveKeys::LEFT, keyboard.pressed(KeyCode::KeyA));
    keys.set(MoveKeys::RIGHT, keyboard.pressed(KeyCode::KeyD));
    keys
}

/// Startup system: build the controller and spawn the player circle.
///
/// Does nothing if the map failed to load.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<DemoConfig>,
    bounds: Option<Res<MapBounds>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(bounds) = bounds else { return };

    let controller = ViewportController::from_config(&config, *bounds);
    let pos = map_to_world(controller.position());

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(config.player.radius))),
        MeshMaterial2d(materials.add(Color::srgb(0.0, 1.0, 0.0))),
        Transform::from_xyz(pos.x, pos.y, PLAYER_Z),
        PlayerCircle,
    ));

    info!(
        "Spawned player at {:?} (map space), camera at {:?}",
        controller.position(),
        controller.camera()
    );
    commands.insert_resource(controller);
}

/// Fixed-step system: advance the controller with the current keyboard state.
pub fn step_controller(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut controller: ResMut<ViewportController>,
) {
    let keys = read_move_keys(&keyboard);
    let delta = controller.step(keys, time.delta_secs());
    if delta != Vec2::ZERO {
        debug!("player moved by {:?} to {:?}", delta, controller.position());
    }
}

/// Copy controller state onto the player and camera transforms.
pub fn sync_player_and_camera(
    controller: Res<ViewportController>,
    mut players: Query<&mut Transform, (With<PlayerCircle>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, (With<FollowCamera>, Without<PlayerCircle>)>,
) {
    let player = map_to_world(controller.position());
    for mut transform in &mut players {
        transform.translation.x = player.x;
        transform.translation.y = player.y;
    }

    let camera = map_to_world(controller.camera());
    for mut transform in &mut cameras {
        transform.translation.x = camera.x;
        transform.translation.y = camera.y;
    }
}

/// Escape closes the demo, same as the window close button.
pub fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.send(AppExit::Success);
    }
}
