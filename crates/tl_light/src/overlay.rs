use bevy::prelude::*;
use tl_core::{map_to_world, DemoConfig};
use tl_player::ViewportController;

use crate::mask::LightMask;

/// Z layer of the darkness overlay, above map and player.
const LIGHT_Z: f32 = 10.0;

/// Marker component for the darkness overlay sprite.
#[derive(Component)]
pub struct LightOverlay;

/// Startup system: render the light mask once and spawn it on the light position.
pub fn spawn_overlay(
    mut commands: Commands,
    config: Res<DemoConfig>,
    controller: Option<Res<ViewportController>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(controller) = controller else { return };

    let mask = LightMask::for_view(
        config.view_extent().size(),
        config.light.radius,
        config.light.opacity,
    );
    let handle = images.add(tl_map::create_image(mask.width, mask.height, mask.pixels()));
    let pos = map_to_world(controller.light());

    commands.spawn((
        Sprite::from_image(handle),
        Transform::from_xyz(pos.x, pos.y, LIGHT_Z),
        LightOverlay,
    ));

    info!(
        "Light overlay {}x{} with radius {}",
        mask.width, mask.height, mask.radius
    );
}

/// Keep the overlay centered on the light.
pub fn sync_overlay(
    controller: Res<ViewportController>,
    mut query: Query<&mut Transform, With<LightOverlay>>,
) {
    let light = map_to_world(controller.light());
    for mut transform in &mut query {
        transform.translation.x = light.x;
        transform.translation.y = light.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::{MapBounds, MoveKeys, ViewExtent};

    #[test]
    fn overlay_follows_light_after_step() {
        let mut controller = ViewportController::new(
            MapBounds::new(800.0, 600.0),
            ViewExtent::new(400.0, 300.0),
            20.0,
            200.0,
            Vec2::new(400.0, 300.0),
        );
        controller.step(MoveKeys::LEFT | MoveKeys::UP, 0.5);

        let mut app = App::new();
        app.insert_resource(controller);
        app.add_systems(Update, sync_overlay);
        let overlay = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, LIGHT_Z), LightOverlay))
            .id();

        app.update();

        let tf = app.world().get::<Transform>(overlay).unwrap();
        assert_eq!(tf.translation, Vec3::new(300.0, -200.0, LIGHT_Z));
    }

    #[test]
    fn no_controller_means_no_overlay() {
        let mut app = App::new();
        app.init_resource::<DemoConfig>();
        app.init_resource::<Assets<Image>>();
        app.add_systems(Update, spawn_overlay);

        app.update();

        let mut overlays = app.world_mut().query::<&LightOverlay>();
        assert_eq!(overlays.iter(app.world()).count(), 0);
        assert!(app.world().resource::<Assets<Image>>().is_empty());
    }
}
