use bevy::prelude::*;
use tl_core::{DemoConfig, MapBounds, MoveKeys, ViewExtent};

/// Player, camera and light state in map space.
///
/// Created once the map size is known and stepped once per fixed frame.
/// After construction and after every [`ViewportController::step`]:
/// the player stays `radius` away from the map edges, the camera stays
/// one view half-extent away from them, and the light sits exactly on
/// the player. On axes where the map is too small for the margin both
/// values collapse to the middle of the map.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewportController {
    position: Vec2,
    camera: Vec2,
    light: Vec2,
    bounds: MapBounds,
    view: ViewExtent,
    radius: f32,
    speed: f32,
    normalize_diagonal: bool,
}

impl ViewportController {
    pub fn new(bounds: MapBounds, view: ViewExtent, radius: f32, speed: f32, spawn: Vec2) -> Self {
        let mut controller = Self {
            position: spawn,
            camera: spawn,
            light: spawn,
            bounds,
            view,
            radius,
            speed,
            normalize_diagonal: false,
        };
        controller.settle();
        controller
    }

    pub fn from_config(config: &DemoConfig, bounds: MapBounds) -> Self {
        Self::new(
            bounds,
            config.view_extent(),
            config.player.radius,
            config.player.speed,
            config.spawn_point(),
        )
        .with_normalized_diagonal(config.player.normalize_diagonal)
    }

    pub fn with_normalized_diagonal(mut self, normalize: bool) -> Self {
        self.normalize_diagonal = normalize;
        self
    }

    /// Advance one frame: move, clamp the player, follow with the camera, sync the light.
    ///
    /// Returns the displacement that was applied before clamping.
    pub fn step(&mut self, keys: MoveKeys, dt: f32) -> Vec2 {
        let delta = self.displacement(keys, dt);
        self.position += delta;
        self.settle();
        delta
    }

    /// Unclamped movement for one frame.
    pub fn displacement(&self, keys: MoveKeys, dt: f32) -> Vec2 {
        let mut direction = keys.direction();
        if self.normalize_diagonal {
            direction = direction.normalize_or_zero();
        }
        direction * self.speed * dt
    }

    fn settle(&mut self) {
        self.position = self
            .bounds
            .clamp_with_margin(self.position, Vec2::splat(self.radius));
        self.camera = self
            .bounds
            .clamp_with_margin(self.position, self.view.as_vec2());
        self.light = self.position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn light(&self) -> Vec2 {
        self.light
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }
}
