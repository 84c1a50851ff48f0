use bevy::prelude::*;

/// Pixel size of the loaded map image.
///
/// Map space has its origin at the top-left corner of the image,
/// with x growing right and y growing down.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp `point` so that a box of half-size `margin` around it stays inside the map.
    ///
    /// Each axis is clamped independently with [`clamp_axis`].
    pub fn clamp_with_margin(&self, point: Vec2, margin: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(point.x, margin.x, margin.x, self.width),
            clamp_axis(point.y, margin.y, margin.y, self.height),
        )
    }
}

/// Half of the visible view size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewExtent {
    pub half_width: f32,
    pub half_height: f32,
}

impl ViewExtent {
    pub const fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Build from a full view size, e.g. the window resolution.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(width / 2.0, height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.half_width * 2.0, self.half_height * 2.0)
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

/// Restrict `value` to `[low_margin, extent - high_margin]`.
///
/// When the extent is smaller than both margins together the range is
/// inverted; the value then collapses to the midpoint of the two bounds.
pub fn clamp_axis(value: f32, low_margin: f32, high_margin: f32, extent: f32) -> f32 {
    let min = low_margin;
    let max = extent - high_margin;
    if min > max {
        return (min + max) / 2.0;
    }
    value.max(min).min(max)
}

/// Convert a map-space point (y down) into a Bevy world position (y up).
///
/// The map sprite is anchored top-left at the world origin.
pub fn map_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}
