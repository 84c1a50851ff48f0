use bevy::math::Vec2;

/// Parameters of the darkness mask drawn over the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightMask {
    pub width: u32,
    pub height: u32,
    pub radius: f32,
    pub opacity: u8,
}

impl LightMask {
    /// A mask twice the view size, so it still covers the whole view when
    /// its center sits on a view corner.
    pub fn for_view(view_size: Vec2, radius: f32, opacity: u8) -> Self {
        let size = (view_size * 2.0).ceil().max(Vec2::ONE);
        Self {
            width: size.x as u32,
            height: size.y as u32,
            radius,
            opacity,
        }
    }

    pub fn pixels(&self) -> Vec<u8> {
        light_mask(self.width, self.height, self.radius, self.opacity)
    }
}

/// RGBA8 pixels: transparent inside `radius` of the image center, black at `opacity` outside.
///
/// Distances are measured from pixel centers.
pub fn light_mask(width: u32, height: u32, radius: f32, opacity: u8) -> Vec<u8> {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let r2 = radius * radius;

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let dy = y as f32 + 0.5 - cy;
        for x in 0..width {
            let dx = x as f32 + 0.5 - cx;
            let alpha = if dx * dx + dy * dy <= r2 { 0 } else { opacity };
            data.extend_from_slice(&[0, 0, 0, alpha]);
        }
    }
    data
}
