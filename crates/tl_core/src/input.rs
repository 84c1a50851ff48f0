use bevy::prelude::*;
use bitflags::bitflags;

bitflags! {
    /// Movement directions held down during a frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveKeys: u8 {
        const UP = 0b0000_0001;
        const DOWN = 0b0000_0010;
        const LEFT = 0b0000_0100;
        const RIGHT = 0b0000_1000;
    }
}

impl MoveKeys {
    /// Per-axis direction in map space (y down), each component in {-1, 0, 1}.
    ///
    /// Opposite keys cancel out. Diagonals are not normalized.
    pub fn direction(self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.contains(Self::UP) {
            dir.y -= 1.0;
        }
        if self.contains(Self::DOWN) {
            dir.y += 1.0;
        }
        if self.contains(Self::LEFT) {
            dir.x -= 1.0;
        }
        if self.contains(Self::RIGHT) {
            dir.x += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_direction() {
        assert_eq!(MoveKeys::empty().direction(), Vec2::ZERO);
    }

    #[test]
    fn up_points_toward_negative_y() {
        assert_eq!(MoveKeys::UP.direction(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        assert_eq!((MoveKeys::LEFT | MoveKeys::RIGHT).direction(), Vec2::ZERO);
        assert_eq!((MoveKeys::UP | MoveKeys::DOWN).direction(), Vec2::ZERO);
    }

    #[test]
    fn diagonal_is_unnormalized() {
        assert_eq!((MoveKeys::UP | MoveKeys::RIGHT).direction(), Vec2::new(1.0, -1.0));
    }
}
