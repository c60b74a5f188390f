//! Ball vs paddle collision
//!
//! Each paddle presents one vertical collision plane: its inner face pushed
//! out by the ball radius. A hit is the ball center being on or past that
//! plane while vertically within the paddle's extent.

use glam::Vec2;

use super::state::Side;

/// The inner face of a paddle, inflated by the ball radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleFace {
    pub side: Side,
    /// x of the collision plane
    pub plane_x: f32,
    /// Lowest y covered (paddle center minus half height)
    pub bottom: f32,
    /// Highest y covered
    pub top: f32,
}

impl PaddleFace {
    pub fn new(side: Side, center: Vec2, width: f32, height: f32, ball_size: f32) -> Self {
        let plane_x = match side {
            Side::Left => center.x + width / 2.0 + ball_size,
            Side::Right => center.x - width / 2.0 - ball_size,
        };
        Self {
            side,
            plane_x,
            bottom: center.y - height / 2.0,
            top: center.y + height / 2.0,
        }
    }

    /// Ball center is on or past the plane (regardless of height)
    #[inline]
    pub fn penetrated_by(&self, pos: Vec2) -> bool {
        match self.side {
            Side::Left => pos.x <= self.plane_x,
            Side::Right => pos.x >= self.plane_x,
        }
    }

    /// y lies within the paddle's vertical extent (inclusive)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.bottom && y <= self.top
    }

    /// Ball center touches this face
    pub fn hit(&self, pos: Vec2) -> bool {
        self.penetrated_by(pos) && self.spans(pos.y)
    }

    /// Creep the ball back out one pixel at a time until it clears the plane.
    ///
    /// Returns the number of pixels moved. Iteration count grows with
    /// penetration depth and is unbounded; with per-tick speeds in the single
    /// digits it is a handful of steps.
    pub fn push_out(&self, pos: &mut Vec2) -> u32 {
        let step = match self.side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        let mut moved = 0;
        while self.penetrated_by(*pos) {
            pos.x += step;
            moved += 1;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_face() -> PaddleFace {
        PaddleFace::new(Side::Left, Vec2::new(20.0, 300.0), 10.0, 100.0, 10.0)
    }

    fn right_face() -> PaddleFace {
        PaddleFace::new(Side::Right, Vec2::new(780.0, 300.0), 10.0, 100.0, 10.0)
    }

    #[test]
    fn test_face_geometry() {
        let left = left_face();
        assert_eq!(left.plane_x, 35.0);
        assert_eq!((left.bottom, left.top), (250.0, 350.0));
        assert_eq!(right_face().plane_x, 765.0);
    }

    #[test]
    fn test_hit_requires_vertical_overlap() {
        let left = left_face();
        assert!(left.hit(Vec2::new(30.0, 300.0)));
        assert!(left.hit(Vec2::new(35.0, 250.0)));
        assert!(left.hit(Vec2::new(35.0, 350.0)));
        assert!(!left.hit(Vec2::new(30.0, 351.0)));
        assert!(!left.hit(Vec2::new(36.0, 300.0)));
    }

    #[test]
    fn test_push_out_left() {
        let left = left_face();
        let mut pos = Vec2::new(29.0, 300.0);
        let moved = left.push_out(&mut pos);
        assert_eq!(pos.x, 36.0);
        assert_eq!(moved, 7);
        assert!(!left.penetrated_by(pos));
    }

    #[test]
    fn test_push_out_right() {
        let right = right_face();
        let mut pos = Vec2::new(772.0, 310.0);
        right.push_out(&mut pos);
        assert_eq!(pos.x, 764.0);
        assert_eq!(pos.y, 310.0);
    }

    #[test]
    fn test_push_out_noop_when_clear() {
        let mut pos = Vec2::new(400.0, 300.0);
        assert_eq!(left_face().push_out(&mut pos), 0);
        assert_eq!(pos.x, 400.0);
    }
}
