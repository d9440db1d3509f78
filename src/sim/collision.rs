//! Collision detection and paddle deflection
//!
//! The ball is drawn as a circle but collides as its square bounding box.
//! Paddle hits redirect the ball by where it struck, not by reflection.

use glam::Vec2;

/// Axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.min.y + self.size.y / 2.0
    }
}

/// Check whether the ball box overlaps a paddle box
///
/// Strict on every edge: boxes that only touch do not collide.
#[inline]
pub fn collides(ball: &Aabb, paddle: &Aabb) -> bool {
    let (ball_max, paddle_max) = (ball.max(), paddle.max());
    ball.min.x < paddle_max.x
        && ball_max.x > paddle.min.x
        && ball.min.y < paddle_max.y
        && ball_max.y > paddle.min.y
}

/// Normalized contact point: 0 at the paddle center, +/-1 at its edges
///
/// Can exceed 1 in magnitude when the ball only clips a corner.
#[inline]
pub fn contact_point(ball: &Aabb, paddle: &Aabb) -> f32 {
    let half = paddle.size.y / 2.0;
    (ball.center_y() - paddle.center_y()) / half
}

/// Velocity after a paddle hit
///
/// Horizontal speed keeps its magnitude and points along `away` (+1 or -1).
/// Vertical speed is overwritten from the contact point, so `|vy| <= base_speed`.
pub fn deflect(
    velocity: Vec2,
    ball: &Aabb,
    paddle: &Aabb,
    away: f32,
    base_speed: f32,
    max_angle: f32,
) -> Vec2 {
    let angle = contact_point(ball, paddle) * max_angle;
    Vec2::new(away * velocity.x.abs(), base_speed * angle.sin())
}
