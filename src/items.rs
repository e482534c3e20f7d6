use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};
use vecsaurus::Vector2;

const MAX_VELOCITY: Vector2 = Vector2 { x: 2000.0, y: 2000.0 };
const MIN_VELOCITY: Vector2 = Vector2 { x: -2000.0, y: -2000.0 };
pub const GRAVITY: Vector2 = Vector2 { x: 0.0, y: 400.0 };

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// Unit vector of `v`, or zero when `v` has no length.
fn direction(v: Vector2) -> Vector2 {
    if v.length() == 0.0 {
        return Vector2::default();
    }
    v.unit()
}

/// Left-hand perpendicular.
fn perpendicular(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

pub struct Wall {
    pub a: Vector2,
    pub b: Vector2,
    pub width: i32,
    pub color: Color,
    pub dir: Vector2,
    pub length: f64,
    pub normal: Vector2,
    pub friction: f64,
    pub restitution: f64,
}

impl Wall {
    pub fn new(
        a: Vector2,
        b: Vector2,
        width: Option<i32>,
        color: Option<Color>,
        friction: Option<f64>,
        restitution: Option<f64>,
    ) -> Wall {
        let span = Vector2::from_points(a, b);
        let dir = direction(span);
        Wall {
            a,
            b,
            width: width.unwrap_or(10),
            color: color.unwrap_or(Color::GREEN),
            dir,
            length: span.length(),
            normal: perpendicular(dir),
            friction: friction.unwrap_or(0.1),
            restitution: restitution.unwrap_or(0.1),
        }
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let color = to_abgr(self.color);
        let _ = canvas.thick_line(
            self.a.x as i16,
            self.a.y as i16,
            self.b.x as i16,
            self.b.y as i16,
            self.width as u8,
            color,
        );
    }
}

pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: i32,
    pub color: Color,
    pub friction: f64,
    pub restitution: f64,
}

impl Ball {
    pub fn new(
        position: Vector2,
        velocity: Option<Vector2>,
        radius: Option<i32>,
        color: Option<Color>,
        friction: Option<f64>,
        restitution: Option<f64>,
    ) -> Ball {
        Ball {
            position,
            velocity: velocity.unwrap_or_default(),
            radius: radius.unwrap_or(10),
            color: color.unwrap_or(Color::RED),
            friction: friction.unwrap_or(0.1),
            restitution: restitution.unwrap_or(0.1),
        }
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let color = to_abgr(self.color);
        let _ = canvas.filled_circle(
            self.position.x as i16,
            self.position.y as i16,
            self.radius as i16,
            color,
        );
    }

    pub fn move_ball(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.velocity = Vector2::component_max(
            Vector2::component_min(self.velocity, MAX_VELOCITY),
            MIN_VELOCITY,
        );
    }

    pub fn apply_force(&mut self, force: Vector2, dt: f64) {
        self.velocity += force * dt;
    }

    pub fn wall_collision(&mut self, wall: &Wall) {
        let mut offset = Vector2::from_points(wall.a, self.position);
        let along = offset.dot(wall.dir);
        if along > wall.length {
            offset = Vector2::from_points(wall.b, self.position);
        }
        // past either end the wall behaves like a round cap
        let (nv, tv, dist, min_dist) = if along < 0.0 || along > wall.length {
            let nv = direction(offset);
            (nv, perpendicular(nv), offset.length(), self.radius as f64)
        } else {
            (
                wall.normal,
                wall.dir,
                offset.dot(wall.normal),
                (self.radius + wall.width / 2) as f64,
            )
        };
        if dist.abs() > min_dist {
            return;
        }
        let n_vel = self.velocity.dot(nv);
        if (n_vel < 0.0 && dist < 0.0) || (n_vel > 0.0 && dist > 0.0) {
            return;
        }
        let t_vel = self.velocity.dot(tv);
        let total_restitution = wall.restitution + self.restitution;
        let total_friction = wall.friction + self.friction;
        self.velocity = wall.normal * (-n_vel * (1.0 - total_restitution))
            + wall.dir * (t_vel * (1.0 - total_friction));
        let penetration = min_dist - dist.abs();
        if penetration > 0.0 {
            let sign = if dist >= 0.0 { 1.0 } else { -1.0 };
            self.position += nv * (penetration * sign);
        }
    }

    pub fn ball_collision(&mut self, other: &mut Ball) {
        let offset = Vector2::from_points(other.position, self.position);
        let dist = offset.length();
        let min_dist = (self.radius + other.radius) as f64;
        if dist > min_dist {
            return;
        }
        let nv = direction(offset);
        let tv = perpendicular(nv);
        let n_vel_self = self.velocity.dot(nv);
        let n_vel_other = other.velocity.dot(nv);
        if n_vel_self - n_vel_other > 0.0 {
            return;
        }
        let t_vel_self = self.velocity.dot(tv);
        let t_vel_other = other.velocity.dot(tv);
        let avg_n_vel = (n_vel_self.abs() + n_vel_other.abs()) / 2.0;
        let total_restitution = self.restitution + other.restitution;
        let total_friction = self.friction + other.friction;
        let normal_part = nv * (avg_n_vel * (1.0 - total_restitution));
        self.velocity = normal_part + tv * (t_vel_self * (1.0 - total_friction));
        other.velocity = -normal_part + tv * (t_vel_other * (1.0 - total_friction));
        let penetration = min_dist - dist;
        if penetration > 0.0 {
            let push = nv * (penetration / 2.0);
            self.position += push;
            other.position -= push;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wall_geometry() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(0.0, 10.0);
        let wall = Wall::new(a, b, None, None, None, None);
        assert_eq!(wall.length, 10.0);
        assert_eq!(wall.dir, Vector2::new(0.0, 1.0));
        assert_eq!(wall.normal, Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn test_ball_bounces_off_wall() {
        let (a, b) = (Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0));
        let wall = Wall::new(a, b, None, None, Some(0.0), Some(0.0));
        let position = Vector2::new(50.0, 12.0);
        let velocity = Vector2::new(0.0, -100.0);
        let mut ball = Ball::new(position, Some(velocity), None, None, Some(0.0), Some(0.0));
        ball.wall_collision(&wall);
        assert_relative_eq!(ball.velocity.y, 100.0);
        assert_relative_eq!(ball.position.y, 15.0);
    }

    #[test]
    fn test_velocity_is_clamped() {
        let velocity = Vector2::new(5000.0, -5000.0);
        let mut ball = Ball::new(Vector2::default(), Some(velocity), None, None, None, None);
        ball.move_ball(0.001);
        assert_eq!(ball.velocity, Vector2::new(2000.0, -2000.0));
        assert_relative_eq!(ball.position.x, 5.0);
    }

    #[test]
    fn test_touching_balls_separate() {
        let speed = Vector2::new(10.0, 0.0);
        let mut a = Ball::new(Vector2::new(0.0, 0.0), Some(speed), None, None, None, None);
        let mut b = Ball::new(Vector2::new(15.0, 0.0), Some(-speed), None, None, None, None);
        a.ball_collision(&mut b);
        assert!(a.velocity.x < 0.0);
        assert!(b.velocity.x > 0.0);
        assert_relative_eq!(b.position.x - a.position.x, 20.0);
    }
}
