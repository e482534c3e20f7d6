use crate::items::{Ball, GRAVITY, Wall};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::error::Error;
use tracing::debug;

/// Everything on the Plinko board, plus the tally of balls caught in each
/// collection box along the floor.
pub struct Board {
    walls: Vec<Wall>,
    balls: Vec<Ball>,
    boxes: Vec<u32>,
    box_size: u32,
    floor: f64,
}

impl Board {
    pub fn new(box_size: u32, floor: f64) -> Board {
        Board {
            walls: Vec::new(),
            balls: Vec::new(),
            boxes: Vec::new(),
            box_size,
            floor,
        }
    }

    pub fn add_box(&mut self) {
        self.boxes.push(0);
    }

    pub fn add_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn draw_frame(&mut self, canvas: &mut Canvas<Window>, dt: f64) {
        for wall in &self.walls {
            wall.draw(canvas);
        }
        for ball in &mut self.balls {
            ball.move_ball(dt);
            ball.draw(canvas);
            ball.apply_force(GRAVITY, dt);
        }
    }

    /// Counts balls that dropped below the floor into their box.
    pub fn tally(&mut self) {
        for ball in &self.balls {
            if ball.position.y <= self.floor {
                continue;
            }
            let slot = (ball.position.x / self.box_size as f64).floor();
            if slot >= 0.0 && (slot as usize) < self.boxes.len() {
                self.boxes[slot as usize] += 1;
            }
        }
    }

    pub fn draw_boxes(
        &self,
        canvas: &mut Canvas<Window>,
        font: &Font,
    ) -> Result<(), Box<dyn Error>> {
        let texture_creator = canvas.texture_creator();
        for (i, count) in self.boxes.iter().enumerate() {
            let text_surface = font.render(&count.to_string()).blended(Color::RGB(255, 255, 255))?;
            let text_texture = texture_creator.create_texture_from_surface(&text_surface)?;
            let query = text_texture.query();
            let x = self.box_size as i32 * i as i32 + self.box_size as i32 / 3;
            let y = self.floor as i32 - 60;
            let target = Rect::new(x, y, query.width, query.height);
            canvas.copy_ex(&text_texture, None, Some(target), -90.0, None, false, false)?;
        }
        Ok(())
    }

    /// Drops balls that left the board or whose state blew up.
    pub fn cleanup(&mut self) {
        let before = self.balls.len();
        let floor = self.floor;
        self.balls.retain(|ball| {
            let p = ball.position;
            p.x.is_finite() && p.y.is_finite() && p.y <= floor
        });
        let removed = before - self.balls.len();
        if removed > 0 {
            debug!(removed, remaining = self.balls.len(), "removed balls from board");
        }
    }

    pub fn handle_collisions(&mut self) {
        for i in 0..self.balls.len() {
            for wall in &self.walls {
                self.balls[i].wall_collision(wall);
            }
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let ball = &mut head[i];
            for other in tail {
                ball.ball_collision(other);
            }
        }
    }

    pub fn boxes(&self) -> &[u32] {
        &self.boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecsaurus::Vector2;

    #[test]
    fn test_tally_and_cleanup() {
        let mut board = Board::new(40, 800.0);
        board.add_box();
        board.add_box();
        board.add_ball(Ball::new(Vector2::new(50.0, 810.0), None, None, None, None, None));
        board.add_ball(Ball::new(Vector2::new(10.0, 100.0), None, None, None, None, None));
        board.tally();
        assert_eq!(board.boxes(), &[0, 1]);
        board.cleanup();
        assert_eq!(board.ball_count(), 1);
    }

    #[test]
    fn test_collisions_keep_balls_apart() {
        let mut board = Board::new(40, 800.0);
        let left = Vector2::new(100.0, 100.0);
        let right = Vector2::new(110.0, 100.0);
        let push = Vector2::new(5.0, 0.0);
        board.add_ball(Ball::new(left, Some(push), None, None, None, None));
        board.add_ball(Ball::new(right, Some(-push), None, None, None, None));
        board.handle_collisions();
        let gap = Vector2::from_points(board.balls[0].position, board.balls[1].position);
        assert!(gap.length() >= 20.0 - 1e-9);
    }
}
