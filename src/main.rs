//! A Plinko board animated with `vecsaurus` vectors.
//!
//! Balls fall through staggered pegs under gravity and collect in boxes at
//! the bottom. Positions, velocities, and wall geometry are all `Vector2`.
//!
//! Build with `cargo run --features demo --bin plinko`. Set `RUST_LOG` to
//! change log verbosity and `PLINKO_FONT` to point at a different TTF file.

mod board;
mod items;

use crate::board::Board;
use crate::items::{Ball, Wall};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;
use vecsaurus::Vector2;

/// Window title displayed in the title bar
const TITLE: &str = "Plinko in Rust";
/// Width of the simulation window in pixels
const WINDOW_WIDTH: u32 = 520;
/// Height of the simulation window in pixels
const WINDOW_HEIGHT: u32 = 800;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Number of collision resolution iterations per frame
const COLLISION_LOOPS: u32 = 20;
/// Font used for the box tallies unless `PLINKO_FONT` overrides it
const FONT_PATH: &str = "/usr/share/fonts/truetype/futuristic-font/Futuristic-MRer.ttf";
/// Width of each collection box at the bottom in pixels
const BOXSIZE: u32 = 40;
/// Seconds between two spawned balls
const SPAWN_PERIOD: f64 = 1.2;
/// Largest horizontal launch speed of a new ball
const SPAWN_SPEED: f64 = 200.0;

/// Updates and renders the simulation for one frame.
fn main_loop(
    board: &mut Board,
    canvas: &mut Canvas<Window>,
    font: &Font,
    dt: f64,
) -> Result<(), Box<dyn Error>> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    board.draw_frame(canvas, dt);
    board.tally();
    board.draw_boxes(canvas, font)?;
    board.cleanup();
    // Run multiple collision passes per frame for stability
    for _ in 0..COLLISION_LOOPS {
        board.handle_collisions();
    }
    Ok(())
}

/// Sets up the border walls, collection box dividers, and staggered pegs.
fn set_up(board: &mut Board) {
    let width = WINDOW_WIDTH as f64;
    let height = WINDOW_HEIGHT as f64;
    let left = (Vector2::new(0.0, 0.0), Vector2::new(0.0, height));
    let right = (Vector2::new(width, 0.0), Vector2::new(width, height));
    board.add_wall(Wall::new(left.0, left.1, Some(20), None, None, None));
    board.add_wall(Wall::new(right.0, right.1, Some(20), None, None, None));

    let num_areas = WINDOW_WIDTH / BOXSIZE;
    let num_plinkies = WINDOW_HEIGHT / 100 - 2;

    for i in 1..num_areas {
        board.add_box();
        let x = (i * BOXSIZE) as f64;
        let (top, bottom) = (Vector2::new(x, height - 60.0), Vector2::new(x, height + 40.0));
        board.add_wall(Wall::new(top, bottom, None, None, None, None));

        // alternate rows between even and odd columns
        if i % 2 == 0 && i != num_areas - 1 {
            for j in (0..num_plinkies).step_by(2) {
                add_plinky(board, Vector2::new(x, (j * 100) as f64), Color::BLUE);
            }
        } else if i != 1 && i != num_areas - 1 {
            for j in (1..num_plinkies).step_by(2) {
                add_plinky(board, Vector2::new(x, (j * 100) as f64), Color::CYAN);
            }
        }
    }
    board.add_box();
}

/// Adds a peg as two diagonal walls forming a V below `anchor`.
fn add_plinky(board: &mut Board, anchor: Vector2, color: Color) {
    const OFFSET: f64 = 160.0;
    const LENGTH: f64 = 20.0;
    let top = anchor.add_y(OFFSET);
    let right = Vector2::new(LENGTH, LENGTH);
    let left = right.multiply_x(-1.0);
    board.add_wall(Wall::new(top, top + right, None, Some(color), None, None));
    board.add_wall(Wall::new(top, top + left, None, Some(color), None, None));
}

/// Spawns a ball at a random horizontal position near the top, launched
/// sideways at a random speed.
fn spawn_ball(board: &mut Board) {
    let mut position = Vector2::new(0.0, 60.0);
    position.randomize_x(20.0, WINDOW_WIDTH as f64 - 20.0);
    let velocity = Vector2::random_unit().multiply_y(0.0).multiply(SPAWN_SPEED);
    trace!(x = position.x, vx = velocity.x, "spawning ball");
    board.add_ball(Ball::new(position, Some(velocity), None, Some(Color::RED), None, None));
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init()?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()?;
    let font_path = std::env::var("PLINKO_FONT").unwrap_or_else(|_| FONT_PATH.to_string());
    let font = ttf_context.load_font(&font_path, 24)?;

    let mut canvas = window.into_canvas().build()?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut board = Board::new(BOXSIZE, WINDOW_HEIGHT as f64);
    set_up(&mut board);
    info!(font = %font_path, "board ready");

    let mut last_frame_time = Instant::now();
    let mut time = 0.0;
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f64();
        last_frame_time = now;
        time += dt;

        if time > SPAWN_PERIOD {
            time = 0.0;
            spawn_ball(&mut board);
        }

        main_loop(&mut board, &mut canvas, &font, dt)?;

        canvas.present();
        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    info!(balls = board.ball_count(), boxes = ?board.boxes(), "shutting down");
    Ok(())
}
