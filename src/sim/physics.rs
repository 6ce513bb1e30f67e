//! Ball physics
//!
//! Discretized-continuous motion on the cell grid: velocity responds to the
//! tilt reading, position advances with axis-separated collision resolution
//! so the ball can slide along walls but never cut a corner it could not
//! reach by either straight path.

use glam::Vec2;

use super::grid::GridMap;
use crate::consts::{BALL_RADIUS, DEAD_ZONE, EPSILON, VELOCITY_DECAY};

/// The rolling ball. Owned by the board and mutated once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position in cell units
    pub pos: Vec2,
    /// Velocity in cells per tick, each axis bounded to [-1, 1]
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Integer cell currently containing the ball center.
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x as i32, self.pos.y as i32)
    }
}

/// Whether the ball may occupy the given integer cell.
fn open(grid: &GridMap, x: i32, y: i32) -> bool {
    grid.cell_at(x, y).passable()
}

/// Advance the ball by one tick.
///
/// `accel` carries the raw calibrated readings for the two board axes; the
/// sign is flipped here so tilting the frame one way rolls the ball the
/// other way.
pub fn integrate(ball: &mut Ball, grid: &GridMap, accel: Vec2, dt: f32) {
    update_velocity(ball, grid, accel, dt);
    update_position(ball, grid);
}

/// One axis of the velocity update: friction inside the dead zone,
/// otherwise accumulate acceleration unless the ball is already pressed
/// against the grid edge or a wall in the direction of travel (zeroing the
/// axis instead stops it jittering against the obstacle).
fn axis_velocity(
    v: f32,
    a: f32,
    pos: f32,
    radius: f32,
    extent: f32,
    dt: f32,
    open_at: impl Fn(f32) -> bool,
) -> f32 {
    let v = if a.abs() < DEAD_ZONE {
        v * VELOCITY_DECAY
    } else if a >= 0.0 {
        if pos + radius >= extent || !open_at(pos + radius + EPSILON) {
            0.0
        } else {
            v + a * dt
        }
    } else if pos - radius - EPSILON <= 0.0 || !open_at(pos - radius - EPSILON) {
        0.0
    } else {
        v + a * dt
    };
    v.clamp(-1.0, 1.0)
}

fn update_velocity(ball: &mut Ball, grid: &GridMap, accel: Vec2, dt: f32) {
    let (cx, cy) = ball.cell();
    let r = ball.radius;

    ball.vel.x = axis_velocity(
        ball.vel.x,
        -accel.x,
        ball.pos.x,
        r,
        grid.width() as f32,
        dt,
        |px| open(grid, px as i32, cy),
    );
    ball.vel.y = axis_velocity(
        ball.vel.y,
        -accel.y,
        ball.pos.y,
        r,
        grid.height() as f32,
        dt,
        |py| open(grid, cx, py as i32),
    );
}

fn update_position(ball: &mut Ball, grid: &GridMap) {
    let r = ball.radius;
    let (cx, cy) = ball.cell();

    // The ball, including its radius, may never leave the grid.
    let potential = ball.pos + ball.vel;
    let px = potential.x.clamp(r, grid.width() as f32 - r);
    let py = potential.y.clamp(r, grid.height() as f32 - r);
    let (tx, ty) = (px as i32, py as i32);

    if tx == cx && ty == cy {
        // Sub-cell motion is always safe.
        ball.pos = Vec2::new(px, py);
        return;
    }

    if tx != cx && ty != cy {
        // Crossing on both axes. The diagonal target must itself be open,
        // and each axis only moves if its straight intermediate is open;
        // a blocked diagonal rejects the whole move (corner blocking).
        let row_open = open(grid, tx, cy);
        let col_open = open(grid, cx, ty);
        if open(grid, tx, ty) {
            if row_open && col_open {
                ball.pos = Vec2::new(px, py);
            } else if col_open {
                ball.pos.y = py;
            } else if row_open {
                ball.pos.x = px;
            }
        }
    } else if ty != cy {
        // Only y crosses; rest against the blocking cell if it is closed.
        if open(grid, cx, ty) {
            ball.pos.y = py;
        } else if py > ball.pos.y {
            ball.pos.y = ty as f32 - r;
        } else {
            ball.pos.y = (ty + 1) as f32 + r;
        }
        ball.pos.x = px;
    } else {
        // Only x crosses.
        if open(grid, tx, cy) {
            ball.pos.x = px;
        } else if px > ball.pos.x {
            ball.pos.x = tx as f32 - r;
        } else {
            ball.pos.x = (tx + 1) as f32 + r;
        }
        ball.pos.y = py;
    }
}
