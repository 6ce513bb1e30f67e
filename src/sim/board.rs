//! Board state machine
//!
//! Drives the game: gates ticks to the fixed period, integrates the ball,
//! watches for cell-boundary crossings and applies whatever transition the
//! destination cell calls for. The board owns every piece of mutable state
//! (ball, active level, trap counter, tick clock) plus the injected sensor
//! and display; nothing here is global.
//!
//! Transition effects are queued as [`Fx`] data rather than played inline;
//! a host loop drains them between ticks:
//!
//! ```ignore
//! if board.tick(now_ms) {
//!     if let Some(fx) = board.take_fx() {
//!         for frame in fx {
//!             board.render_frame(&frame);
//!             host_sleep_ms(frame.hold_ms);
//!         }
//!     }
//! }
//! ```

use glam::Vec2;

use super::cell::Cell;
use super::grid::{GridMap, LevelSet};
use super::physics::{self, Ball};
use crate::consts::{PERIOD_MS, SECRET_TRAP_COUNT, TICK_DT};
use crate::display::{self, Palette, PixelDisplay};
use crate::fx::{self, Fx, FxFrame};
use crate::sensor::{Axis, TiltSensor};

/// Level the game starts on (and returns to after a power cycle).
/// Level 0 is the secret level, reachable only through the trap easter egg.
const START_LEVEL: u8 = 1;

/// A cell-boundary crossing the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Intra-level teleport to the given cell
    Teleport { col: u8, row: u8 },
    /// Inter-level warp
    Warp { level: u8 },
    /// Normal exit to the next level
    Exit,
    /// Tenth trap on level 1: the secret level opens
    SecretTrap,
    /// Any other trap: back to the level start
    TrapBounce,
}

/// The game. Generic over the host's sensor and display bindings.
pub struct Board<S, D> {
    levels: LevelSet,
    sensor: S,
    display: D,
    palette: Palette,
    ball: Ball,
    level_index: u8,
    trap_count: u8,
    last_tick_ms: u64,
    pending_fx: Option<Fx>,
}

impl<S: TiltSensor, D: PixelDisplay> Board<S, D> {
    /// Build a board over the injected collaborators and draw the first
    /// level.
    pub fn new(levels: LevelSet, sensor: S, display: D, now_ms: u64) -> Self {
        let ball = Ball::new(levels.level(START_LEVEL).start());
        let mut board = Self {
            levels,
            sensor,
            display,
            palette: Palette::default(),
            ball,
            level_index: START_LEVEL,
            trap_count: 0,
            last_tick_ms: now_ms,
            pending_fx: None,
        };
        board.reset(now_ms);
        board
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn level_index(&self) -> u8 {
        self.level_index
    }

    /// The active level.
    pub fn level(&self) -> &GridMap {
        self.levels.level(self.level_index)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Take the queued transition effect, if any, for the host to render.
    pub fn take_fx(&mut self) -> Option<Fx> {
        self.pending_fx.take()
    }

    /// Render one effect frame on the board's own display.
    pub fn render_frame(&mut self, frame: &FxFrame) {
        let grid = self.levels.level(self.level_index);
        fx::render_frame(&mut self.display, grid, &self.palette, frame);
    }

    /// Jump straight to a level. Returns false (and does nothing) if the
    /// index is out of range.
    pub fn set_level(&mut self, index: u8, now_ms: u64) -> bool {
        if index >= self.levels.count() {
            return false;
        }
        if index != self.level_index {
            self.trap_count = 0;
        }
        self.level_index = index;
        self.reset(now_ms);
        true
    }

    /// Repaint the level, respawn the ball at its start with zero velocity
    /// and restart the tick clock. Shared by initial setup and every level
    /// transition.
    pub fn reset(&mut self, now_ms: u64) {
        self.redraw();
        let start = self.level().start();
        self.ball = Ball::new(start);
        self.draw_ball();
        self.last_tick_ms = now_ms;
        log::debug!("reset on level {}", self.level_index);
    }

    /// Advance the simulation if the tick period has elapsed.
    ///
    /// Returns true when the ball crossed into a new cell (the visible
    /// state changed), false otherwise.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if now_ms < self.last_tick_ms + PERIOD_MS {
            return false;
        }

        let from = self.ball.cell();

        let accel = Vec2::new(self.sensor.read(Axis::X), self.sensor.read(Axis::Y));
        let grid = self.levels.level(self.level_index);
        physics::integrate(&mut self.ball, grid, accel, TICK_DT);

        let to = self.ball.cell();
        self.last_tick_ms = now_ms;
        if to == from {
            return false;
        }

        // Repaint the departed cell before reacting to the new one.
        let left = self.palette.cell(grid.cell_at(from.0, from.1));
        let destination = grid.cell_at(to.0, to.1);
        self.display.set_pixel(from.0, from.1, left);
        self.display.present();

        match self.classify(destination) {
            Some(transition) => self.apply(transition, now_ms),
            None => self.draw_ball(),
        }

        true
    }

    /// Map a destination cell to the transition it triggers, if any.
    fn classify(&self, cell: Cell) -> Option<Transition> {
        match cell {
            Cell::Pointer(dest) => {
                let width = self.level().width();
                Some(Transition::Teleport {
                    col: dest % width,
                    row: dest / width,
                })
            }
            Cell::Warp(level) => Some(Transition::Warp { level }),
            Cell::Exit => Some(Transition::Exit),
            Cell::Trap => {
                if self.level_index == 1 && self.trap_count + 1 >= SECRET_TRAP_COUNT {
                    Some(Transition::SecretTrap)
                } else {
                    Some(Transition::TrapBounce)
                }
            }
            _ => None,
        }
    }

    /// Apply a transition: queue its effect, switch state and repaint.
    fn apply(&mut self, transition: Transition, now_ms: u64) {
        log::debug!(
            "transition {:?} on level {}",
            transition,
            self.level_index
        );
        let (bx, by) = self.ball.cell();
        match transition {
            Transition::Teleport { col, row } => {
                self.pending_fx =
                    Some(Fx::teleport(bx, by, col as i32, row as i32, &self.palette));
                self.ball.pos = Vec2::new(col as f32, row as f32);
                self.ball.vel = Vec2::ZERO;
                self.draw_ball();
            }
            Transition::Warp { level } => {
                self.pending_fx = Some(Fx::exit_burst(bx, by, &self.palette));
                self.change_level(level, now_ms);
            }
            Transition::Exit => {
                self.pending_fx = Some(Fx::exit_burst(bx, by, &self.palette));
                // Wrapping skips level 0; only the trap path goes there.
                let next = ((self.level_index + 1) % self.levels.count()).max(1);
                self.change_level(next, now_ms);
            }
            Transition::SecretTrap => {
                self.trap_count = 0;
                self.pending_fx = Some(Fx::exit_burst(bx, by, &self.palette));
                self.change_level(0, now_ms);
            }
            Transition::TrapBounce => {
                if self.level_index == 1 {
                    self.trap_count += 1;
                }
                self.pending_fx = Some(Fx::trap_pulse(bx, by, &self.palette));
                self.reset(now_ms);
            }
        }
    }

    /// Switch the active level. Leaving a level clears any partial trap
    /// progress, so a warp out of level 1 cannot carry it.
    fn change_level(&mut self, index: u8, now_ms: u64) {
        if index != self.level_index {
            self.trap_count = 0;
        }
        log::info!("level {} -> {}", self.level_index, index);
        self.level_index = index;
        self.reset(now_ms);
    }

    /// Repaint every cell of the active level.
    fn redraw(&mut self) {
        self.display.clear();
        let grid = self.levels.level(self.level_index);
        display::draw_level(&mut self.display, grid, &self.palette);
        self.display.present();
    }

    fn draw_ball(&mut self) {
        let (x, y) = self.ball.cell();
        self.display.set_pixel(x, y, self.palette.ball());
        self.display.present();
    }
}
