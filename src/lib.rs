//! Tilt Maze - a tilt-controlled ball-maze engine for LED matrix frames
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sparse levels, ball physics, board state machine)
//! - `display`: Pixel display interface and cell palette
//! - `sensor`: Tilt sensor interface and orientation watcher
//! - `fx`: Transition effects as drawable frame sequences
//! - `levels`: Built-in level set
//!
//! The crate is a library: a host loop owns the clock and binds the sensor
//! and display traits, then calls [`sim::Board::tick`] as fast as it likes.
//! The board gates itself to the fixed simulation period.

pub mod display;
pub mod fx;
pub mod levels;
pub mod sensor;
pub mod sim;

pub use display::{Color, Palette, PixelDisplay};
pub use fx::{DrawOp, Fx, FxFrame};
pub use levels::builtin_levels;
pub use sensor::{Axis, Orientation, TiltSensor};
pub use sim::{Ball, Board, Cell, GridMap, LevelData, LevelError, LevelSet, Transition};

/// Game configuration constants
pub mod consts {
    /// Simulation period in milliseconds (one tick every 5 ms)
    pub const PERIOD_MS: u64 = 5;
    /// Fixed timestep in seconds, derived from the tick period
    pub const TICK_DT: f32 = PERIOD_MS as f32 / 1000.0;

    /// LED frame dimensions in cells
    pub const GRID_WIDTH: u8 = 17;
    pub const GRID_HEIGHT: u8 = 13;

    /// Ball radius in cell units (strictly less than half a cell)
    pub const BALL_RADIUS: f32 = 0.1;

    /// Tilt readings below this magnitude only apply friction
    pub const DEAD_ZONE: f32 = 0.08;
    /// Per-tick velocity decay inside the dead zone
    pub const VELOCITY_DECAY: f32 = 0.75;

    /// Probe offset used when testing contact with an obstacle
    pub const EPSILON: f32 = 1e-6;

    /// First cell code used for inter-level warps
    pub const WARP_BASE: u8 = 20;
    /// First cell code used for intra-level teleport pointers
    pub const POINTER_BASE: u8 = 35;

    /// Traps to hit on level 1 before the secret level opens
    pub const SECRET_TRAP_COUNT: u8 = 10;
}
