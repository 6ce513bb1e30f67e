//! Deterministic simulation module
//!
//! All gameplay logic lives here. The simulation is single-threaded and
//! tick-driven:
//! - Fixed timestep only (one tick per [`crate::consts::PERIOD_MS`])
//! - No ambient state; the board owns everything it mutates
//! - Rendering and sensing happen through the injected traits only

pub mod board;
pub mod cell;
pub mod grid;
pub mod physics;

pub use board::{Board, Transition};
pub use cell::Cell;
pub use grid::{GridMap, LevelData, LevelError, LevelSet};
pub use physics::{Ball, integrate};
