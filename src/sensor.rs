//! Tilt sensing
//!
//! The board reads tilt through [`TiltSensor`], one normalized reading per
//! axis. On hardware this wraps an accelerometer; tests script it.
//! [`Orientation`] is a coarse three-axis snapshot for hosts that want to
//! notice the frame being picked up or turned without reacting to sensor
//! noise.

use crate::consts::DEAD_ZONE;

/// Accelerometer axis. Only X and Y drive the ball; Z feeds orientation
/// snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A source of normalized tilt readings in `[-1, 1]` per axis, where 1 is
/// the device standing fully on that axis's positive edge.
pub trait TiltSensor {
    fn read(&mut self, axis: Axis) -> f32;
}

/// Coarse orientation: each axis quantized to leaning negative, level, or
/// leaning positive. Readings within the tilt dead zone count as level, so
/// comparing snapshots ignores sensor noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    x: i8,
    y: i8,
    z: i8,
}

impl Orientation {
    /// Snapshot the current orientation.
    pub fn capture<S: TiltSensor + ?Sized>(sensor: &mut S) -> Self {
        Self {
            x: bucket(sensor.read(Axis::X)),
            y: bucket(sensor.read(Axis::Y)),
            z: bucket(sensor.read(Axis::Z)),
        }
    }

    /// Whether the device has moved out of this snapshot's orientation.
    pub fn changed<S: TiltSensor + ?Sized>(&self, sensor: &mut S) -> bool {
        Self::capture(sensor) != *self
    }
}

fn bucket(reading: f32) -> i8 {
    if reading > DEAD_ZONE {
        1
    } else if reading < -DEAD_ZONE {
        -1
    } else {
        0
    }
}
