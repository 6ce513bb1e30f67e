//! Transition effects
//!
//! Effects are data, not delays: each transition builds an [`Fx`], a short
//! sequence of [`FxFrame`]s, and the host plays them back at its own pace
//! (sleep, timer wheel, async executor). The simulation never blocks.
//!
//! All three effects are concentric-ring pulses: a filled circle or rect at
//! the outer radius, then rings walking back in with alternating colors.

use crate::display::{Color, Palette, PixelDisplay, draw_level};
use crate::sim::{Cell, GridMap};

/// One drawing instruction within an effect frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Repaint the whole level
    Board,
    /// Single pixel
    Pixel { x: i32, y: i32, color: Color },
    /// Circle outline
    Circle { x: i32, y: i32, r: i32, color: Color },
    /// Filled circle
    FillCircle { x: i32, y: i32, r: i32, color: Color },
    /// Rectangle outline, top-left anchored
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
}

/// One effect frame: ops drawn in order, then shown for `hold_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxFrame {
    pub ops: Vec<DrawOp>,
    pub hold_ms: u64,
}

/// A complete effect, played front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fx {
    frames: Vec<FxFrame>,
}

impl Fx {
    pub fn frames(&self) -> &[FxFrame] {
        &self.frames
    }

    /// Celebratory burst at the exit (also used for warps and the secret
    /// level unlocking): six pulses of expanding rings, the two colors
    /// trading places after each pulse.
    pub fn exit_burst(x: i32, y: i32, palette: &Palette) -> Self {
        let mut inner = palette.cell(Cell::Exit);
        let mut outer = palette.ball();
        let mut frames = Vec::new();

        for _ in 0..6 {
            for i in (0..22).step_by(2) {
                let mut ops = vec![DrawOp::FillCircle {
                    x,
                    y,
                    r: i,
                    color: outer,
                }];
                ops.extend(rings(x, y, i, outer, inner));
                frames.push(FxFrame { ops, hold_ms: 20 });
            }
            std::mem::swap(&mut inner, &mut outer);
        }

        Self { frames }
    }

    /// Angular pulse at a sprung trap: six pulses of expanding centered
    /// squares, colors trading places after each pulse.
    pub fn trap_pulse(x: i32, y: i32, palette: &Palette) -> Self {
        let mut inner = palette.cell(Cell::Trap);
        let mut outer = palette.white;
        let mut frames = Vec::new();

        for _ in 0..6 {
            for i in (1..8).step_by(2) {
                let mut ops = vec![centered_rect(x, y, i, outer)];
                ops.extend((0..i).rev().map(|k| {
                    centered_rect(x, y, k, if k % 2 == i % 2 { outer } else { inner })
                }));
                frames.push(FxFrame { ops, hold_ms: 20 });
            }
            std::mem::swap(&mut inner, &mut outer);
        }

        Self { frames }
    }

    /// Intra-level teleport: a ring burst grows at the origin, the board
    /// repaints, then a burst shrinks into the destination, ending with the
    /// ball drawn there.
    pub fn teleport(from_x: i32, from_y: i32, to_x: i32, to_y: i32, palette: &Palette) -> Self {
        let inner = palette.cell(Cell::Pointer(0));
        let outer = palette.ball();
        let mut frames = Vec::new();

        for i in (0..=10).step_by(2) {
            let mut ops = vec![DrawOp::FillCircle {
                x: from_x,
                y: from_y,
                r: i,
                color: outer,
            }];
            ops.extend(rings(from_x, from_y, i, outer, inner));
            frames.push(FxFrame { ops, hold_ms: 100 });
        }

        frames.push(FxFrame {
            ops: vec![DrawOp::Board],
            hold_ms: 100,
        });

        // Shrinking side swaps the roles of the two colors; each frame sits
        // on a fresh board so the previous ring vanishes.
        for i in (2..=10).rev().step_by(2) {
            let mut ops = vec![
                DrawOp::Board,
                DrawOp::FillCircle {
                    x: to_x,
                    y: to_y,
                    r: i,
                    color: inner,
                },
            ];
            ops.extend(rings(to_x, to_y, i, inner, outer));
            frames.push(FxFrame { ops, hold_ms: 100 });
        }

        frames.push(FxFrame {
            ops: vec![
                DrawOp::Board,
                DrawOp::Pixel {
                    x: to_x,
                    y: to_y,
                    color: palette.ball(),
                },
            ],
            hold_ms: 0,
        });

        Self { frames }
    }
}

impl IntoIterator for Fx {
    type Item = FxFrame;
    type IntoIter = std::vec::IntoIter<FxFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

/// Rings from radius `i - 1` down to 0, colored `a` where the radius parity
/// matches `i` and `b` otherwise.
fn rings(x: i32, y: i32, i: i32, a: Color, b: Color) -> impl Iterator<Item = DrawOp> {
    (0..i).rev().map(move |k| DrawOp::Circle {
        x,
        y,
        r: k,
        color: if k % 2 == i % 2 { a } else { b },
    })
}

fn centered_rect(x: i32, y: i32, side: i32, color: Color) -> DrawOp {
    DrawOp::Rect {
        x: x - side / 2,
        y: y - side / 2,
        w: side,
        h: side,
        color,
    }
}

/// Draw one frame's ops onto a display and present it. The caller owns the
/// `hold_ms` pause.
pub fn render_frame<D: PixelDisplay + ?Sized>(
    display: &mut D,
    grid: &GridMap,
    palette: &Palette,
    frame: &FxFrame,
) {
    for op in &frame.ops {
        match *op {
            DrawOp::Board => draw_level(display, grid, palette),
            DrawOp::Pixel { x, y, color } => display.set_pixel(x, y, color),
            DrawOp::Circle { x, y, r, color } => display.draw_circle(x, y, r, color),
            DrawOp::FillCircle { x, y, r, color } => display.fill_circle(x, y, r, color),
            DrawOp::Rect { x, y, w, h, color } => display.draw_rect(x, y, w, h, color),
        }
    }
    display.present();
}
