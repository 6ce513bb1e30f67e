//! Display abstraction
//!
//! The board draws through [`PixelDisplay`], one pixel per grid cell, so the
//! same game runs on an LED matrix, a terminal, or a test double. Hosts
//! implement the five required methods; the shape primitives used by the
//! transition effects are provided as default methods on top of
//! [`PixelDisplay::set_pixel`].

use crate::sim::{Cell, GridMap};

/// An RGB color. Values are raw channel intensities, tuned for LED matrix
/// brightness rather than sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The fixed color scheme for cells, the ball and effects.
#[derive(Debug, Clone)]
pub struct Palette {
    pub orange: Color,
    pub green: Color,
    pub white: Color,
    pub red: Color,
    pub purple: Color,
    pub blue: Color,
    pub off: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            orange: Color::new(90, 45, 0),
            green: Color::new(0, 80, 0),
            white: Color::new(60, 60, 60),
            red: Color::new(80, 0, 0),
            purple: Color::new(90, 0, 90),
            blue: Color::new(0, 0, 80),
            off: Color::new(0, 0, 0),
        }
    }
}

impl Palette {
    /// Color a cell renders as.
    ///
    /// A warp to level 0 is the secret-hub warp and draws purple; every
    /// other warp draws green.
    pub fn cell(&self, cell: Cell) -> Color {
        match cell {
            Cell::Empty | Cell::Unknown(_) => self.off,
            Cell::Wall => self.white,
            Cell::Trap => self.red,
            Cell::Exit => self.green,
            Cell::WallDecorA => self.purple,
            Cell::WallDecorB => self.orange,
            Cell::Warp(0) => self.purple,
            Cell::Warp(_) => self.green,
            Cell::Pointer(_) => self.orange,
        }
    }

    pub fn ball(&self) -> Color {
        self.blue
    }
}

/// A mutable pixel surface. Coordinates are cell coordinates; anything the
/// host receives outside its bounds must be ignored, which lets the effect
/// shapes spill past the edges without clipping on the caller's side.
pub trait PixelDisplay {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
    fn clear(&mut self);
    /// Flush buffered pixels to the device. No-op for unbuffered hosts.
    fn present(&mut self);

    /// Midpoint circle outline. Radius 0 is a single pixel, negative radii
    /// draw nothing.
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        if radius == 0 {
            self.set_pixel(cx, cy, color);
            return;
        }
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.set_pixel(cx + x, cy + y, color);
            self.set_pixel(cx + y, cy + x, color);
            self.set_pixel(cx - y, cy + x, color);
            self.set_pixel(cx - x, cy + y, color);
            self.set_pixel(cx - x, cy - y, color);
            self.set_pixel(cx - y, cy - x, color);
            self.set_pixel(cx + y, cy - x, color);
            self.set_pixel(cx + x, cy - y, color);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Filled circle as horizontal spans.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        for dy in -radius..=radius {
            let half = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
            for dx in -half..=half {
                self.set_pixel(cx + dx, cy + dy, color);
            }
        }
    }

    /// Rectangle outline with the given top-left corner. Zero or negative
    /// extents draw nothing.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        for dx in 0..w {
            self.set_pixel(x + dx, y, color);
            self.set_pixel(x + dx, y + h - 1, color);
        }
        for dy in 0..h {
            self.set_pixel(x, y + dy, color);
            self.set_pixel(x + w - 1, y + dy, color);
        }
    }
}

/// Paint every cell of a level, including empties; effects draw over empty
/// cells, so a sparse repaint would leave artifacts behind. Does not
/// present; the caller batches.
pub fn draw_level<D: PixelDisplay + ?Sized>(display: &mut D, grid: &GridMap, palette: &Palette) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            display.set_pixel(x, y, palette.cell(grid.cell_at(x, y)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory surface recording the last color written per pixel.
    struct Canvas {
        pixels: HashMap<(i32, i32), Color>,
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: HashMap::new(),
            }
        }
    }

    impl PixelDisplay for Canvas {
        fn width(&self) -> i32 {
            17
        }
        fn height(&self) -> i32 {
            13
        }
        fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
            self.pixels.insert((x, y), color);
        }
        fn clear(&mut self) {
            self.pixels.clear();
        }
        fn present(&mut self) {}
    }

    #[test]
    fn test_cell_colors() {
        let p = Palette::default();
        assert_eq!(p.cell(Cell::Empty), p.off);
        assert_eq!(p.cell(Cell::Wall), p.white);
        assert_eq!(p.cell(Cell::Trap), p.red);
        assert_eq!(p.cell(Cell::Exit), p.green);
        assert_eq!(p.cell(Cell::Pointer(12)), p.orange);
        assert_eq!(p.cell(Cell::Unknown(9)), p.off);
    }

    #[test]
    fn test_secret_hub_warp_draws_purple() {
        let p = Palette::default();
        assert_eq!(p.cell(Cell::Warp(0)), p.purple);
        assert_eq!(p.cell(Cell::Warp(1)), p.green);
        assert_eq!(p.cell(Cell::Warp(11)), p.green);
    }

    #[test]
    fn test_circle_radius_zero_is_a_point() {
        let mut c = Canvas::new();
        c.draw_circle(3, 3, 0, Palette::default().white);
        assert_eq!(c.pixels.len(), 1);
        assert!(c.pixels.contains_key(&(3, 3)));
    }

    #[test]
    fn test_circle_negative_radius_draws_nothing() {
        let mut c = Canvas::new();
        c.draw_circle(3, 3, -2, Palette::default().white);
        assert!(c.pixels.is_empty());
    }

    #[test]
    fn test_circle_outline_symmetry() {
        let mut c = Canvas::new();
        c.draw_circle(0, 0, 3, Palette::default().white);
        for &(x, y) in c.pixels.keys() {
            assert!(c.pixels.contains_key(&(-x, y)));
            assert!(c.pixels.contains_key(&(x, -y)));
        }
        // Cardinal extremes land exactly on the radius.
        assert!(c.pixels.contains_key(&(3, 0)));
        assert!(c.pixels.contains_key(&(0, 3)));
    }

    #[test]
    fn test_fill_circle_covers_outline() {
        let mut outline = Canvas::new();
        outline.draw_circle(5, 5, 2, Palette::default().red);
        let mut filled = Canvas::new();
        filled.fill_circle(5, 5, 2, Palette::default().red);
        for key in outline.pixels.keys() {
            assert!(filled.pixels.contains_key(key), "missing {key:?}");
        }
        assert!(filled.pixels.contains_key(&(5, 5)));
    }

    #[test]
    fn test_rect_outline() {
        let mut c = Canvas::new();
        c.draw_rect(2, 2, 3, 3, Palette::default().white);
        // Perimeter of a 3x3 is 8 pixels; the center stays untouched.
        assert_eq!(c.pixels.len(), 8);
        assert!(!c.pixels.contains_key(&(3, 3)));
        c.draw_rect(0, 0, 0, 5, Palette::default().white);
        assert_eq!(c.pixels.len(), 8);
    }

    #[test]
    fn test_draw_level_paints_every_cell() {
        let grid = crate::sim::grid::GridMap::from_cells(4, 3, (1.0, 1.0), &[(2, 1, 1)]);
        let mut c = Canvas::new();
        let p = Palette::default();
        draw_level(&mut c, &grid, &p);
        assert_eq!(c.pixels.len(), 12);
        assert_eq!(c.pixels[&(2, 1)], p.white);
        assert_eq!(c.pixels[&(0, 0)], p.off);
    }
}
