//! Character canvas with point and line drawing.

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Single foreground color used for all mesh drawing.
const FOREGROUND: Color = Color::White;

/// Cell written for projected points and wireframe edges.
const MARK: char = '#';

/// A fixed-size cell grid the render loop draws into, presented once per
/// frame. Coordinates outside the grid are silently clipped cell by cell,
/// so projected geometry may extend past the canvas without faulting.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = ' ';
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![' '; width * height];
    }

    /// Plot a single cell, ignoring out-of-bounds coordinates.
    pub fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = MARK;
    }

    /// Draw a line segment with integer Bresenham stepping.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        // Trivial reject: both endpoints off the same side of the canvas.
        if (x0 < 0 && x1 < 0)
            || (y0 < 0 && y1 < 0)
            || (x0 >= self.width as i32 && x1 >= self.width as i32)
            || (y0 >= self.height as i32 && y1 >= self.height as i32)
        {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the closed outline of a triangle through three screen points.
    pub fn triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32)) {
        self.line(a.0, a.1, b.0, b.1);
        self.line(b.0, b.1, c.0, c.1);
        self.line(c.0, c.1, a.0, a.1);
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(FOREGROUND))?;
        for y in 0..self.height {
            let row: String = self.cells[y * self.width..(y + 1) * self.width]
                .iter()
                .collect();
            writer.queue(cursor::MoveTo(0, y as u16))?;
            writer.queue(Print(row))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
