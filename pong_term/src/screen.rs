use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::style::{Color, Print, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use glam::Vec2;
use pong_core::{Config, DrawCmd};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Character-cell canvas scaled from arena pixels to the terminal grid
pub struct Screen {
    arena_width: f32,
    arena_height: f32,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    out: Stdout,
}

impl Screen {
    pub fn new(config: &Config) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
            out: stdout(),
        })
    }

    /// Rasterize one frame's draw list and flush it to the terminal
    pub fn draw(&mut self, cmds: &[DrawCmd]) -> Result<()> {
        self.fit_to_terminal()?;

        for cmd in cmds {
            match cmd {
                DrawCmd::Clear { .. } => self.cells.fill(EMPTY),
                DrawCmd::Rect { min, size, tint } => {
                    self.fill_rect(*min, *size, '█', to_color(*tint))
                }
                DrawCmd::Ellipse { min, size, tint } => self.fill_ellipse(*min, *size, to_color(*tint)),
                DrawCmd::Text { text, center, tint, .. } => {
                    self.put_text(text, *center, to_color(*tint))
                }
            }
        }

        self.flush_cells()
    }

    fn fit_to_terminal(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        if (cols, rows) != (self.cols, self.rows) {
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![EMPTY; cols as usize * rows as usize];
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(())
    }

    fn col_of(&self, x: f32) -> i32 {
        (x / self.arena_width * self.cols as f32).floor() as i32
    }

    fn row_of(&self, y: f32) -> i32 {
        (y / self.arena_height * self.rows as f32).floor() as i32
    }

    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32 {
            self.cells[row as usize * self.cols as usize + col as usize] = cell;
        }
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, ch: char, color: Color) {
        let col0 = self.col_of(min.x);
        let row0 = self.row_of(min.y);
        // Cover at least one cell so thin paddles stay visible
        let col1 = self.col_of(min.x + size.x).max(col0);
        let row1 = self.row_of(min.y + size.y).max(row0);

        for row in row0..=row1 {
            for col in col0..=col1 {
                self.set(col, row, Cell { ch, color });
            }
        }
    }

    fn fill_ellipse(&mut self, min: Vec2, size: Vec2, color: Color) {
        let center = min + size * 0.5;
        let radius = size * 0.5;

        let col0 = self.col_of(min.x);
        let row0 = self.row_of(min.y);
        let col1 = self.col_of(min.x + size.x).max(col0);
        let row1 = self.row_of(min.y + size.y).max(row0);

        let mut any = false;
        for row in row0..=row1 {
            for col in col0..=col1 {
                // Cell center back in arena pixels
                let px = (col as f32 + 0.5) / self.cols as f32 * self.arena_width;
                let py = (row as f32 + 0.5) / self.rows as f32 * self.arena_height;
                let dx = (px - center.x) / radius.x;
                let dy = (py - center.y) / radius.y;
                if dx * dx + dy * dy <= 1.0 {
                    self.set(col, row, Cell { ch: '●', color });
                    any = true;
                }
            }
        }
        if !any {
            // Ball smaller than one cell: draw its center cell
            self.set(self.col_of(center.x), self.row_of(center.y), Cell { ch: '●', color });
        }
    }

    fn put_text(&mut self, text: &str, center: Vec2, color: Color) {
        let row = self.row_of(center.y);
        let start = self.col_of(center.x) - text.chars().count() as i32 / 2;
        for (i, ch) in text.chars().enumerate() {
            self.set(start + i as i32, row, Cell { ch, color });
        }
    }

    fn flush_cells(&mut self) -> Result<()> {
        let mut last_color = None;
        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let mut run = String::with_capacity(self.cols as usize);
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if last_color != Some(cell.color) {
                    if !run.is_empty() {
                        queue!(self.out, Print(std::mem::take(&mut run)))?;
                    }
                    queue!(self.out, SetForegroundColor(cell.color))?;
                    last_color = Some(cell.color);
                }
                run.push(cell.ch);
            }
            queue!(self.out, Print(run))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn to_color(tint: [f32; 4]) -> Color {
    Color::Rgb {
        r: (tint[0] * 255.0) as u8,
        g: (tint[1] * 255.0) as u8,
        b: (tint[2] * 255.0) as u8,
    }
}
