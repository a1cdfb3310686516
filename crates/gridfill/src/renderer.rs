//! Text renderer for the dot grid
//!
//! Follows the engine through [`MarkObserver`] and keeps its own copy of
//! what was drawn, so strokes and fills can be told apart on screen.

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use gridfill_engine::{MarkObserver, MarkSource, Point};

const STROKE_COLOR: &str = "\x1B[1;37m";
const FILL_COLOR: &str = "\x1B[33m";
const EMPTY_COLOR: &str = "\x1B[2m";
const RESET: &str = "\x1B[0m";
const CURSOR_HOME: &str = "\x1B[H";
const CLEAR_SCREEN: &str = "\x1B[2J";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Empty,
    Stroke,
    Fill,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: i32,
    rows: i32,
    cells: Vec<Cell>,
    use_color: bool,
    /// Pause after each fill mark; frames are redrawn in place when set.
    delay: Option<Duration>,
    started_animation: bool,
    /// First write error; `on_mark` can't return it.
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, columns: i32, rows: i32) -> Self {
        Self {
            out,
            columns,
            rows,
            cells: vec![Cell::Empty; columns.max(0) as usize * rows.max(0) as usize],
            use_color: true,
            delay: None,
            started_animation: false,
            error: None,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = if delay_ms > 0 { Some(Duration::from_millis(delay_ms)) } else { None };
        self
    }

    fn cell_mut(&mut self, pos: Point) -> Option<&mut Cell> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.columns || pos.y >= self.rows {
            return None;
        }
        self.cells.get_mut(cell_index(self.columns, pos))
    }

    /// The grid as text, one line per row, row 0 first.
    pub fn frame(&self) -> String {
        let mut txt = String::new();
        for row in self.cells.chunks(self.columns.max(1) as usize) {
            let mut last_color = None;
            for cell in row {
                let (ch, color) = match cell {
                    Cell::Empty => ('.', EMPTY_COLOR),
                    Cell::Stroke => ('#', STROKE_COLOR),
                    Cell::Fill => ('o', FILL_COLOR),
                };
                if self.use_color && last_color != Some(color) {
                    txt.push_str(color);
                    last_color = Some(color);
                }
                txt.push(ch);
                txt.push(' ');
            }
            if self.use_color {
                txt.push_str(RESET);
            }
            txt.push('\n');
        }
        txt
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        if !self.started_animation {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
            self.started_animation = true;
        }
        let frame = self.frame();
        self.out.write_all(CURSOR_HOME.as_bytes())?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    /// Print the final grid and report any write error from the session.
    pub fn present(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if self.started_animation {
            return self.draw_frame();
        }
        let frame = self.frame();
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn cell_index(columns: i32, pos: Point) -> usize {
    pos.y as usize * columns as usize + pos.x as usize
}

impl<W: Write> MarkObserver for TerminalRenderer<W> {
    fn on_mark(&mut self, pos: Point, source: MarkSource) {
        let kind = match source {
            MarkSource::Stroke => Cell::Stroke,
            MarkSource::Fill(_) => Cell::Fill,
        };
        if let Some(cell) = self.cell_mut(pos) {
            *cell = kind;
        }

        if let (Some(delay), Cell::Fill) = (self.delay, kind) {
            if self.error.is_some() {
                return;
            }
            if let Err(err) = self.draw_frame() {
                log::error!("Failed to draw frame: {err}");
                self.error = Some(err);
                return;
            }
            thread::sleep(delay);
        }
    }
}
