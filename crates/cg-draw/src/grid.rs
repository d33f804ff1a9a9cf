//! `GridSurface<W>` — an in-memory character grid presented as ANSI text.
//!
//! The grid is a flat `Vec<char>` of `width × height` cells.  Each tick the
//! render pass clears it, entities write glyphs into it, and `draw_finish`
//! presents the whole buffer to the writer in one shot (cursor-home escape
//! followed by the rows).  Writing the full frame at once avoids per-cell
//! terminal round-trips, which dominate at any realistic frame rate.

use std::io::{self, Write};

use cg_core::{FrameContext, Rect};

use crate::surface::DrawSurface;
use crate::{SurfaceError, SurfaceResult};

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const CURSOR_HIDE: &str = "\x1b[?25l";

/// A character-grid surface writing to any `io::Write` sink.
///
/// Presentation errors after setup cannot surface through the `()`-returning
/// draw hooks, so the first one is stored and retrievable via
/// [`take_error`][Self::take_error] once the run ends.
pub struct GridSurface<W: Write + Send> {
    width: usize,
    height: usize,
    cells: Vec<char>,
    out: W,
    last_error: Option<SurfaceError>,
}

impl GridSurface<io::Stdout> {
    /// A surface presenting to stdout.
    pub fn stdout(width: usize, height: usize) -> Self {
        Self::new(width, height, io::stdout())
    }
}

impl<W: Write + Send> GridSurface<W> {
    pub fn new(width: usize, height: usize, out: W) -> Self {
        Self { width, height, cells: Vec::new(), out, last_error: None }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The contents of row `y` as a string (for tests and snapshots).
    pub fn row(&self, y: usize) -> String {
        self.cells[y * self.width..(y + 1) * self.width].iter().collect()
    }

    /// Take the first presentation error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<SurfaceError> {
        self.last_error.take()
    }

    /// Consume the surface and return the writer (e.g. to inspect captured
    /// output in tests).
    pub fn into_writer(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("grid presentation failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(SurfaceError::Io(e));
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut frame = String::with_capacity(self.cells.len() + self.height * 2 + 8);
        frame.push_str(CURSOR_HOME);
        for y in 0..self.height {
            frame.extend(self.cells[y * self.width..(y + 1) * self.width].iter());
            if y + 1 < self.height {
                frame.push_str("\r\n");
            }
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write + Send> DrawSurface for GridSurface<W> {
    fn setup(&mut self) -> SurfaceResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SurfaceError::BadDimensions { width: self.width, height: self.height });
        }
        self.cells = vec![' '; self.width * self.height];
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.write_all(CURSOR_HIDE.as_bytes())?;
        self.out.flush()?;
        log::debug!("grid surface ready: {}x{}", self.width, self.height);
        Ok(())
    }

    fn game_border(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    fn draw_start(&mut self, _ctx: &FrameContext) {
        self.cells.fill(' ');
    }

    fn draw_finish(&mut self, _ctx: &FrameContext) {
        let result = self.present();
        self.store_err(result);
    }

    fn draw_line(&mut self, left: i32, top: i32, text: &str) {
        if top < 0 || top >= self.height as i32 {
            return;
        }
        if left >= self.width as i32 {
            return;
        }

        // Clip the part hanging off the left edge, then truncate to the row.
        let skip = if left < 0 { (-left) as usize } else { 0 };
        let left = left.max(0) as usize;
        let offset = top as usize * self.width + left;
        let room = self.width - left;
        for (i, g) in text.chars().skip(skip).take(room).enumerate() {
            self.cells[offset + i] = g;
        }
    }

    fn draw_rect(&mut self, rect: Rect, glyphs: &[char]) {
        if !rect.intersects(&self.game_border()) {
            return;
        }
        let row_width = rect.w as usize;
        if row_width == 0 {
            return;
        }
        for (i, row) in glyphs.chunks(row_width).enumerate() {
            let text: String = row.iter().collect();
            self.draw_line(rect.x as i32, rect.y as i32 + i as i32, &text);
        }
    }
}
