//! Two-color terminal heatmap renderer

use super::Renderer;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::Write;

/// Draws each frame as colored cells on a terminal.
///
/// Every cell is two characters wide so the grid looks roughly square.
/// Without color support, live cells are `██` and dead cells `··`.
/// Lines end in `\r\n` so output stays aligned in raw mode.
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    clear: bool,
    alternate_screen: bool,
    alive: Color,
    dead: Color,
    active: bool,
    last: Option<Grid>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            clear: color,
            alternate_screen: false,
            alive: Color::Blue,
            dead: Color::White,
            active: false,
            last: None,
        }
    }

    /// Redraw in place by clearing the screen before each frame
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Draw on the alternate screen for the length of the run.
    ///
    /// The final frame is printed again on the main screen when the run ends.
    pub fn with_alternate_screen(mut self, alternate_screen: bool) -> Self {
        self.alternate_screen = alternate_screen;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue_grid(&mut self, grid: &Grid) -> std::io::Result<()> {
        for row in 0..grid.rows() {
            let mut painted = None;
            for col in 0..grid.cols() {
                let alive = grid.is_alive(row, col);
                if self.color {
                    let color = if alive { self.alive } else { self.dead };
                    if painted != Some(color) {
                        queue!(self.out, SetBackgroundColor(color))?;
                        painted = Some(color);
                    }
                    queue!(self.out, Print("  "))?;
                } else {
                    queue!(self.out, Print(if alive { "██" } else { "··" }))?;
                }
            }
            if painted.is_some() {
                queue!(self.out, ResetColor)?;
            }
            queue!(self.out, Print("\r\n"))?;
        }
        Ok(())
    }

    fn queue_frame(&mut self, grid: &Grid, title: Option<String>) -> std::io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        if let Some(title) = title {
            queue!(self.out, Print(title), Print("\r\n"))?;
        }
        self.queue_grid(grid)?;
        self.out.flush()
    }

    fn write_frame(&mut self, grid: &Grid, title: Option<String>) -> Result<()> {
        self.queue_frame(grid, title)
            .context("Failed to write frame to terminal")?;
        self.last = Some(grid.clone());
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self, initial: &Grid) -> Result<()> {
        self.active = true;
        if self.alternate_screen {
            execute!(self.out, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;
        }
        self.write_frame(initial, None)
    }

    fn draw(&mut self, frame_index: u64, grid: &Grid, show_iter: bool) -> Result<()> {
        let title = show_iter.then(|| format!("Iteration: {}", frame_index));
        self.write_frame(grid, title)
    }

    fn finish(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        if self.alternate_screen {
            execute!(self.out, ResetColor, Show, LeaveAlternateScreen)
                .context("Failed to leave alternate screen")?;
            if let Some(last) = self.last.take() {
                self.queue_grid(&last)
                    .and_then(|_| self.out.flush())
                    .context("Failed to write final frame")?;
            }
        } else if self.color {
            execute!(self.out, ResetColor).context("Failed to reset terminal colors")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::from_rows(&[vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]).unwrap()
    }

    fn ansi(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_frame() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.begin(&blinker()).unwrap();
        renderer.finish().unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "······\r\n██████\r\n······\r\n");
    }

    #[test]
    fn test_iteration_title() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.draw(7, &blinker(), true).unwrap();
        renderer.draw(8, &blinker(), false).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("Iteration: 7\r\n"));
        assert!(!text.contains("Iteration: 8"));
    }

    #[test]
    fn test_colored_frame() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true);
        renderer.begin(&blinker()).unwrap();
        renderer.finish().unwrap();
        renderer.finish().unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let clear = ansi(|w| queue!(w, Clear(ClearType::All), MoveTo(0, 0)));
        let live_row = ansi(|w| queue!(w, SetBackgroundColor(Color::Blue), Print("      "), ResetColor));
        let reset = ansi(|w| queue!(w, ResetColor));

        assert!(text.starts_with(&clear));
        assert!(text.contains(&format!("{}\r\n", live_row)));
        // one reset per row plus one when the run ends
        assert_eq!(text.matches(&reset).count(), 4);
    }

    #[test]
    fn test_alternate_screen_is_left_once() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false)
            .with_clear_screen(true)
            .with_alternate_screen(true);
        renderer.begin(&blinker()).unwrap();
        renderer.draw(1, &Grid::new(1, 2), false).unwrap();
        renderer.finish().unwrap();
        renderer.finish().unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let enter = ansi(|w| queue!(w, EnterAlternateScreen));
        let leave = ansi(|w| queue!(w, LeaveAlternateScreen));

        assert!(text.starts_with(&enter));
        assert_eq!(text.matches(&leave).count(), 1);
        // the last frame is repeated on the main screen
        assert!(text.ends_with(&format!("{}····\r\n", leave)));
    }
}
