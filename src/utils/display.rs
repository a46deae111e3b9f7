//! Display and output formatting utilities

use crate::game_of_life::{Grid, PatternInfo};

/// Text formatting for grids and listings
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.cols() {
                output.push_str(if grid.is_alive(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One line per preset: id, size, population and description
    pub fn format_pattern_listing(entries: &[(PatternInfo, Grid)]) -> String {
        let mut output = String::new();
        output.push_str("ID | Size    | Alive | Kind        | Name\n");
        output.push_str("---|---------|-------|-------------|---------------------\n");

        for (info, grid) in entries {
            output.push_str(&format!(
                "{:2} | {:>3}x{:<3} | {:5} | {:11} | {}\n",
                info.id,
                grid.rows(),
                grid.cols(),
                grid.population(),
                info.kind,
                info.name
            ));
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{BuiltinPatterns, PatternSource};

    #[test]
    fn test_grid_formatting() {
        let grid = Grid::from_rows(&[vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]).unwrap();

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2"));
    }

    #[test]
    fn test_pattern_listing() {
        let info = BuiltinPatterns::catalog()[11];
        let grid = BuiltinPatterns.pattern(11).unwrap();
        let listing = GridFormatter::format_pattern_listing(&[(info, grid)]);
        assert!(listing.contains("Pulsar"));
        assert!(listing.contains("17x17"));
        assert!(listing.contains("48"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Green);
        assert!(colored.contains("test"));
        assert!(ColorOutput::info("note").contains("note"));
    }
}
