//! File I/O operations for Game of Life worlds

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a candidate world from a text file.
///
/// Format: each non-blank line is a row of digits, '1' for alive and '0' for dead.
/// Values are returned unvalidated so the caller decides how to treat a bad world.
pub fn load_world_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read world file: {}", path.as_ref().display()))?;

    parse_world_from_string(&content)
        .with_context(|| format!("Failed to parse world from file: {}", path.as_ref().display()))
}

/// Parse a candidate world from its string representation
pub fn parse_world_from_string(content: &str) -> Result<Vec<Vec<i64>>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if lines.is_empty() {
        anyhow::bail!("World file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch.to_digit(10) {
                Some(value) => row.push(i64::from(value)),
                None => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only digits are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its '0'/'1' text form
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            result.push(if grid.is_alive(row, col) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Write a few small example worlds
pub fn create_example_worlds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "0000000000\n0010000000\n0001000000\n0111000000\n0000000000\n0000000000\n0000000000\n0000000000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "000000\n011000\n011000\n000110\n000110\n000000\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_world_from_string() {
        let world = parse_world_from_string("010\n101\n010\n").unwrap();
        assert_eq!(world, vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        let grid = Grid::from_world(&world).unwrap();
        assert_eq!(grid.population(), 4);
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 2));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let world = parse_world_from_string("# blinker\n\n 000 \n111\n000\n").unwrap();
        assert_eq!(world.len(), 3);
        assert_eq!(world[1], vec![1, 1, 1]);
    }

    #[test]
    fn test_out_of_range_digits_are_left_for_validation() {
        let world = parse_world_from_string("012\n").unwrap();
        assert_eq!(world, vec![vec![0, 1, 2]]);
        assert!(!Grid::validate(&world));
    }

    #[test]
    fn test_grid_to_string() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
        assert_eq!(grid_to_string(&grid), "010\n101\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_world.txt");

        let original = Grid::from_rows(&[vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
        save_grid_to_file(&original, &file_path).unwrap();

        let loaded = load_world_from_file(&file_path).unwrap();
        assert_eq!(Grid::from_rows(&loaded).unwrap(), original);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_world_from_string("010\n1X1\n010\n").is_err());
        assert!(parse_world_from_string("").is_err());
        assert!(load_world_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_create_example_worlds() {
        let temp_dir = tempdir().unwrap();
        create_example_worlds(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            let world = load_world_from_file(temp_dir.path().join(name)).unwrap();
            assert!(Grid::validate(&world), "{} should be a valid world", name);
        }

        let glider = load_world_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(Grid::from_rows(&glider).unwrap().population(), 5);
    }
}
