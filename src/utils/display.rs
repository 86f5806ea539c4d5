//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use crate::rle::{encode_pattern, detect_pattern_size, PatternSize};
use anyhow::{Context, Result};

/// Format grids for terminal output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.is_alive(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.is_alive(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Render the whole board in the requested output format
    pub fn render(grid: &Grid, format: OutputFormat, name: &str) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_grid_compact(grid)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(grid).context("Failed to serialize grid")
            }
            OutputFormat::Rle => {
                let end = (grid.width() as i64 - 1, grid.height() as i64 - 1);
                Ok(encode_pattern(grid, (0, 0), end, name)?)
            }
        }
    }

    /// Describe what the size probe found in a pattern
    pub fn format_probe(pattern: &str, format: OutputFormat) -> Result<String> {
        let size = detect_pattern_size(pattern);
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&size).context("Failed to serialize pattern size")
            }
            OutputFormat::Text | OutputFormat::Rle => Ok(match size {
                Some(PatternSize { width, height }) => format!("{}x{}", width, height),
                None => "no size header".to_string(),
            }),
        }
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
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Grid {
        Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = checker();

        assert_eq!(GridFormatter::format_grid_compact(&grid), "█·█\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_render_formats() {
        let grid = checker();

        let rle = GridFormatter::render(&grid, OutputFormat::Rle, "checker").unwrap();
        assert_eq!(rle, "#N checker\nx = 3, y = 2, rule = B3/S23\nobo$bob!\n");

        let json = GridFormatter::render(&grid, OutputFormat::Json, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 2);
        assert_eq!(value["cells"][0], true);
    }

    #[test]
    fn test_format_probe() {
        let pattern = "x = 10, y = 5, rule = B3/S23\n";
        assert_eq!(GridFormatter::format_probe(pattern, OutputFormat::Text).unwrap(), "10x5");
        assert_eq!(
            GridFormatter::format_probe("nothing", OutputFormat::Text).unwrap(),
            "no size header"
        );

        let json = GridFormatter::format_probe(pattern, OutputFormat::Json).unwrap();
        assert!(json.contains("\"width\": 10"));
        assert_eq!(GridFormatter::format_probe("", OutputFormat::Json).unwrap(), "null");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
