//! RLE encoding of a rectangular grid region

use crate::error::{LifeError, Result};
use crate::game_of_life::{GameOfLifeRules, Grid};
use itertools::Itertools;
use std::iter;

/// Name used in the `#N` line and file name when none is given
pub const DEFAULT_PATTERN_NAME: &str = "pattern";

/// Content type of exported pattern files
pub const RLE_MIME_TYPE: &str = "text/plain";

const DEAD: char = 'b';
const ALIVE: char = 'o';
const END_OF_ROW: char = '$';
const END_OF_PATTERN: char = '!';

fn pattern_name(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_PATTERN_NAME
    } else {
        name
    }
}

/// File name an exported pattern is saved under
pub fn export_file_name(name: &str) -> String {
    format!("{}.rle", pattern_name(name))
}

/// Encode the inclusive region `start..=end` (as `(x, y)` corners) into RLE text
///
/// Every row is scanned in full, so trailing dead cells are written as a
/// `b` run. The row terminator left pending after the last row is dropped,
/// and `!` closes the body.
pub fn encode_pattern(grid: &Grid, start: (i64, i64), end: (i64, i64), name: &str) -> Result<String> {
    let (start_x, start_y) = start;
    let (end_x, end_y) = end;

    if end_x < start_x || end_y < start_y {
        return Err(LifeError::InvalidDimension {
            width: end_x.saturating_sub(start_x).saturating_add(1),
            height: end_y.saturating_sub(start_y).saturating_add(1),
        });
    }

    // Both corners in bounds means the whole rectangle is.
    grid.get_cell(start_x, start_y)?;
    grid.get_cell(end_x, end_y)?;

    let (x0, y0, x1, y1) = (start_x as usize, start_y as usize, end_x as usize, end_y as usize);

    let mut output = String::new();
    output.push_str(&format!("#N {}\n", pattern_name(name)));
    output.push_str(&format!(
        "x = {}, y = {}, rule = {}\n",
        x1 - x0 + 1,
        y1 - y0 + 1,
        GameOfLifeRules::RULE
    ));

    let symbols = (y0..=y1).flat_map(|y| {
        (x0..=x1)
            .map(move |x| if grid.is_alive(x, y) { ALIVE } else { DEAD })
            .chain(iter::once(END_OF_ROW))
    });

    let mut runs: Vec<(usize, char)> = symbols.dedup_with_count().collect();
    // The run still pending when the scan ends is never flushed.
    runs.pop();

    for (count, symbol) in runs {
        if count > 1 {
            output.push_str(&count.to_string());
        }
        output.push(symbol);
    }
    output.push(END_OF_PATTERN);
    output.push('\n');

    Ok(output)
}
