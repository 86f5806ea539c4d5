//! RLE decoding into a grid at an offset

use super::probe::detect_pattern_size;
use crate::error::{LifeError, Result};
use crate::game_of_life::Grid;

/// Decode `pattern` and write its cells into `grid` with `(origin_x, origin_y)`
/// as the pattern's top-left corner
///
/// Line breaks in the body carry no meaning. Writes are not bounds-checked
/// up front: a cell landing outside the grid fails with the grid's own
/// `OutOfBounds`. Cells written before a failure stay written; callers that
/// need all-or-nothing should go through `Session::commit_import`.
pub fn decode_pattern(grid: &mut Grid, pattern: &str, origin_x: i64, origin_y: i64) -> Result<()> {
    if detect_pattern_size(pattern).is_none() {
        return Err(LifeError::MalformedPattern(
            "missing or invalid size header".to_string(),
        ));
    }

    let body: String = pattern
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('x'))
        .map(str::trim)
        .collect();

    let mut run: Option<usize> = None;
    let mut column: i64 = 0;
    let mut row: i64 = 0;

    for ch in body.chars() {
        match ch {
            '0'..='9' => {
                let digit = ch as usize - '0' as usize;
                let value = run
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit))
                    .ok_or_else(|| LifeError::MalformedPattern("run count too large".to_string()))?;
                run = Some(value);
            }
            'b' | 'o' => {
                let alive = ch == 'o';
                for _ in 0..run.take().unwrap_or(1) {
                    grid.set_cell(
                        origin_x.saturating_add(column),
                        origin_y.saturating_add(row),
                        alive,
                    )?;
                    column += 1;
                }
            }
            '$' => {
                let skip = run.take().unwrap_or(1);
                row = row.saturating_add(i64::try_from(skip).unwrap_or(i64::MAX));
                column = 0;
            }
            '!' => break,
            other => {
                return Err(LifeError::MalformedPattern(format!(
                    "character '{}' not recognised",
                    other
                )))
            }
        }
    }

    Ok(())
}
