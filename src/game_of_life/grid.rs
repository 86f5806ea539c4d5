//! Grid representation and cell accessors for a bounded Game of Life board

use super::GameOfLifeRules;
use crate::error::{LifeError, Result};
use serde::Serialize;

/// A fixed-size board with hard edges
///
/// Cells are stored row-major. The dimensions are private so the only way to
/// change them is [`Grid::resize`], which also clears the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = || LifeError::InvalidDimension {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let len = width.checked_mul(height).ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, false);

        Ok(Self { width, height, cells })
    }

    /// Create a grid from rows of booleans (`cells[y][x]`)
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }

        if let Some(row) = cells.iter().find(|row| row.len() != width) {
            return Err(LifeError::InvalidDimension {
                width: row.len() as i64,
                height: height as i64,
            });
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Kill every cell, keeping the current dimensions
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    /// Replace the board with an all-dead one of the given size
    ///
    /// Contents are not preserved. On error the grid is left untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x as u64 >= self.width as u64 || y as u64 >= self.height as u64 {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x as usize, y as usize))
    }

    /// Write one cell
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Read one cell
    pub fn get_cell(&self, x: i64, y: i64) -> Result<bool> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Unchecked read for coordinates already known to be in bounds
    #[inline]
    pub(crate) fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Count living neighbors among the in-bounds cells of the Moore neighborhood
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                    continue;
                };

                if nx < self.width && ny < self.height && self.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance one generation
    ///
    /// The next generation is computed from a snapshot of the current one
    /// and installed wholesale.
    pub fn forward(&mut self) {
        self.cells = GameOfLifeRules::next_cells(self);
    }

    /// Get all living cell coordinates as `(x, y)`, row by row
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_alive(x, y) {
                    living.push((x, y));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
        assert!(Grid::from_cells(vec![vec![true, false], vec![true]]).is_err());
    }

    #[test]
    fn test_dimensions_too_large_to_allocate() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { width: i64::MAX, height: 2 })
        ));
        assert!(matches!(
            Grid::new(usize::MAX / 2, 3),
            Err(LifeError::InvalidDimension { .. })
        ));

        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.resize(usize::MAX, usize::MAX).is_err());
        assert_eq!((grid.width(), grid.height()), (2, 2));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.get_cell(2, 0), Ok(true));
        assert_eq!(grid.get_cell(1, 1), Ok(true));
        assert_eq!(grid.get_cell(0, 1), Ok(false));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = Grid::new(5, 4).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                let value = (x + y) % 2 == 0;
                grid.set_cell(x, y, value).unwrap();
                assert_eq!(grid.get_cell(x, y), Ok(value));
            }
        }
        assert_eq!(grid.living_count(), 10);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        for (x, y) in [(3, 0), (-1, 0), (0, 2), (0, -1), (i64::MAX, i64::MAX)] {
            assert!(matches!(grid.get_cell(x, y), Err(LifeError::OutOfBounds { .. })));
            assert!(matches!(grid.set_cell(x, y, true), Err(LifeError::OutOfBounds { .. })));
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        grid.reset();
        assert!(grid.is_empty());
        assert_eq!((grid.width(), grid.height()), (3, 3));
    }

    #[test]
    fn test_resize_clears_contents() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(0, 0, true).unwrap();
        grid.resize(6, 2).unwrap();
        assert_eq!((grid.width(), grid.height()), (6, 2));
        assert!(grid.is_empty());

        grid.set_cell(5, 1, true).unwrap();
        assert!(grid.resize(0, 2).is_err());
        assert_eq!((grid.width(), grid.height()), (6, 2));
        assert_eq!(grid.get_cell(5, 1), Ok(true));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(1, 0), 4);
    }

    #[test]
    fn test_no_wraparound() {
        let cells = vec![
            vec![true, false, false, true],
            vec![false, false, false, false],
            vec![false, false, false, false],
            vec![true, false, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
        assert_eq!(grid.count_neighbors(3, 3), 0);
    }

    #[test]
    fn test_living_cells_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(2, 0, true).unwrap();
        grid.set_cell(0, 2, true).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 0), (1, 1), (0, 2)]);
    }
}
