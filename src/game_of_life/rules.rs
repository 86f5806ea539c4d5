//! Game of Life rules implementation (B3/S23)

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Rule string written into exported pattern headers
    pub const RULE: &'static str = "B3/S23";

    /// Compute the next generation's cells from a snapshot of `current`
    pub(crate) fn next_cells(current: &Grid) -> Vec<bool> {
        let mut next = Vec::with_capacity(current.width() * current.height());

        for y in 0..current.height() {
            for x in 0..current.width() {
                let neighbors = current.count_neighbors(x, y);
                next.push(Self::should_be_alive(current.is_alive(x, y), neighbors));
            }
        }

        next
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (_, 3) | (true, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_cells(
            rows.iter()
                .map(|row| row.chars().map(|c| c == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let block = grid(&["....", ".##.", ".##.", "...."]);
        let mut evolved = block.clone();
        evolved.forward();

        assert_eq!(block, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid(&["...", "###", "..."]);
        let vertical = grid(&[".#.", ".#.", ".#."]);

        let mut evolved = horizontal.clone();
        evolved.forward();
        assert_eq!(evolved, vertical);

        evolved.forward();
        assert_eq!(evolved, horizontal);
    }

    #[test]
    fn test_glider_translates() {
        let glider = grid(&[
            ".#....", "..#...", "###...", "......", "......", "......",
        ]);
        let shifted = grid(&[
            "......", "..#...", "...#..", ".###..", "......", "......",
        ]);

        let mut g = glider;
        for _ in 0..4 {
            g.forward();
        }
        assert_eq!(g, shifted);
    }

    #[test]
    fn test_forward_keeps_dimensions() {
        let mut g = grid(&["#.#.#", ".#.#.", "#.#.#"]);
        g.forward();
        assert_eq!((g.width(), g.height()), (5, 3));
        assert_eq!(g.living_cells().len(), g.living_count());
    }

    #[test]
    fn test_birth_regardless_of_state() {
        // centre dead with 3 neighbours
        let mut g = grid(&["#.#", "...", ".#."]);
        g.forward();
        assert_eq!(g.get_cell(1, 1), Ok(true));

        // centre alive with 3 neighbours
        let mut g = grid(&["#.#", ".#.", ".#."]);
        g.forward();
        assert_eq!(g.get_cell(1, 1), Ok(true));
    }

    #[test]
    fn test_survival_and_death_counts() {
        for n in 0..=8u8 {
            assert_eq!(GameOfLifeRules::should_be_alive(true, n), n == 2 || n == 3);
            assert_eq!(GameOfLifeRules::should_be_alive(false, n), n == 3);
        }
    }

    #[test]
    fn test_overcrowded_centre_dies() {
        let mut g = grid(&["###", "##.", "..."]);
        g.forward();
        assert_eq!(g.get_cell(1, 1), Ok(false));
    }

    #[test]
    fn test_single_cell_grid_never_births() {
        let mut g = Grid::new(1, 1).unwrap();
        assert_eq!(g.count_neighbors(0, 0), 0);
        g.forward();
        assert_eq!(g.get_cell(0, 0), Ok(false));

        g.set_cell(0, 0, true).unwrap();
        g.forward();
        assert_eq!(g.get_cell(0, 0), Ok(false));
    }

    #[test]
    fn test_step_reads_only_previous_generation() {
        // An in-place update would let (0,0) dying affect (1,0)'s count.
        let mut g = grid(&["###"]);
        g.forward();
        assert_eq!(g, grid(&[".#."]));
    }
}
