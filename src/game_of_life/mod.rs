//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use io::{create_example_patterns, is_safe_pattern_name, load_pattern_from_file, save_pattern_to_file};
