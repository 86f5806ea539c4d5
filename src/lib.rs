//! Bounded Game of Life engine with RLE pattern import/export
//!
//! The grid is a fixed rectangle with hard edges stepped by the B3/S23 rule.
//! Rectangular regions move in and out of it as run-length encoded text.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod rle;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use game_of_life::{GameOfLifeRules, Grid};
pub use rle::{decode_pattern, detect_pattern_size, encode_pattern, PatternSize};
pub use session::{ExportedPattern, Session};
