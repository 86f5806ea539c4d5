//! Driver-side state around a grid: pending import placement, export region,
//! tick rate and play state
//!
//! The session does not render anything or schedule itself. A driver asks for
//! [`Session::tick_interval`] and calls [`Session::step`] when it is due.

use crate::error::{LifeError, Result};
use crate::game_of_life::Grid;
use crate::rle::{decode_pattern, detect_pattern_size, encode_pattern, export_file_name, PatternSize, RLE_MIME_TYPE};
use std::time::Duration;

/// Tick rate a session starts with and returns to on reset
pub const DEFAULT_TICKS: u32 = 10;

/// A pattern waiting to be placed on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImport {
    pub pattern: String,
    pub size: PatternSize,
    pub origin: (i64, i64),
}

/// Inclusive rectangle selected for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRegion {
    pub start: (i64, i64),
    pub end: (i64, i64),
}

impl Default for ExportRegion {
    fn default() -> Self {
        Self { start: (0, 0), end: (1, 1) }
    }
}

impl ExportRegion {
    /// The default 2x2 selection, clamped to boards narrower or shorter than that
    pub fn for_grid(grid: &Grid) -> Self {
        let clamp = |end: i64, len: usize| end.min(i64::try_from(len).unwrap_or(i64::MAX) - 1);
        let Self { start, end } = Self::default();
        Self {
            start,
            end: (clamp(end.0, grid.width()), clamp(end.1, grid.height())),
        }
    }
}

/// Whether `len` cells starting at `origin` stay within `bound`
fn span_fits(origin: i64, len: usize, bound: usize) -> bool {
    usize::try_from(origin)
        .ok()
        .and_then(|origin| origin.checked_add(len))
        .is_some_and(|end| end <= bound)
}

/// Encoded pattern ready to be handed to a file sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPattern {
    pub file_name: String,
    pub content: String,
    pub mime_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    ticks: u32,
    playing: bool,
    pending_import: Option<PendingImport>,
    export_region: ExportRegion,
}

impl Session {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::with_grid(Grid::new(width, height)?))
    }

    pub fn with_grid(grid: Grid) -> Self {
        let export_region = ExportRegion::for_grid(&grid);
        Self {
            grid,
            ticks: DEFAULT_TICKS,
            playing: false,
            pending_import: None,
            export_region,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Change the generations-per-second rate; zero is rejected
    pub fn set_ticks(&mut self, ticks: u32) -> Result<()> {
        if ticks == 0 {
            return Err(LifeError::InvalidDimension { width: 0, height: 0 });
        }
        self.ticks = ticks;
        Ok(())
    }

    /// Time between two steps at the current tick rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Advance the board one generation
    pub fn step(&mut self) {
        self.grid.forward();
    }

    /// Step `generations` times, handing each new generation to `on_step`
    pub fn run<F>(&mut self, generations: usize, mut on_step: F)
    where
        F: FnMut(usize, &Grid),
    {
        for generation in 1..=generations {
            self.step();
            on_step(generation, &self.grid);
        }
    }

    /// Resize to an all-dead board; the pending import and export region are cleared
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid.resize(width, height)?;
        self.pending_import = None;
        self.export_region = ExportRegion::for_grid(&self.grid);
        Ok(())
    }

    /// Stop, restore the default tick rate and clear the board at its current size
    pub fn reset(&mut self) {
        self.stop();
        self.ticks = DEFAULT_TICKS;
        self.grid.reset();
        self.pending_import = None;
        self.export_region = ExportRegion::for_grid(&self.grid);
    }

    pub fn pending_import(&self) -> Option<&PendingImport> {
        self.pending_import.as_ref()
    }

    pub fn import_size(&self) -> Option<PatternSize> {
        self.pending_import.as_ref().map(|import| import.size)
    }

    /// Stage a pattern for import at origin (0, 0)
    pub fn load_import(&mut self, pattern: impl Into<String>) -> Result<PatternSize> {
        let pattern = pattern.into();
        let size = detect_pattern_size(&pattern).ok_or_else(|| {
            LifeError::MalformedPattern("missing or invalid size header".to_string())
        })?;

        self.pending_import = Some(PendingImport { pattern, size, origin: (0, 0) });
        Ok(size)
    }

    /// Move the staged pattern so its bounding box stays inside the board
    pub fn set_import_origin(&mut self, x: i64, y: i64) -> Result<()> {
        let (width, height) = (self.grid.width(), self.grid.height());
        let import = self.pending_import.as_mut().ok_or_else(|| {
            LifeError::MalformedPattern("no pattern loaded for import".to_string())
        })?;

        if !span_fits(x, import.size.width, width) || !span_fits(y, import.size.height, height) {
            return Err(LifeError::OutOfBounds { x, y, width, height });
        }

        import.origin = (x, y);
        Ok(())
    }

    /// Write the staged pattern onto the board
    ///
    /// All-or-nothing: the board is restored if decoding fails part way.
    /// The staged pattern is kept on failure so the origin can be fixed.
    pub fn commit_import(&mut self) -> Result<()> {
        let import = self.pending_import.as_ref().ok_or_else(|| {
            LifeError::MalformedPattern("no pattern loaded for import".to_string())
        })?;

        let (x, y) = import.origin;
        if !span_fits(x, import.size.width, self.grid.width())
            || !span_fits(y, import.size.height, self.grid.height())
        {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let snapshot = self.grid.clone();
        if let Err(err) = decode_pattern(&mut self.grid, &import.pattern, x, y) {
            self.grid = snapshot;
            return Err(err);
        }

        self.pending_import = None;
        Ok(())
    }

    pub fn cancel_import(&mut self) {
        self.pending_import = None;
    }

    pub fn export_region(&self) -> ExportRegion {
        self.export_region
    }

    /// Move the top-left corner; it must not pass the bottom-right one
    pub fn set_export_start(&mut self, x: i64, y: i64) -> Result<()> {
        let (end_x, end_y) = self.export_region.end;
        if !(0..=end_x).contains(&x) || !(0..=end_y).contains(&y) {
            return Err(self.out_of_bounds(x, y));
        }
        self.export_region.start = (x, y);
        Ok(())
    }

    /// Move the bottom-right corner; it must stay on the board and not before the start
    pub fn set_export_end(&mut self, x: i64, y: i64) -> Result<()> {
        let (start_x, start_y) = self.export_region.start;
        let (width, height) = (self.grid.width() as i64, self.grid.height() as i64);
        if !(start_x..width).contains(&x) || !(start_y..height).contains(&y) {
            return Err(self.out_of_bounds(x, y));
        }
        self.export_region.end = (x, y);
        Ok(())
    }

    /// Encode the selected region and reset the selection
    pub fn export(&mut self, name: &str) -> Result<ExportedPattern> {
        let ExportRegion { start, end } = self.export_region;
        let content = encode_pattern(&self.grid, start, end, name)?;
        self.export_region = ExportRegion::for_grid(&self.grid);

        Ok(ExportedPattern {
            file_name: export_file_name(name),
            content,
            mime_type: RLE_MIME_TYPE,
        })
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> LifeError {
        LifeError::OutOfBounds {
            x,
            y,
            width: self.grid.width(),
            height: self.grid.height(),
        }
    }
}
