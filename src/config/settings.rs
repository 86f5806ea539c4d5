//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub import: ImportConfig,
    pub export: ExportConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    /// Generations per second when stepping in real time
    pub ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    pub pattern_file: Option<PathBuf>,
    pub origin_x: i64,
    pub origin_y: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub name: String,
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generations: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Rle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                width: 50,
                height: 50,
            },
            simulation: SimulationConfig {
                generations: 100,
                ticks: 10,
            },
            import: ImportConfig {
                pattern_file: None,
                origin_x: 0,
                origin_y: 0,
            },
            export: ExportConfig {
                name: String::new(),
                start_x: 0,
                start_y: 0,
                end_x: 1,
                end_y: 1,
                output_directory: PathBuf::from("output/patterns"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_generations: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.width == 0 || self.board.height == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.width,
                self.board.height
            );
        }

        if self.simulation.ticks == 0 {
            anyhow::bail!("Ticks per second must be positive");
        }

        if self.import.origin_x < 0 || self.import.origin_y < 0 {
            anyhow::bail!(
                "Import origin ({}, {}) must not be negative",
                self.import.origin_x,
                self.import.origin_y
            );
        }

        if let Some(ref pattern_file) = self.import.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        let export = &self.export;
        if export.start_x < 0 || export.start_y < 0 {
            anyhow::bail!("Export start ({}, {}) must not be negative", export.start_x, export.start_y);
        }
        if export.end_x < export.start_x || export.end_y < export.start_y {
            anyhow::bail!(
                "Export end ({}, {}) must not precede start ({}, {})",
                export.end_x, export.end_y, export.start_x, export.start_y
            );
        }
        if export.end_x as u64 >= self.board.width as u64 || export.end_y as u64 >= self.board.height as u64 {
            anyhow::bail!(
                "Export end ({}, {}) lies outside the {}x{} board",
                export.end_x, export.end_y, self.board.width, self.board.height
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        // the export corner follows a board shrunk below it
        let last = |len: usize| i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1);
        self.export.end_x = self.export.end_x.min(last(self.board.width));
        self.export.end_y = self.export.end_y.min(last(self.board.height));
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ticks) = cli_overrides.ticks {
            self.simulation.ticks = ticks;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.import.pattern_file = Some(pattern_file.clone());
        }
        if let Some(origin_x) = cli_overrides.origin_x {
            self.import.origin_x = origin_x;
        }
        if let Some(origin_y) = cli_overrides.origin_y {
            self.import.origin_y = origin_y;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.export.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub ticks: Option<u32>,
    pub pattern_file: Option<PathBuf>,
    pub origin_x: Option<i64>,
    pub origin_y: Option<i64>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
