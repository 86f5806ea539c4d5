//! Command line driver for the bounded Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_rle::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, is_safe_pattern_name, load_pattern_from_file, save_pattern_to_file},
    rle::{detect_pattern_name, detect_pattern_size},
    utils::{ColorOutput, GridFormatter},
    Session,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_rle")]
#[command(about = "Bounded Game of Life simulator with RLE pattern import/export")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Board and simulation overrides shared by `run` and `export`
#[derive(clap::Args, Debug, Default)]
struct SimulationArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// RLE pattern to import (overrides config)
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Import origin column (overrides config)
    #[arg(long)]
    origin_x: Option<i64>,

    /// Import origin row (overrides config)
    #[arg(long)]
    origin_y: Option<i64>,

    /// Board width (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Board height (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Generations per second when stepping in real time (overrides config)
    #[arg(short, long)]
    ticks: Option<u32>,

    /// Sleep one tick interval between generations
    #[arg(long)]
    realtime: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a board forward and print or save the final generation
    Run {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the final board to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation, not only the last one
        #[arg(long)]
        show_generations: bool,

        /// Label rows and columns in text output
        #[arg(long)]
        coords: bool,
    },

    /// Step a board forward and export a rectangular region as RLE
    Export {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Region top-left column
        #[arg(long)]
        start_x: Option<i64>,

        /// Region top-left row
        #[arg(long)]
        start_y: Option<i64>,

        /// Region bottom-right column (inclusive)
        #[arg(long)]
        end_x: Option<i64>,

        /// Region bottom-right row (inclusive)
        #[arg(long)]
        end_y: Option<i64>,

        /// Pattern name for the `#N` line and file name
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Report the size declared by a pattern header
    Probe {
        /// Pattern file
        pattern: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { sim, format, output, show_generations, coords } => {
            run_command(sim, format, output, show_generations, coords)
        }
        Commands::Export { sim, start_x, start_y, end_x, end_y, name, output_dir } => {
            export_command(sim, [start_x, start_y, end_x, end_y], name, output_dir)
        }
        Commands::Probe { pattern, format } => probe_command(pattern, format),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(sim: &SimulationArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if sim.config.exists() {
        Settings::from_file(&sim.config)
            .with_context(|| format!("Failed to load config from {}", sim.config.display()))?
    } else {
        if sim.verbose {
            println!("{}", ColorOutput::warning(&format!(
                "Config file {} not found, using defaults", sim.config.display()
            )));
        }
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        width: sim.width,
        height: sim.height,
        generations: sim.generations,
        ticks: sim.ticks,
        pattern_file: sim.pattern.clone(),
        origin_x: sim.origin_x,
        origin_y: sim.origin_y,
        ..overrides
    });

    settings.validate()
        .context("Configuration validation failed")?;

    if sim.verbose {
        println!("Configuration:");
        println!("  Board: {}x{}", settings.board.width, settings.board.height);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Ticks: {}/s", settings.simulation.ticks);
        if let Some(ref pattern_file) = settings.import.pattern_file {
            println!(
                "  Pattern: {} at ({}, {})",
                pattern_file.display(), settings.import.origin_x, settings.import.origin_y
            );
        }
        println!();
    }

    Ok(settings)
}

/// Build the session and place the configured pattern, if any
fn prepare_session(settings: &Settings) -> Result<(Session, Option<String>)> {
    let mut session = Session::new(settings.board.width, settings.board.height)?;
    session.set_ticks(settings.simulation.ticks)?;

    let Some(ref pattern_file) = settings.import.pattern_file else {
        return Ok((session, None));
    };

    let pattern = load_pattern_from_file(pattern_file)?;
    session.load_import(pattern.as_str())
        .with_context(|| format!("Failed to read pattern header from {}", pattern_file.display()))?;
    session.set_import_origin(settings.import.origin_x, settings.import.origin_y)
        .context("Pattern does not fit on the board at the requested origin")?;
    session.commit_import()
        .with_context(|| format!("Failed to import pattern from {}", pattern_file.display()))?;

    Ok((session, Some(pattern)))
}

fn simulate(
    session: &mut Session,
    settings: &Settings,
    sim: &SimulationArgs,
    show_generations: bool,
    coords: bool,
) {
    let interval = session.tick_interval();
    session.start();
    session.run(settings.simulation.generations, |generation, grid| {
        if show_generations {
            println!("Generation {} (Living: {}):", generation, grid.living_count());
            if coords {
                println!("{}", GridFormatter::format_grid_with_coords(grid));
            } else {
                println!("{}", GridFormatter::format_grid_compact(grid));
            }
        }
        if sim.realtime {
            std::thread::sleep(interval);
        }
    });
    session.stop();
}

fn run_command(
    sim: SimulationArgs,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    show_generations: bool,
    coords: bool,
) -> Result<()> {
    let settings = load_settings(&sim, CliOverrides { format, ..Default::default() })?;
    let (mut session, pattern) = prepare_session(&settings)?;

    let start_time = Instant::now();
    simulate(&mut session, &settings, &sim, show_generations || settings.output.show_generations, coords);

    if sim.verbose {
        println!("{}", ColorOutput::success(&format!(
            "Stepped {} generation(s) in {:.3}s, {} living cell(s)",
            settings.simulation.generations,
            start_time.elapsed().as_secs_f64(),
            session.grid().living_count()
        )));
    }

    let name = pattern.as_deref().and_then(detect_pattern_name).unwrap_or_default();
    let rendered = match settings.output.format {
        OutputFormat::Text if coords => GridFormatter::format_grid_with_coords(session.grid()),
        format => GridFormatter::render(session.grid(), format, &name)?,
    };

    match output {
        Some(path) => {
            write_output(&path, &rendered)?;
            println!("{}", ColorOutput::success(&format!("Board saved to {}", path.display())));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn export_command(
    sim: SimulationArgs,
    region: [Option<i64>; 4],
    name: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&sim, CliOverrides { output_dir, ..Default::default() })?;
    let [start_x, start_y, end_x, end_y] = region;
    let export = &mut settings.export;
    export.start_x = start_x.unwrap_or(export.start_x);
    export.start_y = start_y.unwrap_or(export.start_y);
    export.end_x = end_x.unwrap_or(export.end_x);
    export.end_y = end_y.unwrap_or(export.end_y);
    settings.validate()
        .context("Export region validation failed")?;

    let (mut session, pattern) = prepare_session(&settings)?;
    simulate(&mut session, &settings, &sim, settings.output.show_generations, false);

    let export = &settings.export;
    session.set_export_end(export.end_x, export.end_y)?;
    session.set_export_start(export.start_x, export.start_y)?;

    // A name read from the pattern itself falls back to the default when it is
    // not a plain file name; an explicit one is an error instead.
    let name = name
        .or_else(|| Some(export.name.clone()).filter(|name| !name.is_empty()))
        .or_else(|| {
            pattern.as_deref()
                .and_then(detect_pattern_name)
                .filter(|name| is_safe_pattern_name(name))
        })
        .unwrap_or_default();
    if !is_safe_pattern_name(&name) {
        anyhow::bail!("Export name {:?} must be a plain file name", name);
    }

    let exported = session.export(&name)?;
    let path = save_pattern_to_file(&exported.content, &export.output_directory, &name)?;

    if sim.verbose {
        println!("{}", exported.content);
    }
    println!("{}", ColorOutput::success(&format!(
        "Exported {} ({}) to {}", exported.file_name, exported.mime_type, path.display()
    )));

    Ok(())
}

fn probe_command(pattern_path: PathBuf, format: OutputFormat) -> Result<()> {
    let pattern = load_pattern_from_file(&pattern_path)?;

    if detect_pattern_size(&pattern).is_none() && format != OutputFormat::Json {
        println!("{}", ColorOutput::warning(&format!(
            "No valid size header in {}", pattern_path.display()
        )));
        return Ok(());
    }

    println!("{}", GridFormatter::format_probe(&pattern, format)?);
    if format != OutputFormat::Json {
        if let Some(name) = detect_pattern_name(&pattern) {
            println!("Name: {}", name);
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/patterns");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern input/patterns/glider.rle --generations 4");

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
