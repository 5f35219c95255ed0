//! Bathy CLI - find islands, lakes and channels in bathymetry grids

mod editor;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bathy_algorithms::features::{ChannelParams, Feature, LocateParams};
use bathy_algorithms::geometry::{DEFAULT_EPS, DEFAULT_MAX_ITERATIONS};
use bathy_algorithms::segmentation::{classify_mask, FeatureKind};
use bathy_colormap::ColorScheme;
use bathy_core::Connectivity;

use editor::{BathymetryEditor, HeadlessEditor};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "bathy")]
#[command(author, version, about = "Island and lake detection for bathymetry grids", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input grid: headerless big-endian float32, row-major
#[derive(Args)]
struct GridArgs {
    /// Input bathymetry file
    input: PathBuf,
    /// Number of rows
    #[arg(long, visible_alias = "ny")]
    rows: usize,
    /// Number of columns
    #[arg(long, visible_alias = "nx")]
    cols: usize,
}

#[derive(Args)]
struct DetectArgs {
    /// Neighbor rule: 4 or 8
    #[arg(short, long, default_value = "8")]
    connectivity: Connectivity,
    /// Only report features that do not touch the grid edge
    #[arg(long)]
    enclosed: bool,
    /// Drop features smaller than this many cells
    #[arg(long, default_value = "1")]
    min_cells: usize,
    /// Median convergence tolerance
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,
    /// Median iteration bound
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
}

impl DetectArgs {
    fn params(&self) -> LocateParams {
        LocateParams {
            connectivity: self.connectivity,
            eps: self.eps,
            max_iterations: self.max_iterations,
            require_enclosed: self.enclosed,
            min_cells: self.min_cells,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show grid dimensions, value range and land/water cell counts
    Info {
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Locate land components and their centers
    Islands {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        detect: DetectArgs,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Locate water components and their centers
    Lakes {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        detect: DetectArgs,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find narrow straight water channels between land
    Channels {
        #[command(flatten)]
        grid: GridArgs,
        /// Minimum channel length in cells
        #[arg(long, default_value = "5")]
        min_length: usize,
        /// Maximum distance to flanking land on each side
        #[arg(long, default_value = "2")]
        flank_width: usize,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the grid to PNG with island and lake markers
    Render {
        #[command(flatten)]
        grid: GridArgs,
        /// Output PNG file
        output: PathBuf,
        /// Color scheme: bathymetry, terrain, water, grayscale
        #[arg(short, long, default_value = "bathymetry")]
        scheme: ColorScheme,
        /// Skip island and lake markers
        #[arg(long)]
        no_markers: bool,
        #[command(flatten)]
        detect: DetectArgs,
    },
    /// Copy the grid to a new raw bathymetry file
    Save {
        #[command(flatten)]
        grid: GridArgs,
        /// Output file
        output: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set default subscriber")?;
    Ok(())
}

fn spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

fn open_editor(grid: &GridArgs, params: LocateParams) -> Result<HeadlessEditor> {
    let pb = spinner("Reading bathymetry...")?;
    let mut editor = HeadlessEditor::new(params);
    editor
        .load(&grid.input, grid.rows, grid.cols)
        .with_context(|| format!("Failed to read {}", grid.input.display()))?;
    pb.finish_and_clear();
    info!("Input: {} x {}", grid.cols, grid.rows);
    Ok(editor)
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_features(kind: FeatureKind, features: &[Feature], elapsed: std::time::Duration) {
    println!("{} {}(s) found", features.len(), kind.feature_name());
    for f in features {
        let b = &f.component.bbox;
        println!(
            "  #{:<4} center ({:.3}, {:.3})  {} cells  rows {}..={} cols {}..={}{}",
            f.label(),
            f.center.row,
            f.center.col,
            f.size(),
            b.min_row,
            b.max_row,
            b.min_col,
            b.max_col,
            if f.converged { "" } else { "  (not converged)" }
        );
    }
    println!("  Processing time: {:.2?}", elapsed);
}

fn detect(grid: &GridArgs, args: &DetectArgs, kind: FeatureKind, json: bool) -> Result<()> {
    let editor = open_editor(grid, args.params())?;
    info!("Connectivity: {}", editor.params().connectivity);
    let start = Instant::now();
    let features = editor
        .detect(kind)
        .with_context(|| format!("Failed to locate {}s", kind.feature_name()))?;
    let elapsed = start.elapsed();

    if json {
        print_json(&features)
    } else {
        print_features(kind, &features, elapsed);
        Ok(())
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Info { grid } => {
            let editor = open_editor(&grid, LocateParams::default())?;
            let raster = editor.grid()?;
            let stats = raster.statistics();
            let land = classify_mask(raster).count();

            println!("File: {}", grid.input.display());
            println!("Dimensions: {} x {} ({} cells)", grid.cols, grid.rows, raster.len());
            println!("\nStatistics:");
            if let Some(min) = stats.min {
                println!("  Min: {:.4}", min);
            }
            if let Some(max) = stats.max {
                println!("  Max: {:.4}", max);
            }
            if let Some(mean) = stats.mean {
                println!("  Mean: {:.4}", mean);
            }
            println!("  Valid cells: {}", stats.valid_count);
            println!("  Land cells: {}", land);
            println!("  Water cells: {}", raster.len() - land);
        }

        Commands::Islands { grid, detect: args, json } => {
            detect(&grid, &args, FeatureKind::Land, json)?;
        }

        Commands::Lakes { grid, detect: args, json } => {
            detect(&grid, &args, FeatureKind::Water, json)?;
        }

        Commands::Channels {
            grid,
            min_length,
            flank_width,
            json,
        } => {
            let editor = open_editor(&grid, LocateParams::default())?;
            let params = ChannelParams {
                min_length,
                flank_width,
            };
            let start = Instant::now();
            let channels = editor.channels(&params).context("Failed to detect channels")?;
            let elapsed = start.elapsed();

            if json {
                print_json(&channels)?;
            } else {
                println!("{} channel(s) found", channels.len());
                for ch in &channels {
                    println!(
                        "  {:?} from {:?} to {:?} ({} cells)",
                        ch.orientation,
                        ch.start,
                        ch.end(),
                        ch.length
                    );
                }
                println!("  Processing time: {:.2?}", elapsed);
            }
        }

        Commands::Render {
            grid,
            output,
            scheme,
            no_markers,
            detect: args,
        } => {
            let editor = open_editor(&grid, args.params())?;
            let start = Instant::now();

            let mut features = Vec::new();
            if !no_markers {
                features.extend(editor.detect(FeatureKind::Land).context("Failed to locate islands")?);
                features.extend(editor.detect(FeatureKind::Water).context("Failed to locate lakes")?);
            }
            let rgba = editor.render(scheme, &features).context("Failed to render grid")?;

            let width = u32::try_from(grid.cols).context("Grid too wide for PNG")?;
            let height = u32::try_from(grid.rows).context("Grid too tall for PNG")?;
            let image = image::RgbaImage::from_raw(width, height, rgba)
                .context("Rendered buffer does not match grid shape")?;

            let pb = spinner("Writing image...")?;
            image.save(&output).context("Failed to write PNG")?;
            pb.finish_and_clear();

            info!("{} markers drawn", features.len());
            done("Rendering", &output, start.elapsed());
        }

        Commands::Save { grid, output } => {
            let editor = open_editor(&grid, LocateParams::default())?;
            let start = Instant::now();
            let pb = spinner("Writing output...")?;
            editor.save(&output).context("Failed to write output")?;
            pb.finish_and_clear();
            done("Bathymetry", &output, start.elapsed());
        }
    }

    Ok(())
}
