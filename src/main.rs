use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use panelcut::designer::{export, raster, svg_renderer};
use panelcut::settings::default_config_path;
use panelcut::{init_logging, load_script, replay, DesignFile, EditorConfig, EditorSession};

#[derive(Parser)]
#[command(name = "panelcut")]
#[command(version = panelcut::VERSION)]
#[command(long_version = panelcut::LONG_VERSION)]
#[command(about = "Cut a page into polygonal panels and export the template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script on a fresh page and export the result
    Run {
        /// Editor config (.toml or .json); defaults to the user config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// JSON array of input events
        #[arg(short, long)]
        script: PathBuf,
        /// Write the panels as an SVG template
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Write the panels as a PNG image
        #[arg(long)]
        png: Option<PathBuf>,
        /// Draw the selection and knife guides into the PNG
        #[arg(long)]
        overlay: bool,
        /// Write a design file that can be inspected or resumed
        #[arg(long)]
        design: Option<PathBuf>,
        /// Write the panels as a JSON list of coordinates
        #[arg(long)]
        coordinates: Option<PathBuf>,
    },
    /// Write a default config file
    InitConfig {
        /// Target path (.toml or .json); defaults to the user config location
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Display information about a design file
    Info {
        /// Path to the design file
        file: PathBuf,
    },
}

struct Outputs {
    svg: Option<PathBuf>,
    png: Option<PathBuf>,
    overlay: bool,
    design: Option<PathBuf>,
    coordinates: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Commands::Run {
            config,
            script,
            svg,
            png,
            overlay,
            design,
            coordinates,
        } => {
            let outputs = Outputs {
                svg,
                png,
                overlay,
                design,
                coordinates,
            };
            run(config.as_deref(), &script, &outputs)?;
        }
        Commands::InitConfig { path, force } => {
            init_config(path, force)?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let config = match path {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::load_or_default().context("Failed to load user config")?,
    };
    Ok(config)
}

fn run(config: Option<&Path>, script: &Path, outputs: &Outputs) -> Result<()> {
    let config = load_config(config)?;
    let mut session = EditorSession::new(config).context("Invalid editor config")?;

    let steps = load_script(script)?;
    let summary = replay(&mut session, steps);
    info!(
        "Replayed {} steps: {} cuts, {} refused, {} skipped",
        summary.steps, summary.cuts, summary.refused, summary.skipped
    );

    let layout = session.config().layout();

    if let Some(path) = &outputs.svg {
        svg_renderer::save_svg(
            session.panels(),
            layout.width_px,
            layout.height_px,
            layout.line_width_px,
            path,
        )?;
        info!("Exported SVG to {}", path.display());
    }

    if let Some(path) = &outputs.png {
        let pixmap = raster::render_session(&session, outputs.overlay)?;
        raster::save_png(&pixmap, path)?;
        info!("Exported PNG to {}", path.display());
    }

    if let Some(path) = &outputs.coordinates {
        export::save_to_file(session.panels(), path)?;
        info!("Exported coordinates to {}", path.display());
    }

    if let Some(path) = &outputs.design {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("Untitled");
        DesignFile::from_session(name, &session).save_to_file(path)?;
        info!("Saved design to {}", path.display());
    }

    println!("{} panels", session.store().len());
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    EditorConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let design = DesignFile::load_from_file(file)?;
    let session = design.to_session()?;
    let config = session.config();
    let dpi = config.res_dpi;

    let area_px: f64 = session.panels().map(|p| p.signed_area().abs()).sum();
    let px_to_mm = |px: f64| panelcut_core::px_to_mm(px, dpi);

    println!("Design: {}", design.metadata.name);
    println!("  Version:  {}", design.version);
    println!("  Created:  {}", design.metadata.created.format("%Y-%m-%d %H:%M:%S UTC"));
    if !design.metadata.description.is_empty() {
        println!("  About:    {}", design.metadata.description);
    }
    println!(
        "  Page:     {} x {} mm at {} dpi",
        config.width_mm, config.height_mm, dpi
    );
    println!("  Mode:     {}", config.mode);
    println!("  Panels:   {}", session.store().len());
    for (index, panel) in session.panels().enumerate() {
        let bbox = panel.bounding_box();
        println!(
            "    #{:<3} {} points, {:.1} x {:.1} mm",
            index + 1,
            panel.len(),
            px_to_mm(bbox.width()),
            px_to_mm(bbox.height())
        );
    }
    println!(
        "  Area:     {:.1} mm2",
        px_to_mm(1.0) * px_to_mm(1.0) * area_px
    );

    Ok(())
}
