//! Terminal front end for the glyphcast pipeline: parse flags, detect
//! the terminal geometry, run the pipeline and draw the result.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use glyphcast::debug::{FileSink, NoopSink};
use glyphcast::{DefaultTheme, RenderConfig, load_image, render_frame};

use crate::render::BackgroundColor;

/// Geometry used when the terminal size cannot be detected.
const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Background {
    #[default]
    None,
    Black,
    White,
}

impl From<Background> for BackgroundColor {
    fn from(bg: Background) -> Self {
        match bg {
            Background::None => BackgroundColor::None,
            Background::Black => BackgroundColor::Black,
            Background::White => BackgroundColor::White,
        }
    }
}

/// Render an image in the terminal as characters with edge-aware glyphs
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Image-to-terminal glyph renderer", long_about = None)]
struct Args {
    /// Path of the image to render
    image: PathBuf,

    /// Gradient magnitude above which a cell becomes an edge glyph
    #[arg(long, default_value_t = 95.0)]
    edge_cutoff: f32,

    /// Narrow Gaussian spread of the edge-enhancement filter
    #[arg(long, default_value_t = 0.5)]
    sigma1: f32,

    /// Wide Gaussian spread of the edge-enhancement filter
    #[arg(long, default_value_t = 1.5)]
    sigma2: f32,

    /// Background fill behind the rendered glyphs
    #[arg(long, value_enum, default_value = "none")]
    bg: Background,

    /// Color each glyph with the sampled image color
    #[arg(long)]
    color: bool,

    /// Override the detected terminal width, in columns
    #[arg(long)]
    columns: Option<u16>,

    /// Override the detected terminal height, in rows
    #[arg(long)]
    rows: Option<u16>,

    /// Save intermediate pipeline artifacts for inspection
    #[arg(long)]
    debug: bool,

    /// Directory for debug artifacts
    #[arg(long, default_value = "debug_output")]
    debug_dir: PathBuf,
}

fn terminal_geometry(args: &Args) -> (u32, u32) {
    let (detected_columns, detected_rows) = crossterm::terminal::size().unwrap_or_else(|err| {
        log::warn!(
            "could not detect terminal size, using {DEFAULT_COLUMNS}x{DEFAULT_ROWS}: {err}"
        );
        (DEFAULT_COLUMNS, DEFAULT_ROWS)
    });

    let columns = args.columns.unwrap_or(detected_columns);
    let rows = args.rows.unwrap_or(detected_rows);
    (u32::from(columns), u32::from(rows))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (columns, rows) = terminal_geometry(&args);
    log::debug!("terminal geometry: {columns}x{rows}");

    let source = load_image(&args.image)
        .with_context(|| format!("cannot load {}", args.image.display()))?;

    let config = RenderConfig {
        edge_cutoff: args.edge_cutoff,
        sigma1: args.sigma1,
        sigma2: args.sigma2,
        enable_color: args.color,
    };
    let theme = DefaultTheme;

    let frame = if args.debug {
        let sink = FileSink::new(&args.debug_dir).with_context(|| {
            format!("cannot create debug directory {}", args.debug_dir.display())
        })?;
        render_frame(&source, columns, rows, &config, &theme, &sink)?
    } else {
        render_frame(&source, columns, rows, &config, &theme, &NoopSink)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::draw(&mut out, &frame, args.bg.into(), args.color)?;
    out.flush()?;
    Ok(())
}
