use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wirescope::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use wirescope::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Cube,
    Pyramid,
    TruncatedPyramid,
    Sphere,
}

impl From<ShapeArg> for ShapeKind {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Cube => ShapeKind::Cube,
            ShapeArg::Pyramid => ShapeKind::Pyramid,
            ShapeArg::TruncatedPyramid => ShapeKind::TruncatedPyramid,
            ShapeArg::Sphere => ShapeKind::Sphere,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Model file with `v`/`f` records to open at startup.
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Built-in shape shown while no model is open.
    #[arg(short, long, value_enum, default_value_t = ShapeArg::Cube)]
    pub shape: ShapeArg,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Start with auto-rotation enabled.
    #[arg(long)]
    pub auto_rotate: bool,

    /// Where frames are saved as PNG (the P key, or the headless frame).
    #[arg(long, default_value = "wirescope.png")]
    pub screenshot: PathBuf,

    /// Render a single frame to `--screenshot` without opening a window.
    #[arg(long)]
    pub headless: bool,
}
