mod args;
#[cfg(feature = "window")]
mod host;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use wirescope::prelude::*;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ViewerConfig {
        viewport: Viewport::new(args.width, args.height),
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::with_shape(config, args.shape.into());
    viewer.set_auto_rotate(args.auto_rotate);

    if let Some(path) = &args.model {
        if let Err(e) = viewer.load_mesh_file(path) {
            error!("Error loading model: {}", e);
        }
    }

    #[cfg(feature = "window")]
    if !args.headless {
        return host::run(&mut viewer, &args);
    }

    render_headless(&mut viewer, &args)
}

fn render_headless(viewer: &mut Viewer, args: &Args) -> anyhow::Result<()> {
    let mut renderer = Renderer::new(args.width, args.height);
    viewer.draw(&mut renderer, Viewport::new(args.width, args.height));
    renderer
        .save_png(&args.screenshot)
        .with_context(|| format!("writing {}", args.screenshot.display()))?;
    info!("{} -> {}", viewer.summary(), args.screenshot.display());
    Ok(())
}
