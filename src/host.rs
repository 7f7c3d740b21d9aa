//! Windowed host shell: forwards SDL input to the viewer and presents frames.

use log::{error, info};
use wirescope::colors;
use wirescope::prelude::*;
use wirescope::window::{FrameLimiter, Key, Window, WindowEvent};

use crate::args::Args;

pub fn run(viewer: &mut Viewer, args: &Args) -> anyhow::Result<()> {
    let mut window =
        Window::new("wirescope", args.width, args.height).map_err(anyhow::Error::msg)?;
    let mut renderer = Renderer::new(args.width, args.height);
    let mut limiter = FrameLimiter::new(&window, viewer.config().tick_period);
    let mut status: Option<String> = None;
    let mut title = String::new();

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h).map_err(anyhow::Error::msg)?;
                    renderer.resize(w, h);
                }
                WindowEvent::PointerDown { x, y, clicks } => {
                    viewer.on_pointer_press(x as f64, y as f64, clicks)
                }
                WindowEvent::PointerUp => viewer.on_pointer_drag_end(),
                WindowEvent::PointerMotion { x, y, held: true } => {
                    viewer.on_pointer_move(x as f64, y as f64)
                }
                WindowEvent::PointerMotion { x, y, held: false } => {
                    viewer.on_pointer_hover(x as f64, y as f64)
                }
                WindowEvent::Wheel(notches) => viewer.on_wheel(notches as f64),
                WindowEvent::Key(key) => {
                    status = handle_key(viewer, &renderer, args, key);
                }
            }
        }

        viewer.tick();

        renderer.clear(colors::BACKGROUND);
        let viewport = Viewport::new(renderer.width(), renderer.height());
        viewer.draw(&mut renderer, viewport);
        window
            .present(renderer.as_bytes())
            .map_err(anyhow::Error::msg)?;

        let next_title = window_title(viewer, status.as_deref());
        if next_title != title {
            window.set_title(&next_title).map_err(anyhow::Error::msg)?;
            title = next_title;
        }

        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

/// Runs a key action; returns a message for the title bar if it failed.
fn handle_key(viewer: &mut Viewer, renderer: &Renderer, args: &Args, key: Key) -> Option<String> {
    match key {
        Key::ChangeShape => {
            viewer.change_shape();
        }
        Key::Reload => match &args.model {
            Some(path) => {
                if let Err(e) = viewer.load_mesh_file(path) {
                    return Some(format!("Error loading model: {}", e));
                }
            }
            None => return Some("no --model to load".to_string()),
        },
        Key::CloseModel => {
            if viewer.has_model() {
                viewer.close_and_restore_default();
            }
        }
        Key::Reset => viewer.reset(),
        Key::AutoRotate => {
            viewer.toggle_auto_rotate();
        }
        Key::Screenshot => match renderer.save_png(&args.screenshot) {
            Ok(()) => info!("saved {}", args.screenshot.display()),
            Err(e) => {
                error!("screenshot failed: {}", e);
                return Some(format!("Screenshot failed: {}", e));
            }
        },
    }
    None
}

fn window_title(viewer: &Viewer, status: Option<&str>) -> String {
    let source = if viewer.has_model() {
        "model".to_string()
    } else {
        viewer.shape().to_string()
    };
    match status {
        Some(message) => format!("wirescope - {} - {}", source, message),
        None => format!("wirescope - {} - {}", source, viewer.summary()),
    }
}
