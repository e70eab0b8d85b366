//! Headless trace replay for the spin viewer.
//!
//! ```text
//! spinview <trace.json> [options.toml]
//! spinview --list-presets <dir>
//! ```
//!
//! The trace is a JSON array of pointer events, e.g.
//! `[{"kind": "down", "x": 100}, {"kind": "move", "x": 94}, {"kind": "up"}]`.
//! Every committed frame step is logged; run with `RUST_LOG=debug` to also
//! see session start/end.

use std::path::Path;

use spinview::input::PointerEvent;
use spinview::options::Options;
use spinview::surface::HeadlessSurface;
use spinview::{SpinError, SpinViewer};

const USAGE: &str =
    "Usage: spinview <trace.json> [options.toml] | spinview --list-presets <dir>";

fn parse_trace(content: &str) -> Result<Vec<PointerEvent>, SpinError> {
    serde_json::from_str(content).map_err(|e| SpinError::TraceParse(e.to_string()))
}

fn load_trace(path: &Path) -> Result<Vec<PointerEvent>, SpinError> {
    let content = std::fs::read_to_string(path)?;
    parse_trace(&content)
}

/// Feed `events` to a headless viewer and return the final frame index.
fn replay_events(
    options: Options,
    events: &[PointerEvent],
) -> Result<usize, SpinError> {
    let mut viewer = SpinViewer::from_options(options, |_| HeadlessSurface::new())?;
    let mut steps = 0usize;
    for (position, event) in events.iter().enumerate() {
        if let Some(index) = viewer.handle_event(*event)? {
            steps += 1;
            log::info!("event {position}: frame {index}/{}", viewer.total_frames());
        }
    }

    log::info!(
        "replayed {} events, {steps} steps, final frame {}",
        events.len(),
        viewer.current_index()
    );
    Ok(viewer.current_index())
}

fn replay(trace_path: &Path, options_path: Option<&Path>) -> Result<usize, SpinError> {
    let options = match options_path {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options from {}", path.display());
            options
        }
        None => Options::default(),
    };
    let events = load_trace(trace_path)?;
    replay_events(options, &events)
}

fn list_presets(dir: &Path) {
    let names = Options::list_presets(dir);
    if names.is_empty() {
        log::info!("No presets in {}", dir.display());
    }
    for name in names {
        log::info!("{name}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        log::error!("{USAGE}");
        std::process::exit(1);
    };

    if first == "--list-presets" {
        let Some(dir) = args.next() else {
            log::error!("{USAGE}");
            std::process::exit(1);
        };
        list_presets(Path::new(&dir));
        return;
    }

    let options = args.next();
    if let Err(e) = replay(Path::new(&first), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
