//! Replay a TOML script of text box events and print what the box shows
//! after each one.
//!
//! ```text
//! textbox demos/typing.toml
//! RUST_LOG=input_core=trace TEXTBOX_COLUMNS=8 textbox demos/typing.toml
//! ```

use anyhow::{Context, Result, bail};
use input_core::{TextBoxConfig, TextBoxEvent, TextWindowTracker};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Overrides `config.visible_columns` from the script.
const COLUMNS_ENV: &str = "TEXTBOX_COLUMNS";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Script {
    #[serde(default)]
    config: TextBoxConfig,
    #[serde(default)]
    text: String,
    events: Vec<TextBoxEvent>,
}

fn parse_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key).ok().as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .with_context(|| format!("unsupported {key} value '{raw}'; expected a column count")),
    }
}

fn load_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse script {}", path.display()))
}

fn print_frame(step: usize, event: &TextBoxEvent, tb: &TextWindowTracker) {
    let window = tb.window();
    println!(
        "{step:>4}  caret={:<4} window=[{},{})  |{}|  <- {event:?}",
        tb.caret(),
        window.start,
        window.end,
        tb.render()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("usage: textbox <script.toml>");
    };
    if args.next().is_some() {
        bail!("usage: textbox <script.toml>");
    }

    let mut script = load_script(&path)?;
    if let Some(columns) = parse_env_usize(COLUMNS_ENV)? {
        log::info!("{COLUMNS_ENV} overrides visible columns: {columns}");
        script.config.visible_columns = columns;
    }

    let mut tb = TextWindowTracker::with_text(script.config, &script.text);
    let mut rejected = 0usize;
    for (i, event) in script.events.iter().enumerate() {
        match tb.apply(event) {
            Ok(()) => print_frame(i + 1, event, &tb),
            Err(err) => {
                rejected += 1;
                log::warn!("event {} rejected: {err}", i + 1);
                println!("{:>4}  rejected: {err}  <- {event:?}", i + 1);
            }
        }
    }

    println!("final value: {:?} ({} characters)", tb.text(), tb.len());
    log::debug!(
        "replayed {} events from {} ({rejected} rejected)",
        script.events.len(),
        path.display()
    );
    Ok(())
}
