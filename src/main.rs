use rql_editor::{HighlightEngine, Result, Theme, config};
use std::io::{Read as _, Write as _};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Highlight an RQL file (or stdin) and print one line per token.
fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let theme = match &config().theme {
        Some(path) => {
            info!("Loading theme from {}", path.display());
            Theme::load(path)?
        }
        None => Theme::default(),
    };
    let engine = HighlightEngine::new(&theme.editor)?;

    let source = match std::env::args_os().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!("Highlighting {} bytes", source.len());

    let mut out = std::io::stdout().lock();
    for token in engine.tokens(&source) {
        let style = engine.text_style(token.style);
        writeln!(
            out,
            "{:>5}..{:<5} {:<16} {}{} {:?}",
            token.start,
            token.end,
            token.style,
            style.color,
            if style.bold { " bold" } else { "" },
            token.text(&source),
        )?;
    }
    if engine.starts_multiline_string(&source) {
        info!("Source opens a triple-quoted string; only the opening is highlighted");
    }
    Ok(())
}
