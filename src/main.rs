//! Stratégos terminal runner (default binary).
//!
//! Blocks on terminal input, turns each key press into one intent and redraws
//! from a fresh snapshot after every event.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use strategos::cli::Cli;
use strategos::core::{GameSnapshot, TurnController};
use strategos::input::{handle_key_event, should_quit};
use strategos::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

/// File logging, only when asked for; stdout belongs to the renderer.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid --log-level filter {level:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))?;

    info!(path = %path.display(), "logging started");
    Ok(())
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    if !cli.skip_title && !show_title(term, &view, &mut fb)? {
        return Ok(());
    }
    term.invalidate();

    let mut ctl = TurnController::new();
    let mut snap = GameSnapshot::default();

    loop {
        ctl.snapshot_into(&mut snap);
        view.render_into(&snap, current_viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = handle_key_event(key) {
                    // Rejections stay on the controller and show up on the hint line.
                    let _ = ctl.apply(intent);
                }
                if ctl.quit_requested() {
                    return Ok(());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Title screen until any key; `false` when the player quit from it.
fn show_title(term: &mut TerminalRenderer, view: &GameView, fb: &mut FrameBuffer) -> Result<bool> {
    loop {
        view.render_title_into(current_viewport(), fb);
        term.draw_swap(fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(!should_quit(key)),
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
