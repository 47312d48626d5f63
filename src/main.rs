//! Terminal runner (default binary).
//!
//! Reads key presses and menu clicks with crossterm, advances the engine in fixed 16ms steps
//! and redraws through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::info;

use tui_blockfall::core::{EngineConfig, FixedTimestep, GameSnapshot, GameState};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_LEVEL, TICK_MS};

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tui-blockfall",
    version,
    about = "Falling-block puzzle game in the terminal.",
    long_about = "Pick a starting level, then steer falling pieces into full rows.\n\n\
        CONTROLS:\n  Left/Right (h/l)  Move    Up (k)     Rotate    Down (j)  Move down\n  \
        Space             Drop    R          Restart after game over\n  \
        Q / Esc           Quit    Click      Pick a level or START on the menu"
)]
struct Args {
    /// Starting level preselected on the menu (1-10).
    #[arg(short, long, default_value_t = MIN_LEVEL as u16, value_name = "N")]
    level: u16,

    /// Playfield width in columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH as u16, value_name = "COLS")]
    width: u16,

    /// Playfield height in rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT as u16, value_name = "ROWS")]
    height: u16,

    /// Seed for piece selection; omit for a random game.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Skip the level-select screen and start immediately.
    #[arg(long)]
    no_menu: bool,

    /// Write logs to this file (filter with RUST_LOG, default "info").
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = EngineConfig::from_parts(args.width, args.height, args.level, args.seed)
        .context("invalid game configuration")?;
    let mut game = GameState::new(config)?;
    info!(
        "tui-blockfall {}: {}x{} field, level {}",
        env!("CARGO_PKG_VERSION"),
        config.width,
        config.height,
        config.starting_level
    );
    if args.no_menu {
        game.start(config.starting_level);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Stderr is unusable while the game owns the terminal, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut timestep = FixedTimestep::default();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        if event::poll(timestep.until_next())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, game.mode()) {
                        game.apply_action(action);
                    }
                }
                // Hit-test against the frame that is on screen.
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let viewport = Viewport::new(w, h);
                    if let Some(action) = view.hit_test(&snap, viewport, column, row) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let steps = timestep.advance(now - last_frame);
        last_frame = now;
        for _ in 0..steps {
            game.tick(TICK_MS);
        }
    }
}
