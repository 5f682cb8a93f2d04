//! Terminal minigames runner (default binary).
//!
//! Opens the portal (or a game given with `--game`), then runs a fixed-step
//! loop: render, read input, apply actions, tick. Rendering goes through the
//! framebuffer renderer in `minigames::term`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use arrayvec::ArrayVec;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use tracing::{debug, info};

use minigames::core::{ActiveGame, Game, GameOptions};
use minigames::host::{gesture_action, record_score};
use minigames::input::{is_back, map_key, map_menu_key, should_quit, GestureTracker};
use minigames::portal::{Catalog, Config, HighScores, MenuOutcome, PortalMenu};
use minigames::term::{FrameBuffer, GameView, Hud, PortalView, TerminalRenderer, Viewport};
use minigames::types::{GameAction, GameKind, MenuAction, TICK_MS};

/// Most actions applied in one frame; extra input in a burst is dropped
const MAX_FRAME_ACTIONS: usize = 32;

/// minigames - a terminal arcade of small grid games
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start this game instead of the portal (tetris, tetris-marathon, 2048,
    /// chain-reaction, jigsaw, jigsaw-swap, schulte, snake, snake-wrap)
    #[arg(short, long)]
    game: Option<String>,

    /// Fixed random seed (overrides MINIGAMES_SEED)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Catalog JSON file (overrides MINIGAMES_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory for highscores.json (overrides MINIGAMES_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Write logs to this file (overrides MINIGAMES_LOG)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Chain Reaction players (2-6)
    #[arg(short, long, default_value_t = 2)]
    players: u8,

    /// Jigsaw or Schulte grid size
    #[arg(long)]
    size: Option<u8>,

    /// Snake speed in steps per second (1-30)
    #[arg(long)]
    speed: Option<u32>,

    /// Smaller Chain Reaction board (8x8)
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.catalog {
            config = config.with_catalog_path(path);
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(path) = &self.log {
            config = config.with_log_path(path);
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// Back to the portal
    Back,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.apply(Config::from_env());
    init_logging(config.log_path.as_deref())?;

    let start = match &args.game {
        Some(slug) => Some(GameKind::from_slug(slug).ok_or_else(|| {
            let known: Vec<&str> = GameKind::ALL.iter().map(|k| k.slug()).collect();
            anyhow!("unknown game '{slug}', expected one of: {}", known.join(", "))
        })?),
        None => None,
    };

    let mut menu = PortalMenu::new(Catalog::load(config.catalog_path.as_deref()));
    let mut scores = HighScores::load(config.highscore_path());
    let options = GameOptions {
        players: args.players,
        size: args.size,
        speed: args.speed,
        compact: args.compact,
        ..GameOptions::default()
    };
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut menu, &mut scores, &config, options, start);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// stdout is the game screen, so logs only go to a file
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

/// Seed for one launch: the configured one, or fresh from the clock
fn launch_seed(config: &Config) -> u32 {
    config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)
    })
}

fn run(
    term: &mut TerminalRenderer,
    menu: &mut PortalMenu,
    scores: &mut HighScores,
    config: &Config,
    options: GameOptions,
    start: Option<GameKind>,
) -> Result<()> {
    let mut next = start;
    loop {
        let kind = match next.take() {
            Some(kind) => kind,
            None => match portal(term, menu, scores)? {
                Some(kind) => kind,
                None => return Ok(()),
            },
        };

        let options = GameOptions {
            seed: launch_seed(config),
            ..options
        };
        term.invalidate();
        let exit = play(term, kind, &options, scores)?;
        term.invalidate();
        if exit == Exit::Quit {
            return Ok(());
        }
    }
}

/// Portal screen; returns the game to launch, or `None` to quit
fn portal(
    term: &mut TerminalRenderer,
    menu: &mut PortalMenu,
    scores: &HighScores,
) -> Result<Option<GameKind>> {
    let view = PortalView;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(menu, scores, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => map_menu_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(MenuAction::Up),
                MouseEventKind::ScrollDown => Some(MenuAction::Down),
                _ => None,
            },
            Event::Resize(..) => {
                term.invalidate();
                None
            }
            _ => None,
        };
        let Some(action) = action else {
            continue;
        };
        match menu.apply(action) {
            MenuOutcome::Launch(kind) => return Ok(Some(kind)),
            MenuOutcome::Quit => return Ok(None),
            MenuOutcome::Updated | MenuOutcome::Unchanged => {}
        }
    }
}

/// Game screen; returns when the player leaves
fn play(
    term: &mut TerminalRenderer,
    kind: GameKind,
    options: &GameOptions,
    scores: &mut HighScores,
) -> Result<Exit> {
    let mut game = ActiveGame::new(kind, options);
    info!(game = kind.slug(), seed = options.seed, "game started");

    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut gestures = GestureTracker::new();
    let mut actions: ArrayVec<GameAction, MAX_FRAME_ACTIONS> = ArrayVec::new();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut finish_logged = false;
    // Best as it stood when the round began; the stored one follows the score live.
    let mut round_best = kind.highscore_key().map(|key| scores.get(key));

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud { best: round_best };
        let layout = view.render_into(&game, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        let mut timeout = tick_duration.saturating_sub(last_tick.elapsed());
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) || is_back(key) {
                        info!(game = kind.slug(), score = ?game.score(), "game left");
                        return Ok(if is_back(key) { Exit::Back } else { Exit::Quit });
                    }
                    if let Some(action) = map_key(kind, key) {
                        let _ = actions.try_push(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = gestures
                        .handle_mouse(mouse)
                        .and_then(|gesture| gesture_action(kind, gesture, &layout))
                    {
                        let _ = actions.try_push(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if actions.is_full() {
                break;
            }
        }

        for action in actions.drain(..) {
            if game.apply_action(action) {
                debug!(?action, "applied");
                if action == GameAction::Restart {
                    round_best = kind.highscore_key().map(|key| scores.get(key));
                }
            }
        }
        record_score(scores, &game);

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
            record_score(scores, &game);
        }

        let finished = game.status().is_finished();
        if finished && !finish_logged {
            info!(game = kind.slug(), status = ?game.status(), score = ?game.score(), "game finished");
        }
        finish_logged = finished;
    }
}
