//! Flag Quiz - timed terminal game: name the country behind each flag
//!
//! Single-session, self-contained CLI application.
//! The quiz core is a pure state machine; this file owns the event loop,
//! the timer scheduler and the terminal.

mod cli;
mod quiz;

use clap::{Parser, ValueEnum};
use cli::display::Display;
use cli::input::{Action, InputHandler};
use quiz::{
    CountryCatalog, DatasetProvider, Difficulty, Event, Game, Language, MachineState, QuizError,
    Scheduler,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LangArg {
    Es,
    En,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Es => Language::Spanish,
            LangArg::En => Language::English,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<ModeArg> for Difficulty {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Easy => Difficulty::Easy,
            ModeArg::Medium => Difficulty::Medium,
            ModeArg::Hard => Difficulty::Hard,
            ModeArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "Flag Quiz")]
#[command(about = "Guess the country from its flag before the clock runs out")]
struct Args {
    /// Path to the country dataset (JSON)
    #[arg(short, long, default_value = "data/countries.json")]
    countries: PathBuf,

    /// Initial display language
    #[arg(short, long, value_enum, default_value = "es")]
    lang: LangArg,

    /// Skip the menu and start this mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for a reproducible round order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn Error>> {
    let default_directive = if args.debug {
        "flag_quiz=debug"
    } else {
        "flag_quiz=warn"
    };
    let filter = EnvFilter::from_default_env().add_directive(default_directive.parse()?);

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Feed one event to the game and hand its effects to the scheduler,
/// timed from `base` (the fired deadline for timers, now for keys).
/// Returns whether anything changed.
fn dispatch(
    game: &mut Game<CountryCatalog, StdRng>,
    scheduler: &mut Scheduler,
    event: Event,
    base: Instant,
) -> Result<bool, QuizError> {
    match game.handle(event) {
        Ok(effects) => {
            scheduler.apply(effects, base);
            Ok(true)
        }
        Err(e) if e.is_ignorable() => {
            tracing::debug!(error = %e, "event dropped");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn render(display: &Display, game: &Game<CountryCatalog, StdRng>) -> Result<(), Box<dyn Error>> {
    let session = game.session();
    display.clear()?;
    display.show_header(session.language)?;

    match game.state() {
        MachineState::Idle => display.show_menu(session.language, game.dataset_len())?,
        MachineState::Countdown | MachineState::AwaitingFeedbackDisplay => {
            if let Some(round) = game.round() {
                display.show_round(session, round, game.rounds_left())?;
            }
            display.show_help(session.language, true)?;
        }
        MachineState::Finished => {
            if let Some(results) = session.results() {
                display.show_results(session.language, &results, session.rounds_completed())?;
            }
            display.show_help(session.language, false)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let catalog = CountryCatalog::load(&args.countries)?;
    if catalog.is_empty() {
        tracing::warn!(path = %args.countries.display(), "dataset is empty");
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(catalog, rng, args.lang.into());
    let mut scheduler = Scheduler::new();

    if let Some(mode) = args.mode {
        dispatch(
            &mut game,
            &mut scheduler,
            Event::SelectMode(mode.into()),
            Instant::now(),
        )?;
    }

    let display = Display;
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();
    let mut dirty = true;

    // Event loop
    'session: loop {
        for (deadline, event) in scheduler.take_due(Instant::now()) {
            dirty |= dispatch(&mut game, &mut scheduler, event, deadline)?;
        }

        if dirty {
            render(&display, &game)?;
            dirty = false;
        }

        let timeout = scheduler
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::MAX);

        if let Some(key) = input.read_key(timeout)? {
            match InputHandler::map_key(&key, game.state()) {
                Some(Action::Quit) => break 'session,
                Some(Action::Game(event)) => {
                    dirty |= dispatch(&mut game, &mut scheduler, event, Instant::now())?;
                }
                None => {}
            }
        }
    }

    // Cleanup
    InputHandler::disable_raw_mode()?;
    display.shutdown()?;

    let session = game.session();
    println!(
        "\nScore: {} | ✓ {} | ✗ {}",
        session.score, session.correct_count, session.error_count
    );

    Ok(())
}
