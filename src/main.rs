mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use descent::core::constants::{LOG_ENV_VAR, LOG_FILE_NAME};
use descent::session::{GameSession, Reveal};
use descent::DescentConfig;
use input::{handle_key, InputResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::event_log::EventLog;

struct Options {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Descent - a slide-based dungeon crawler\n");
    println!("Usage: descent [options]\n");
    println!("Options:");
    println!("  --config <path>  Load generation policy and timings from a JSON file");
    println!("  --seed <n>       Seed the dungeon for a reproducible run");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nSet {}=debug to write a log to {}.", LOG_ENV_VAR, LOG_FILE_NAME);
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        config_path: None,
        seed: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("descent {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--config" => match iter.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config needs a path");
                    std::process::exit(1);
                }
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'descent --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_logging() -> io::Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV_VAR) else {
        return Ok(());
    };
    let file = File::create(LOG_FILE_NAME)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging()?;

    let mut config = match &options.config_path {
        Some(path) => match DescentConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => DescentConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?config.seed, "starting descent");
    let mut session = GameSession::new(config, rng);
    let mut log = EventLog::new();
    log.push("Floor 1");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut log);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession<StdRng>,
    log: &mut EventLog,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &*session, &*log))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match handle_key(key_event) {
                    InputResult::Quit => {
                        info!("player quit");
                        return Ok(());
                    }
                    InputResult::Intent(intent) => match session.apply(intent) {
                        Ok(events) => events.iter().for_each(|e| log.record(e)),
                        Err(rejected) => {
                            warn!(?intent, %rejected, "intent rejected");
                            log.push(format!("✋ {}", rejected));
                        }
                    },
                    InputResult::Ignored => {}
                }
            }
        }

        let delta = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        for reveal in session.tick(delta) {
            log.record_reveal(&reveal);
            if reveal == Reveal::RestartDue && session.is_game_over() {
                session.restart().iter().for_each(|e| log.record(e));
            }
        }
    }
}
