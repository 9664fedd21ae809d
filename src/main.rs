use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::assets::AssetLoader;
use flapper::audio::{Muted, SoundPlayer, TerminalBell};
use flapper::clock::{Clock, MonotonicClock};
use flapper::config::CONFIG_FILE;
use flapper::constants::{MIN_PLAY_COLS, MIN_PLAY_ROWS};
use flapper::input::map_key;
use flapper::observer::FrameStats;
use flapper::ui::{game_layout, render_game};
use flapper::utils::persistence;
use flapper::{build_info, logging, GameConfig, InputResult, Session, TerminalPolicy};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config_path: Option<PathBuf>,
    mute: bool,
    stall: bool,
}

enum CliAction {
    Run(CliOptions),
    Exit(i32),
}

const HELP: &str = "Flapper - terminal side-scroller

Usage: flapper [options]

Options:
  --config <path>  Read settings from <path> instead of ~/.flapper/config.json
  --mute           Disable the terminal bell
  --stall          Stall on the ground instead of ending the run
  --version        Show version information
  --help           Show this help message

Controls: Space/Up flap, Enter retry, Q quit";

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(CliAction::Exit(0));
            }
            "--help" | "-h" => {
                println!("{}", HELP);
                return Ok(CliAction::Exit(0));
            }
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config needs a path".to_string())?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--mute" => options.mute = true,
            "--stall" => options.stall = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(CliAction::Run(options))
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Exit(code)) => std::process::exit(code),
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flapper --help' for usage.");
            std::process::exit(2);
        }
    };

    let loaded = GameConfig::load(options.config_path.as_deref());
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => GameConfig::default(),
    };
    if options.mute {
        config.audio.enabled = false;
    }
    if options.stall {
        config.physics.terminal_policy = TerminalPolicy::Stall;
    }

    match logging::init_or_warn(&config.logging) {
        Some(path) => log::info!(
            "{} starting, logging to {}",
            build_info::version_line(),
            path.display()
        ),
        None => eprintln!("{} starting", build_info::version_line()),
    }
    if let Err(e) = loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    } else if options.config_path.is_none() {
        write_default_config();
    }

    // Sprites load in the background; frames are skipped until they arrive
    let loader = AssetLoader::spawn(config.display.asset_dir.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, loader);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game loop failed: {}", e);
    }
    log::info!("Exiting");
    result
}

/// Leave a default ~/.flapper/config.json behind on first run so there is a file to edit.
fn write_default_config() {
    let path = match persistence::data_path(CONFIG_FILE) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("No config directory: {}", e);
            return;
        }
    };
    match GameConfig::write_default_if_missing(&path) {
        Ok(true) => log::info!("Wrote default config to {}", path.display()),
        Ok(false) => {}
        Err(e) => log::warn!("Failed to write default config: {}", e),
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
    mut loader: AssetLoader,
) -> io::Result<()> {
    // Viewport is measured once; resizing the terminal only rescales the picture
    let layout = game_layout(terminal.size()?, config.display.show_info_panel);
    let cols = layout.content.width.max(MIN_PLAY_COLS);
    let rows = layout.content.height.max(MIN_PLAY_ROWS);
    let viewport = config.viewport(cols, rows);
    log::info!(
        "Viewport {:.0}x{:.0} units over {}x{} cells",
        viewport.width,
        viewport.height,
        cols,
        rows
    );

    let sound: Box<dyn SoundPlayer> = if config.audio.enabled {
        Box::new(TerminalBell::stdout(config.audio.bell_on_flap))
    } else {
        Box::new(Muted)
    };

    let mut session = Session::new(
        config.physics(),
        viewport,
        config.obstacle_set(),
        sound,
        FrameStats::new(),
    );

    let clock = MonotonicClock::start();
    let frame_interval = Duration::from_millis(config.display.frame_interval_ms);
    let mut next_frame = Instant::now();

    loop {
        loader.poll();
        session.frame(loader.pack(), clock.now_ms());

        terminal.draw(|frame| {
            render_game(
                frame,
                frame.size(),
                &session,
                loader.pack(),
                config.display.show_info_panel,
            );
        })?;

        next_frame += frame_interval;

        // Handle input until the next frame is due
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key_event) = event::read()? {
                if session.handle_input(map_key(key_event)) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        // Fell behind (suspended terminal, slow draw): don't try to catch up
        let now = Instant::now();
        if now > next_frame + frame_interval {
            next_frame = now;
        }
    }
}
