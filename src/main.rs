//! crimicam - surveillance app shell
//!
//! A TUI front-end for Crimicam: login, signup and the home dashboard.
//!
//! Features:
//! - Login and signup forms with password visibility toggle
//! - Home dashboard with Camera and Monitor feature cards
//! - Recent activity list
//! - Navigation drawer with account info and logout
//!
//! Usage: crimicam [--theme NAME] [--no-transitions]

mod app;
mod config;
mod fields;
mod logging;
mod nav;
mod screens;
mod services;
mod tasks;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use config::{Config, ThemeName};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use services::Services;
use std::io::stdout;
use std::time::{Duration, Instant};

/// Command line options layered over the config file
#[derive(Debug, Default, PartialEq)]
struct Args {
    help: bool,
    version: bool,
    theme: Option<ThemeName>,
    no_transitions: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--version" => parsed.version = true,
            "--no-transitions" => parsed.no_transitions = true,
            "-t" | "--theme" => {
                let name = iter.next().context("--theme needs a value")?;
                parsed.theme = Some(
                    ThemeName::from_arg(name)
                        .with_context(|| format!("Unknown theme {:?}", name))?,
                );
            }
            other => bail!("Unknown argument {:?} (see --help)", other),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args)?;

    if args.help {
        print_help();
        return Ok(());
    }

    if args.version {
        println!("crimicam {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app(args);

    // Always try to restore terminal state, even on error
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"crimicam - Surveillance App Shell

USAGE:
    crimicam [OPTIONS]

OPTIONS:
    -t, --theme NAME     Theme: dark, light or transparent
        --no-transitions Disable the fade between screens
    -h, --help           Print help information
    -v, --version        Print version information

KEYBINDINGS:
    Tab / Shift+Tab      Move focus
    Enter                Select / submit
    Ctrl+R               Show or hide password
    Esc                  Back (closes the menu on Home)
    m                    Open menu (Home)
    j/k                  Scroll (Home)
    Ctrl+C               Quit

CONFIG:
    ~/.config/crimicam/config.toml

LOGS:
    CRIMICAM_LOG=debug overrides the configured log level
"#
    );
}

fn run_app(args: Args) -> Result<()> {
    // Load configuration
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.no_transitions {
        config.navigation.transitions = false;
    }

    let log_path = logging::init(&config.logging).context("Failed to set up logging")?;
    eprintln!("Logging to {}", log_path.display());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = config.theme.as_str(),
        "starting"
    );

    let mut app = App::new(config, Services::placeholder());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Crimicam"))
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("exiting");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Deferred tasks, timers and transitions
        app.tick(Instant::now());

        // Render UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            ui::render(frame, app);
        })?;

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("crimicam")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(&args(&["--theme", "light", "--no-transitions"])).unwrap();
        assert_eq!(parsed.theme, Some(ThemeName::Light));
        assert!(parsed.no_transitions);
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(parse_args(&args(&["--dry-run"])).is_err());
        assert!(parse_args(&args(&["--theme"])).is_err());
        assert!(parse_args(&args(&["--theme", "neon"])).is_err());
    }
}
