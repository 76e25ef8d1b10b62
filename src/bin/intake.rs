use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use excel_intake::error::{IntakeError, Result};
use excel_intake::event::{Event, EventHandler};
use excel_intake::intake::{FormResult, HostMode, IntakeAction, IntakeApp, IntakeConfig};
use ratatui::prelude::*;
use std::io::stdout;
use std::panic;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "excel-intake")]
#[command(author, version, about = "Request Excel help from the terminal")]
struct Args {
    /// Path to config file (default: <config dir>/excel-intake/intake.toml)
    #[arg(long)]
    config: Option<String>,

    /// Show the form inline instead of behind a "Start a Request" dialog
    #[arg(long)]
    inline: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

/// How the session ended
enum Exit {
    /// User chose "Create My Account"; carries the hand-off link
    Signup(String),
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging only if log file is specified
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if let Some(file) = file {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();

            info!("Starting excel-intake");
        }
    }

    let mut config = match args.config.as_deref() {
        Some(path) => IntakeConfig::load_from(path),
        None => IntakeConfig::load(),
    }
    .unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        IntakeConfig::default()
    });

    // --inline flag overrides config
    if args.inline {
        config.host.mode = HostMode::Inline;
    }

    // Set up panic handler to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = IntakeApp::new(config);

    let result = run(&mut terminal, &mut app).await;

    restore_terminal()?;

    let exit = match result {
        Ok(exit) => exit,
        Err(e) => {
            error!("Intake error: {}", e);
            return Err(e);
        }
    };

    report(&app, &exit)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| IntakeError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| IntakeError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| IntakeError::Terminal(e.to_string()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| IntakeError::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen)
        .map_err(|e| IntakeError::Terminal(e.to_string()))?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut IntakeApp,
) -> Result<Exit> {
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| excel_intake::intake::ui::draw(frame, app))
            .map_err(|e| IntakeError::Terminal(e.to_string()))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if let Some(IntakeAction::OpenSignup(link)) = app.handle_key(key) {
                        return Ok(Exit::Signup(link));
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(),
            }
        }

        if app.should_exit {
            break;
        }
    }

    Ok(Exit::Quit)
}

/// Print the outcome once the terminal is back to normal
fn report(app: &IntakeApp, exit: &Exit) -> Result<()> {
    if let Exit::Signup(link) = exit {
        println!("Create your account: {link}");
    }

    match app.results.last() {
        Some(FormResult::Submitted(submission)) => {
            println!();
            print!("{}", submission.to_toml()?);
        }
        Some(FormResult::Dismissed) => {
            println!("Request submitted; account creation skipped.");
        }
        None => info!("Exited without submitting a request"),
    }
    Ok(())
}
