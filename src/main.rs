use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use scroll_dispatch::config::{self, Config};
use scroll_dispatch::demo::DemoApp;

/// Two infinite-scroll feeds sharing one debounced scroll dispatcher
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Two infinite-scroll feeds sharing one debounced scroll dispatcher"
)]
struct Args {
    /// Quiet period in milliseconds before a scroll is dispatched
    #[arg(long, value_name = "MS")]
    quiet_period: Option<u64>,

    /// Percentage of the scrollable distance that triggers loading more items
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    trigger: Option<f64>,

    /// Items loaded per page
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,
}

fn main() -> Result<()> {
    // Writes to /tmp/scroll-dispatch-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scroll-dispatch-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SCROLL-DISPATCH DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config;
    apply_overrides(&mut config, &args);

    let mut app = DemoApp::new(&config);
    app.status = config_result.warning;

    let terminal = init_terminal()?;
    let result = run(terminal, &mut app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLL-DISPATCH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command line flags win over the config file
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(quiet_period) = args.quiet_period {
        config.dispatch.quiet_period_ms = quiet_period;
    }
    if let Some(trigger) = args.trigger {
        config.dispatch.trigger_percentage = trigger;
    }
    if let Some(page_size) = args.page_size {
        config.feed.page_size = page_size;
    }
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut DemoApp) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Wake up in time for a pending dispatch
        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
