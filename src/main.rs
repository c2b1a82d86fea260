use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use std::io::stdout;
use std::path::PathBuf;

use hyfi::app::App;
use hyfi::config::{self, Config, ConfigResult};
use hyfi::filter::{FilterProps, SelectionMode};
use hyfi::options::{FilterOption, OptionsReader};

/// Interactive hybrid single/multi-select filter
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick one or many options in the terminal and print the selection"
)]
struct Args {
    /// Options file: JSON array or one option per line (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Allow at most one selected option
    #[arg(long, conflicts_with = "multiple")]
    single: bool,

    /// Allow any number of selected options
    #[arg(long)]
    multiple: bool,

    /// In single mode, require Apply instead of committing on pick
    #[arg(long)]
    apply: bool,

    /// Hide the search input
    #[arg(long)]
    no_search: bool,

    /// Initially selected option value (repeatable)
    #[arg(long = "value", value_name = "ID")]
    values: Vec<String>,

    /// Print the selection as a JSON array
    #[arg(long)]
    json: bool,

    /// Title shown on the filter
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/hyfi-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/hyfi-debug.log")
            .expect("Failed to open /tmp/hyfi-debug.log");

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

        log::debug!("=== HYFI DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Options are read before the terminal is taken over so input errors print plainly
    let options = OptionsReader::read_options(args.input.as_deref())?;
    let props = filter_props(&args, &config_result.config, options);

    let mut app = App::new(props, &config_result.config).with_json_output(args.json);
    if let Some(title) = &args.title {
        app = app.with_title(title.as_str());
    }

    let (terminal, keyboard_enhanced) = init_terminal()?;
    let result = run(terminal, app, config_result);

    restore_terminal(keyboard_enhanced)?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== HYFI DEBUG SESSION ENDED ===");

    Ok(())
}

/// Merge command-line flags over the config file
fn filter_props(args: &Args, config: &Config, options: Vec<FilterOption>) -> FilterProps {
    let multiple = if args.single {
        false
    } else {
        args.multiple || config.filter.multiple
    };
    let commit_on_select = !args.apply && config.filter.commit_on_select;

    FilterProps {
        options,
        value: args.values.clone(),
        mode: SelectionMode::from_flags(multiple, commit_on_select),
        searchable: !args.no_search && config.filter.searchable,
    }
}

/// Initialize terminal with raw mode, alternate screen, mouse capture, focus reporting
/// and bracketed paste
///
/// Returns whether keyboard enhancement was enabled, which is what reports bare
/// modifier presses and releases.
fn init_terminal() -> Result<(DefaultTerminal, bool)> {
    enable_raw_mode()?;

    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_screen(keyboard_enhanced);
        let _ = disable_raw_mode();
        hook(info);
    }));

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    if keyboard_enhanced {
        let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
            | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES;
        let _ = execute!(stdout(), PushKeyboardEnhancementFlags(flags));
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok((terminal, keyboard_enhanced)),
        Err(e) => {
            leave_screen(keyboard_enhanced);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn leave_screen(keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

/// Restore terminal to normal state
fn restore_terminal(keyboard_enhanced: bool) -> Result<()> {
    leave_screen(keyboard_enhanced);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    // No output when aborted with Ctrl+C
    if let Some(text) = app.format_output()?
        && !text.is_empty()
    {
        println!("{}", text);
    }

    Ok(())
}
