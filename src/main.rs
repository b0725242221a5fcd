use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use recent_queries::config::{self, Config};
use recent_queries::recent::view::SuggestionKind;
use recent_queries::recent::{EventResponse, SearchEvent};
use recent_queries::{App, QueryStorage, RecentQueries};

/// Track recent search queries and offer them back as suggestions
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Track recent search queries and offer them back as suggestions"
)]
struct Args {
    /// Store the list in the cookie jar instead of local storage
    #[arg(long, global = true)]
    cookies: bool,

    /// Maximum number of queries to keep
    #[arg(long, global = true, value_name = "N")]
    max: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record an executed search
    Add {
        query: String,
        /// Number of results the search returned; searches without results are not recorded
        #[arg(long, default_value_t = 1)]
        results: usize,
    },
    /// Remove a stored query
    Remove { query: String },
    /// Print the stored queries, most recent first
    List {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the suggestions offered for typed text
    Suggest { text: String },
    /// Remove every stored query
    Clear,
    /// Browse stored queries interactively (default)
    Browse,
}

fn main() -> Result<()> {
    // Writes to /tmp/recent-queries-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_logging();

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config;
    let mut warnings: Vec<String> = config_result.warning.into_iter().collect();
    apply_overrides(&mut config, &args, &mut warnings);

    match args.command {
        None => browse(&config, warnings.into_iter().next()),
        Some(command) => {
            for warning in &warnings {
                eprintln!("Warning: {}", warning);
            }
            run_command(command, &config)
        }
    }
}

#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/recent-queries-debug.log")
    else {
        return;
    };

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

    log::debug!("=== RECENT-QUERIES DEBUG SESSION STARTED ===");
}

/// Command line flags win over the config file
fn apply_overrides(config: &mut Config, args: &Args, warnings: &mut Vec<String>) {
    if args.cookies {
        config.use_cookies = true;
    }
    if let Some(max) = args.max {
        config.number_of_queries = max;
        if let Some(warning) = config.validate() {
            warnings.push(warning);
        }
    }
}

fn run_command(command: Command, config: &Config) -> Result<()> {
    let storage = QueryStorage::from_config(config);
    let mut recent = RecentQueries::new(config, storage);

    match command {
        Command::Add { query, results } => {
            recent.handle(SearchEvent::QuerySuccess {
                query: &query,
                result_count: results,
            });
            print_list(recent.queries());
        }
        Command::Remove { query } => {
            recent.remove(&query);
            print_list(recent.queries());
        }
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string(recent.queries())?);
            } else {
                print_list(recent.queries());
            }
        }
        Command::Suggest { text } => {
            if let EventResponse::Suggestions(group) =
                recent.handle(SearchEvent::PopulateSuggestions { typed_text: &text })
            {
                for entry in &group.entries {
                    match entry.kind {
                        SuggestionKind::Header => println!("[{}]", entry.label),
                        SuggestionKind::Query => println!("{}", entry.text),
                    }
                }
            }
        }
        Command::Clear => recent.clear(),
        Command::Browse => browse(config, None)?,
    }

    Ok(())
}

fn print_list(queries: &[String]) {
    for query in queries {
        println!("{}", query);
    }
}

fn browse(config: &Config, warning: Option<String>) -> Result<()> {
    let mut app = App::new(config);
    app.warning = warning;

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(query) = app.output() {
        println!("{}", query);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== RECENT-QUERIES DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
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
