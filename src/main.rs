mod app;
mod browser;
mod config;
mod faq;
mod resolver;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use app::App;
use browser::{Browser, SystemBrowser};
use config::{AppConfig, ConfigStore, MemoryStore, ThemeStore};
use resolver::Thumbnail;

#[derive(Parser, Debug)]
#[command(name = "thumbgrab")]
#[command(version)]
#[command(about = "Grab the max-resolution thumbnail of a YouTube video")]
struct Args {
    /// YouTube link to resolve; launches the TUI when omitted
    url: Option<String>,

    /// Open the thumbnail in the default browser
    #[arg(short, long, requires = "url")]
    open: bool,

    /// Print the result as JSON
    #[arg(short, long, requires = "url")]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogTarget {
    /// The TUI owns the terminal, so it logs to a file under the cache dir
    fn choose(tui: bool, cache_dir: Option<PathBuf>) -> Self {
        if !tui {
            return LogTarget::Stderr;
        }
        match cache_dir {
            Some(dir) => LogTarget::File(dir.join("thumbgrab").join("thumbgrab.log")),
            None => LogTarget::Off,
        }
    }
}

fn init_logging(target: LogTarget) {
    let fmt_layer = match target {
        // stderr keeps stdout clean for URL/JSON output
        LogTarget::Stderr => Some(tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()),
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()
                .map(|file| {
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .boxed()
                })
        }
        LogTarget::Off => None,
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LogTarget::choose(args.url.is_none(), dirs::cache_dir()));

    // Handle CLI-only commands
    if let Some(url) = args.url.as_deref() {
        return print_thumbnail(url, args.open, args.json);
    }

    run_tui(open_store(args.config))
}

fn open_store(path: Option<PathBuf>) -> Box<dyn ThemeStore> {
    match path.map(Ok).unwrap_or_else(AppConfig::default_path) {
        Ok(path) => {
            let store = ConfigStore::open(path);
            tracing::debug!("Using config {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("{}; theme will not be saved", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn print_thumbnail(input: &str, open: bool, json: bool) -> Result<()> {
    let thumb = resolver::resolve(input)?;

    println!("{}", render_output(input, &thumb, json)?);

    if open {
        SystemBrowser.open(&thumb.url)?;
    }
    Ok(())
}

/// JSON form of a resolved link for `--json`
fn thumbnail_json(input: &str, thumb: &Thumbnail) -> serde_json::Value {
    serde_json::json!({
        "input": input,
        "kind": thumb.kind,
        "video_id": thumb.video_id,
        "thumbnail_url": thumb.url,
    })
}

/// The line printed to stdout in CLI mode
fn render_output(input: &str, thumb: &Thumbnail, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&thumbnail_json(input, thumb))?)
    } else {
        Ok(thumb.url.clone())
    }
}

fn run_tui(store: Box<dyn ThemeStore>) -> Result<()> {
    let mut app = App::new(store, Box::new(SystemBrowser), theme::detect_ambient_dark);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if app.can_quit_on_q() => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    _ => {
                        if let Err(e) = app.handle_key(key) {
                            app.set_status(format!("Error: {}", e));
                        }
                    }
                },
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }

        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_url_mode() {
        let args = Args::try_parse_from(["thumbgrab", "--json", "https://youtu.be/abc"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://youtu.be/abc"));
        assert!(args.json);
        assert!(!args.open);
    }

    #[test]
    fn test_open_requires_url() {
        assert!(Args::try_parse_from(["thumbgrab", "--open"]).is_err());
        let args = Args::try_parse_from(["thumbgrab", "--config", "/tmp/x.toml"]).unwrap();
        assert!(args.url.is_none());
        assert_eq!(args.config, Some(PathBuf::from("/tmp/x.toml")));
    }

    #[test]
    fn test_thumbnail_json_keys_and_values() {
        let input = "https://youtu.be/dQw4w9WgXcQ?t=5";
        let thumb = resolver::resolve(input).unwrap();
        let value = thumbnail_json(input, &thumb);

        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["input", "kind", "thumbnail_url", "video_id"]);

        assert_eq!(value["input"], input);
        assert_eq!(value["kind"], "short");
        assert_eq!(value["video_id"], "dQw4w9WgXcQ");
        assert_eq!(
            value["thumbnail_url"],
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_plain_output_is_bare_url() {
        let input = "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1";
        let thumb = resolver::resolve(input).unwrap();
        assert_eq!(
            render_output(input, &thumb, false).unwrap(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );

        let json = render_output(input, &thumb, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["kind"], "watch");
    }

    #[test]
    fn test_tui_never_logs_to_stderr() {
        let cache = PathBuf::from("/tmp/cache");
        assert_eq!(
            LogTarget::choose(true, Some(cache.clone())),
            LogTarget::File(cache.join("thumbgrab").join("thumbgrab.log"))
        );
        assert_eq!(LogTarget::choose(true, None), LogTarget::Off);
        assert_eq!(LogTarget::choose(false, Some(cache)), LogTarget::Stderr);
    }

    #[test]
    fn test_print_thumbnail_rejects_bad_link() {
        let err = print_thumbnail("not a url", false, false).unwrap_err();
        assert_eq!(err.to_string(), resolver::INVALID_LINK_PROMPT);
    }
}
