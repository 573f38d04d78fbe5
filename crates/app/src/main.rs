use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use hunter_core::Catalog;
use hunter_core::level_for;
use services::{AppServices, ProgressStore};
use storage::Storage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://bug_hunter.sqlite3";
const DB_URL_ENV: &str = "BUG_HUNTER_DB_URL";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress_store(&self) -> ProgressStore {
        self.services.progress_store()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bug-hunter [ui]  [--db <sqlite_url>] [--verbose]");
    eprintln!("  bug-hunter status [--db <sqlite_url>]");
    eprintln!("  bug-hunter reset  [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    db_url: String,
    verbose: bool,
}

impl Args {
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut args = argv.into_iter().peekable();

        // No subcommand launches the UI.
        let command = match args.peek().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some(first) => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                args.next();
                command
            }
        };

        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.to_string());
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            command,
            db_url: normalize_sqlite_url(db_url),
            verbose,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), std::env::var(DB_URL_ENV).ok())
        .inspect_err(|_| print_usage())?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    init_logging(parsed.verbose);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let services = AppServices::from_storage(&storage)?;
    info!(db = %parsed.db_url, command = ?parsed.command, "storage ready");

    match parsed.command {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Bug Hunter")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            let progress = services.progress_store().load().await;
            let total = services.catalog().len();
            println!("score:     {}", progress.score());
            println!("level:     {}", level_for(progress.score()));
            println!("completed: {}/{total}", progress.bugs_fixed());
            Ok(())
        }
        Command::Reset => {
            services.progress_store().clear().await?;
            println!("progress reset");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn no_arguments_launch_the_ui_on_the_default_database() {
        let args = Args::parse(argv(&[]), None).unwrap().unwrap();
        assert_eq!(args.command, Command::Ui);
        assert!(args.db_url.starts_with("sqlite:///"));
        assert!(args.db_url.ends_with("bug_hunter.sqlite3"));
        assert!(!args.verbose);
    }

    #[test]
    fn flag_overrides_environment() {
        let args = Args::parse(
            argv(&["status", "--db", "sqlite:///tmp/cli.sqlite3"]),
            Some("sqlite:///tmp/env.sqlite3".to_string()),
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.command, Command::Status);
        assert_eq!(args.db_url, "sqlite:///tmp/cli.sqlite3");

        let args = Args::parse(argv(&["reset"]), Some("/tmp/env.sqlite3".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(args.command, Command::Reset);
        assert_eq!(args.db_url, "sqlite:///tmp/env.sqlite3");
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(matches!(
            Args::parse(argv(&["seed"]), None),
            Err(ArgsError::UnknownCommand(_))
        ));
        assert!(matches!(
            Args::parse(argv(&["ui", "--db"]), None),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            Args::parse(argv(&["--deck-id", "1"]), None),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(Args::parse(argv(&["--help"]), None).unwrap().is_none());
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("bug-hunter-cli-{}", std::process::id()));
        let file = dir.join("nested").join("progress.sqlite3");
        let url = format!("sqlite://{}", file.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
