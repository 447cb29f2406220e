use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use pawnpad::config::{self, Settings};
use pawnpad::logging::init_logger;
use pawnpad::predict::suggest;
use pawnpad::session::EditorSession;

/// Headless front end to the prediction engine: seeds the dictionary from
/// declaration files, opens Pawn sources and answers completion queries.
#[derive(Debug, Parser)]
#[command(name = "pawnpad", version, about)]
struct Args {
    /// Pawn source files to open
    files: Vec<PathBuf>,

    /// Directory scanned recursively for declaration files
    #[arg(long)]
    include_dir: Option<PathBuf>,

    /// Extension of declaration files, bare or as `*.inc`
    #[arg(long, default_value = "inc")]
    extension: String,

    /// Print ranked completions for this prefix and exit
    #[arg(long)]
    query: Option<String>,

    /// Dump loaded declaration records as JSON and exit
    #[arg(long)]
    dump_natives: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in stderr output
    #[arg(long)]
    no_color: bool,

    /// Disable the session log file
    #[arg(long)]
    no_file_log: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logger(args.no_color, args.log_level.as_deref(), !args.no_file_log)?;

    let settings = match config::default_config_path() {
        Some(path) => Settings::load_or_default(&path).unwrap_or_else(|err| {
            warn!("Falling back to default settings: {}", err);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut session = EditorSession::new();

    let include_dir = args.include_dir.or(settings.include_dir);
    if let Some(dir) = include_dir {
        let records = session.seed_from_declaration_files(&dir, &args.extension);
        if args.dump_natives {
            println!("{}", serde_json::to_string_pretty(records)?);
            return Ok(());
        }
    } else if args.dump_natives {
        anyhow::bail!("--dump-natives requires --include-dir or a configured include directory");
    }

    for file in &args.files {
        let contents = fs::read_to_string(file)
            .with_context(|| format!("failed to open {}", file.display()))?;
        session.open_document(&contents);
    }
    info!("{} symbols in the dictionary", session.dictionary().len());

    if let Some(query) = &args.query {
        for pick in suggest::suggestions(session.dictionary(), query) {
            println!("{:>6}  {}", pick.score, pick.name);
        }
    }

    Ok(())
}
