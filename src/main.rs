//! Binary entrypoint for the Derelict CLI.
//!
//! Commands:
//! - `play` (default) - start a game on stdin/stdout
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `derelict::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use tokio::io::BufReader;

use derelict::config::Config;
use derelict::ship::Game;

#[derive(Parser)]
#[command(name = "derelict")]
#[command(about = "Explore a derelict spaceship with shell commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let config = match Config::load(&cli.config).await {
                Ok(config) => {
                    init_logging(&config, cli.verbose);
                    config
                }
                Err(e) if std::path::Path::new(&cli.config).exists() => return Err(e),
                Err(_) => {
                    let config = Config::default();
                    init_logging(&config, cli.verbose);
                    debug!("No config at {}; using defaults", cli.config);
                    config
                }
            };
            info!("Starting Derelict v{}", env!("CARGO_PKG_VERSION"));

            let mut game = Game::from_config(&config.game)?;
            let stdin = BufReader::new(tokio::io::stdin());
            let end = derelict::shell::run(&mut game, &config.game, stdin, tokio::io::stdout()).await?;
            debug!("Shell finished: {:?}", end);
        }
        Commands::Init => {
            init_logging(&Config::default(), cli.verbose);
            match Config::create_default(&cli.config).await {
                Ok(()) => info!("Configuration file created at {}", cli.config),
                Err(e) => {
                    warn!("{}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    // stdout belongs to the game; log lines go to a file or a terminal stderr
    let is_tty = atty::is(atty::Stream::Stderr);
    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    match file {
        Some(f) => {
            let file = std::sync::Mutex::new(f);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None if is_tty => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}
