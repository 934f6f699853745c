use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use wallpaper_changer::app::App;
use wallpaper_changer::cli::args::{Cli, Commands, CompletionsArgs};
use wallpaper_changer::cli::commands;
use wallpaper_changer::config::{Config, Paths};
use wallpaper_changer::error::ChangerError;
use wallpaper_changer::store::ImageStore;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), ChangerError> {
    let cli = Cli::parse();
    let format = cli.output;

    // Handle completions command early (no config or platform needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    let paths = match &cli.data_dir {
        Some(dir) => Paths::with_root(dir),
        None => Paths::new()?,
    };
    tracing::debug!("using data directory {}", paths.root.display());

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => {
            let mut config = Config::load_from(&paths)?;
            commands::config(&mut config, &paths, args, format)?
        }

        // Cache inspection reads only the image directory, not the config file
        Commands::Cache(args) => {
            let store = ImageStore::new(paths.images_dir.clone());
            commands::cache(&store, args, format)?
        }

        _ => {
            let config = Config::load_from(&paths)?;
            let app = App::new(paths, config)?;

            match &cli.command {
                Commands::Check => commands::check(&app, format)?,
                Commands::Refresh => commands::refresh(&app, format)?,
                Commands::Daemon => commands::daemon(&app)?,
                Commands::Status => commands::status(&app, format)?,
                Commands::Config(_) | Commands::Cache(_) | Commands::Completions(_) => {
                    unreachable!()
                }
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flags
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wallpaper_changer={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
