use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use riddle_hunt::terminal::StdTerminal;
use riddle_hunt::{GameState, load_world_from_file};

/// A scavenger hunt through a house full of riddles.
#[derive(Parser, Debug)]
#[command(name = "riddle_hunt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World definition file (TOML)
    #[arg(env = "RIDDLE_HUNT_WORLD", default_value = "public/house.toml")]
    world: PathBuf,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Log debug events to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// `RUST_LOG` (or "warn" when unset or unparsable) is the base filter; `--verbose`
/// always layers a global debug directive on top of it.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let world = match load_world_from_file(&args.world) {
        Ok(w) => {
            info!(path = %args.world.display(), "using world file");
            w
        }
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", args.world.display());
            return ExitCode::FAILURE;
        }
    };

    let mut terminal = StdTerminal::new(!args.plain);
    let mut game = GameState::new(world);

    match game.run(&mut terminal) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(err = %e, "input stream failed");
            eprintln!("Technical error occurred while reading input: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warnings() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn verbose_still_applies_when_rust_log_is_set() {
        assert_eq!(
            log_filter(false, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
