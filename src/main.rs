//! Purrfect host runner.
//!
//! Drives the interaction engine from a real-time loop:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  JsonFileConfig     LogEventSink      MonotonicClock           │
//! │  (ConfigPort)       (EventSink)       (ClockPort)              │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          InteractionController (pure logic)            │    │
//! │  │  Rotation · Notifications · Metrics · Selection        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scripted commands are applied once at startup, the loop runs for
//! `--run-ms`, and the final snapshot is printed as JSON.
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use purrfect::adapters::config_file::JsonFileConfig;
use purrfect::adapters::log_sink::LogEventSink;
use purrfect::adapters::time::MonotonicClock;
use purrfect::app::commands::EngineCommand;
use purrfect::app::ports::{ClockPort, ConfigError, ConfigPort};
use purrfect::app::service::InteractionController;
use purrfect::config::EngineConfig;

#[derive(Debug, Parser)]
#[command(name = "purrfect", version, about = "Run the Purrfect Cat Paradise interaction engine")]
struct Args {
    /// JSON configuration file; defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to run the event loop after applying commands.
    #[arg(long, default_value_t = 0)]
    run_ms: u64,

    /// Enable debug logging (honours RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    /// Commands: like, pet, rate:N, volume:N, panel:ID,
    /// adopt:NAME|EMAIL|MESSAGE, dismiss:ID.
    commands: Vec<EngineCommand>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let host_tick = Duration::from_millis(config.host_tick_ms);

    let mut engine = InteractionController::new(config).context("engine construction failed")?;
    engine.subscribe(LogEventSink::new());
    engine.start().context("engine start failed")?;

    for cmd in args.commands {
        if let Err(e) = engine.handle_command(cmd.clone()) {
            warn!("{:?} rejected: {}", cmd, e);
        }
    }

    // ── Event loop ───────────────────────────────────────────
    let clock = MonotonicClock::new();
    let mut last = clock.now_ms();
    while last < args.run_ms {
        std::thread::sleep(host_tick);
        let now = clock.now_ms();
        engine.advance(now - last);
        last = now;
    }

    let snapshot = engine.snapshot();
    engine.shutdown();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Install the fmt subscriber.  `log` records from the library are
/// forwarded through its log bridge.  Without `--verbose` the level is
/// pinned to `info` regardless of `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        info!("No config file given, using defaults");
        return Ok(EngineConfig::default());
    };
    match JsonFileConfig::new(path).load() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => {
            warn!("Config {} not found, using defaults", path.display());
            Ok(EngineConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", path.display())),
    }
}
