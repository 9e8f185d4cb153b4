//! ubike: find YouBike stations from your terminal
//!
//! Loads a static snapshot of the YouBike availability feed and answers
//! a handful of questions about it.
//!
//! Usage examples
//! --------------
//!
//! - Print usage and examples
//!   $ ubike
//!
//! - List every district
//!   $ ubike --areas
//!
//! - Search names, addresses and districts (case-insensitive)
//!   $ ubike 科技大樓
//!   $ ubike Technology
//!
//! - Show favourite stations by id
//!   $ ubike --station 500101232 --station 500101105
//!
//! - Closest active stations to a position
//!   $ ubike --near 25.0260,121.5430 --count 3
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `sample_data.json` from the working directory.
//! Use `--data <path>` to point at another snapshot; `.json.gz` files are
//! decompressed on the fly.
use clap::Parser;
use tracing::debug;
use ubike_cli::args::CliArgs;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    setup_logging(&args);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    ubike_cli::run(&args, &mut stdout.lock(), &mut stderr.lock())
}

/// Logs go to stderr so stdout stays clean for results.
fn setup_logging(args: &CliArgs) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = args.log_level();
    let filter = EnvFilter::new(format!("ubike_core={level},ubike_cli={level},ubike={level}"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", level);
}
