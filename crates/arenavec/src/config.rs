//! Application configuration from CLI flags and environment.

use clap::Parser;

use arenavec_core::DEFAULT_CAPACITY_ELEMS;

/// arenavec: region allocator and arena-backed growable array demo.
#[derive(Parser, Debug)]
#[command(name = "arenavec", version, about)]
pub struct AppConfig {
    /// Arena size, in elements of the demo's value type (u64).
    #[arg(long, default_value_t = DEFAULT_CAPACITY_ELEMS, env = "ARENAVEC_ARENA_ELEMS")]
    pub arena_elems: usize,

    /// Number of values to push into the arena-backed array.
    #[arg(short = 'n', long, default_value_t = 10, env = "ARENAVEC_COUNT")]
    pub count: usize,

    /// Capacity to reserve before pushing (0 to rely on doubling).
    #[arg(long, default_value_t = 0)]
    pub reserve: usize,

    /// Print arena statistics as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only print errors).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (debug-level logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the dot-separated rendering showcase instead of the arena demo.
    #[arg(long)]
    pub print_ip: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log level when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
