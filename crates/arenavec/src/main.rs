//! arenavec: region allocator and arena-backed growable array.

use arenavec_lib::{app, config, errors, version};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    tracing::info!(
        version = %version::full_version(),
        patch = version::patch(),
        "Starting"
    );

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
