use tracing::{error, info};
use console_ext::cli::{build_cli, parse_config};

mod demo;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Route tracing output through the console logger itself
    if let Err(e) = console_ext::init_logger(&config) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("Starting console-ext demo");
    info!("Version: {}", console_ext::internal::config::VERSION);

    let result = match matches.subcommand_name() {
        Some("logging") => demo::run_logging_tour(&config),
        Some("password") => demo::run_password_demo(),
        _ => demo::run_password_demo().and_then(|_| demo::run_logging_tour(&config)),
    };

    if let Err(e) = result {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }

    info!("Demo complete");
    Ok(())
}
