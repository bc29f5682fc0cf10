use anyhow::Context;

use console_ext::internal::config::LoggerConfig;
use console_ext::{
    console_error, console_info, console_warn, ConsoleColor, ConsoleLogger, EventId,
    ExceptionRecord, LogLevel, Value,
};

/// Non-interactive tour of the logger features.
pub fn run_logging_tour(base: &LoggerConfig) -> anyhow::Result<()> {
    println!("=== console-ext logging features ===");
    println!();

    basic_logging(base)?;
    println!();
    structured_logging(base)?;
    println!();
    hyperlinks(base)?;
    println!();
    backward_compatibility(base)?;

    println!();
    println!("All sections completed!");
    Ok(())
}

fn basic_logging(base: &LoggerConfig) -> anyhow::Result<()> {
    println!("--- Basic logging ---");
    let logger = ConsoleLogger::new(base.clone());

    console_info!(logger, "Basic information message")?;
    console_warn!(logger, "Basic warning message")?;
    console_error!(logger, "Basic error message")?;
    // Below the default minimum level, so nothing is printed
    logger.debug("Basic debug message", &[])?;
    Ok(())
}

fn structured_logging(base: &LoggerConfig) -> anyhow::Result<()> {
    println!("--- Structured logging ---");
    let mut config = LoggerConfig {
        min_level: LogLevel::Trace,
        include_timestamp: true,
        include_event_id: true,
        include_log_level: true,
        output_format: "{Timestamp} [{Level}] ({EventId}) {Message}".to_string(),
        ..base.clone()
    };
    config.colors.information = ConsoleColor::Green;
    let logger = ConsoleLogger::new(config);

    logger.log_with(
        LogLevel::Trace,
        &EventId::named(1001, "UserAction"),
        "User {UserName} performed {Action}",
        &[Value::from("Alice"), Value::from("Login")],
        None,
    )?;
    logger.log_with(
        LogLevel::Debug,
        &EventId::named(1002, "Database"),
        "Query executed in {ElapsedMs}ms",
        &[Value::from(42)],
        None,
    )?;
    logger.log_with(
        LogLevel::Information,
        &EventId::named(1003, "Request"),
        "HTTP {Method} {Url} returned {StatusCode}",
        &[Value::from("GET"), Value::from("/api/users"), Value::from(200)],
        None,
    )?;
    logger.log_with(
        LogLevel::Warning,
        &EventId::named(2001, "Performance"),
        "Slow operation: {Duration:N0}ms, budget {Budget:C}",
        &[Value::from(1500), Value::from(12.5)],
        None,
    )?;

    if let Err(failure) = "12a45".parse::<u32>().context("could not parse the user id") {
        let exception = ExceptionRecord::from_anyhow(&failure);
        logger.log_with(
            LogLevel::Error,
            &EventId::named(3001, "Error"),
            "Operation failed for user {UserId}",
            &[Value::from(12345)],
            Some(&exception),
        )?;
    }
    Ok(())
}

fn hyperlinks(base: &LoggerConfig) -> anyhow::Result<()> {
    println!("--- Hyperlinks ---");
    let mut config = LoggerConfig {
        enable_hyperlinks: true,
        include_log_level: true,
        ..base.clone()
    };
    config.colors.information = ConsoleColor::Cyan;
    let logger = ConsoleLogger::new(config);

    console_info!(logger, "Visit the crate docs: https://docs.rs/crossterm")?;
    console_info!(logger, "Terminal hyperlink reference: https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda")?;

    let manifest = std::env::current_dir()?.join("Cargo.toml");
    console_info!(logger, "Manifest: {Manifest}", manifest.display().to_string())?;
    console_info!(logger, "Missing file stays plain: /definitely/not/here.txt")?;
    Ok(())
}

fn backward_compatibility(base: &LoggerConfig) -> anyhow::Result<()> {
    println!("--- Backward compatibility ---");
    let logger = ConsoleLogger::new(LoggerConfig {
        enable_structured_logging: false,
        ..base.clone()
    });

    console_info!(logger, "This should work exactly like the old version")?;
    console_warn!(logger, "No timestamps, no event IDs, just simple colored text")?;
    console_error!(logger, "Backward compatibility maintained!")?;
    Ok(())
}

/// Interactive masked password prompt.
pub fn run_password_demo() -> anyhow::Result<()> {
    println!("--- Password reading ---");
    println!("Characters are masked with '*', backspace corrects, nothing is echoed.");
    println!();

    print!("Enter a test password: ");
    std::io::Write::flush(&mut std::io::stdout())?;
    let password = console_ext::read_password().context("reading password")?;
    println!();
    println!("You entered a password with {} characters.", password.chars().count());
    println!("(Password content is not displayed for security)");
    Ok(())
}
