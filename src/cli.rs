use clap::{Arg, ArgAction, Command};

use crate::internal::config::LoggerConfig;
use crate::internal::models::LogLevel;

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(
        crate::internal::config::get_version_info().into_boxed_str()
    );

    Command::new("console-ext")
        .version(version)
        .about("Colorized structured console logging demo")
        .subcommand(Command::new("logging").about("Run the non-interactive logging feature tour"))
        .subcommand(Command::new("password").about("Read a masked password and report its length"))
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to config file (default: ./console-ext.*, /etc/console-ext/config.*)")
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .global(true)
                .value_parser(clap::value_parser!(LogLevel))
                .help("Minimum level (trace|debug|info|warn|error|critical|none)")
        )
        .arg(
            Arg::new("template")
                .long("template")
                .global(true)
                .help("Output template, e.g. \"{Timestamp} [{Level}] ({EventId}) {Message}\"")
        )
        .arg(
            Arg::new("time-format")
                .long("time-format")
                .global(true)
                .help("Timestamp format (yyyy-MM-dd HH:mm:ss.fff style or strftime)")
        )
        .arg(
            Arg::new("no-timestamp")
                .long("no-timestamp")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Leave the timestamp out of each line")
        )
        .arg(
            Arg::new("event-ids")
                .long("event-ids")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Include non-zero event ids")
        )
        .arg(
            Arg::new("no-hyperlinks")
                .long("no-hyperlinks")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Do not turn URLs and paths into terminal hyperlinks")
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Do not write color escape sequences")
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable structured formatting; print only the message")
        )
        .arg(
            Arg::new("single-line-exceptions")
                .long("single-line-exceptions")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Render exceptions as one `Type: message` line")
        )
}

pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<LoggerConfig> {
    let config_file = matches.get_one::<String>("config");

    // An explicit config file must load; otherwise fall back to defaults
    let mut config = match LoggerConfig::load_with_file(config_file.map(String::as_str)) {
        Ok(config) => config,
        Err(e) if config_file.is_some() => return Err(e.into()),
        Err(_) => LoggerConfig::default(),
    };

    if let Some(level) = matches.get_one::<LogLevel>("level") {
        config.min_level = *level;
    }
    if let Some(template) = matches.get_one::<String>("template") {
        config.output_format = template.clone();
    }
    if let Some(time_format) = matches.get_one::<String>("time-format") {
        config.time_format = time_format.clone();
    }
    if matches.get_flag("no-timestamp") {
        config.include_timestamp = false;
    }
    if matches.get_flag("event-ids") {
        config.include_event_id = true;
    }
    if matches.get_flag("no-hyperlinks") {
        config.enable_hyperlinks = false;
    }
    if matches.get_flag("no-color") {
        config.use_colors = false;
    }
    if matches.get_flag("plain") {
        config.enable_structured_logging = false;
    }
    if matches.get_flag("single-line-exceptions") {
        config.single_line_exceptions = true;
    }

    Ok(config)
}
