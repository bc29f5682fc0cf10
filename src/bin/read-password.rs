use clap::{Arg, Command};
use console_ext::internal::config;
use console_ext::internal::input::{PasswordReader, TerminalKeys};

fn main() -> anyhow::Result<()> {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(config::get_version_info().into_boxed_str());

    let matches = Command::new("read-password")
        .version(version)
        .about("Read one masked line from the terminal and report its length")
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .short('p')
                .default_value("Password: ")
                .help("Prompt printed before reading"),
        )
        .arg(
            Arg::new("mask")
                .long("mask")
                .value_parser(clap::value_parser!(char))
                .default_value("*")
                .help("Glyph echoed for each typed character"),
        )
        .get_matches();

    let prompt = matches
        .get_one::<String>("prompt")
        .map(String::as_str)
        .unwrap_or("Password: ");
    let mask = matches.get_one::<char>("mask").copied().unwrap_or('*');

    print!("{}", prompt);
    std::io::Write::flush(&mut std::io::stdout())?;

    let keys = TerminalKeys::new()?;
    let password = PasswordReader::new(keys, std::io::stdout())
        .with_mask(mask)
        .read_masked_line()?;

    println!();
    println!("Read {} characters", password.chars().count());

    Ok(())
}
