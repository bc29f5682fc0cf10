// src/internal/formatter/hyperlink.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::env::PathProbe;

const OSC8_START: &str = "\u{1b}]8;;";
const STRING_TERMINATOR: &str = "\u{1b}\\";

/// One pass over the message: URLs, Windows drive paths, and POSIX paths
/// that start a word. Leftmost match wins and matches never overlap.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?P<url>https?://\S+)|(?P<win>[a-z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*)|(?:^|\s)(?P<posix>/[^\s"'<>|]+)"#,
    )
    .expect("hyperlink pattern is valid")
});

/// Wrap `text` in an OSC-8 hyperlink pointing at `uri`.
pub fn encode(text: &str, uri: &str) -> String {
    format!("{OSC8_START}{uri}{STRING_TERMINATOR}{text}{OSC8_START}{STRING_TERMINATOR}")
}

/// Build a `file:///` URI for an absolute path.
pub fn file_uri(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    format!("file:///{}", normalized.trim_start_matches('/'))
}

/// Hyperlink every URL in `message`, and every absolute path the probe
/// reports as existing. Everything else is copied unchanged.
pub fn link_message(message: &str, probe: &dyn PathProbe) -> String {
    LINK_PATTERN
        .replace_all(message, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            if let Some(url) = caps.name("url") {
                return encode(url.as_str(), url.as_str());
            }
            let Some(path) = caps.name("win").or_else(|| caps.name("posix")) else {
                return whole.to_string();
            };
            // Keep whatever the match consumed ahead of the path itself.
            let lead = &whole[..path.start() - caps.get(0).map_or(0, |m| m.start())];
            if probe.exists(path.as_str()) {
                format!("{}{}", lead, encode(path.as_str(), &file_uri(path.as_str())))
            } else {
                whole.to_string()
            }
        })
        .into_owned()
}
