use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// The sixteen classic console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    #[serde(alias = "grey")]
    Gray,
    #[serde(alias = "dark_grey")]
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}
