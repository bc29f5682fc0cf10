// src/internal/formatter/timestamp.rs

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::internal::config::DEFAULT_TIME_FORMAT;

/// Format a timestamp with either a .NET style custom pattern
/// (`yyyy-MM-dd HH:mm:ss.fff`) or, when the pattern contains `%`, a
/// strftime pattern. Unusable strftime patterns fall back to the default
/// format instead of failing.
pub fn format_timestamp<Tz>(dt: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if pattern.contains('%') {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if !items.iter().any(|item| matches!(item, Item::Error)) {
            let mut out = String::new();
            if write!(out, "{}", dt.format_with_items(items.into_iter())).is_ok() {
                return out;
            }
        }
        return format_custom(dt, DEFAULT_TIME_FORMAT);
    }
    format_custom(dt, pattern)
}

fn format_custom<Tz>(dt: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        match c {
            '\'' | '"' => {
                // Quoted literal, runs to the matching quote or the end.
                let end = chars[i + 1..]
                    .iter()
                    .position(|&x| x == c)
                    .map(|p| i + 1 + p)
                    .unwrap_or(chars.len());
                out.extend(&chars[i + 1..end]);
                i = end + 1;
                continue;
            }
            '\\' => {
                if let Some(next) = chars.get(i + 1) {
                    out.push(*next);
                }
                i += 2;
                continue;
            }
            'y' => {
                if run <= 2 {
                    let _ = write!(out, "{:0width$}", dt.year().rem_euclid(100), width = run);
                } else {
                    let _ = write!(out, "{:0width$}", dt.year(), width = run);
                }
            }
            'M' => match run {
                1 => push_num(&mut out, dt.month(), 1),
                2 => push_num(&mut out, dt.month(), 2),
                3 => out.push_str(&dt.format("%b").to_string()),
                _ => out.push_str(&dt.format("%B").to_string()),
            },
            'd' => match run {
                1 => push_num(&mut out, dt.day(), 1),
                2 => push_num(&mut out, dt.day(), 2),
                3 => out.push_str(&dt.format("%a").to_string()),
                _ => out.push_str(&dt.format("%A").to_string()),
            },
            'H' => push_num(&mut out, dt.hour(), run.min(2)),
            'h' => push_num(&mut out, dt.hour12().1, run.min(2)),
            'm' => push_num(&mut out, dt.minute(), run.min(2)),
            's' => push_num(&mut out, dt.second(), run.min(2)),
            'f' | 'F' => {
                let digits = run.min(9);
                let nanos = format!("{:09}", dt.nanosecond() % 1_000_000_000);
                let fraction = &nanos[..digits];
                if c == 'F' {
                    out.push_str(fraction.trim_end_matches('0'));
                } else {
                    out.push_str(fraction);
                }
            }
            't' => {
                let marker = if dt.hour12().0 { "PM" } else { "AM" };
                out.push_str(if run == 1 { &marker[..1] } else { marker });
            }
            'z' => {
                let offset = dt.format("%:z").to_string();
                match run {
                    1 | 2 => {
                        let hours = &offset[..3];
                        let sign = &hours[..1];
                        let value = hours[1..].trim_start_matches('0');
                        let value = if value.is_empty() { "0" } else { value };
                        if run == 1 {
                            let _ = write!(out, "{}{}", sign, value);
                        } else {
                            out.push_str(hours);
                        }
                    }
                    _ => out.push_str(&offset),
                }
            }
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
        i += run;
    }

    out
}

fn push_num(out: &mut String, value: u32, width: usize) {
    let _ = write!(out, "{:0width$}", value, width = width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn sample() -> DateTime<FixedOffset> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 42)
            .unwrap();
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .from_local_datetime(&naive)
            .unwrap()
    }

    #[test]
    fn default_pattern() {
        assert_eq!(
            format_timestamp(&sample(), DEFAULT_TIME_FORMAT),
            "2024-03-07 14:05:09.042"
        );
    }

    #[test]
    fn twelve_hour_clock_and_names() {
        assert_eq!(
            format_timestamp(&sample(), "ddd, d MMM yy h:mm tt"),
            "Thu, 7 Mar 24 2:05 PM"
        );
    }

    #[test]
    fn quoted_literals_and_offset() {
        assert_eq!(
            format_timestamp(&sample(), "'Day' dd 'at' HH zzz"),
            "Day 07 at 14 +02:00"
        );
    }

    #[test]
    fn strftime_patterns_pass_through() {
        assert_eq!(format_timestamp(&sample(), "%H:%M"), "14:05");
    }

    #[test]
    fn broken_strftime_falls_back_to_default() {
        assert_eq!(
            format_timestamp(&sample(), "%! broken"),
            "2024-03-07 14:05:09.042"
        );
    }
}
