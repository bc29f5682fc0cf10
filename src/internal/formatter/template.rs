// src/internal/formatter/template.rs

use chrono::Utc;

use super::timestamp::format_timestamp;
use crate::internal::models::Value;

const CURRENCY_SYMBOL: char = '¤';

/// Upper bound for alignment and zero-padding widths taken from templates.
const MAX_WIDTH: usize = 256;
/// Upper bound for decimal places in numeric directives.
const MAX_PRECISION: usize = 30;

/// Substitute `{Name}`, `{Name,align}` and `{Name:format}` placeholders
/// with `args`, in order of first appearance of each name. Repeated names
/// reuse the same argument. `{{` and `}}` produce literal braces, and
/// placeholders without an argument are copied verbatim.
pub fn render(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let raw = &tail[..=close];
        let hole = Placeholder::parse(&tail[1..close]);

        let index = match names.iter().position(|n| *n == hole.name) {
            Some(index) => index,
            None => {
                names.push(hole.name);
                names.len() - 1
            }
        };

        match args.get(index) {
            Some(value) => out.push_str(&hole.apply(value)),
            None => out.push_str(raw),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

struct Placeholder<'a> {
    name: &'a str,
    alignment: Option<i32>,
    format: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    fn parse(body: &'a str) -> Self {
        let (head, format) = match body.split_once(':') {
            Some((head, format)) => (head, Some(format)),
            None => (body, None),
        };
        let (name, alignment) = match head.split_once(',') {
            Some((name, align)) => (name, align.trim().parse().ok()),
            None => (head, None),
        };
        Self {
            name: name.trim(),
            alignment,
            format,
        }
    }

    fn apply(&self, value: &Value) -> String {
        let text = match self.format {
            Some(directive) if !directive.is_empty() => format_value(value, directive),
            _ => value.to_string(),
        };
        match self.alignment {
            Some(width) if width < 0 => format!("{:<w$}", text, w = clamp_width(width)),
            Some(width) => format!("{:>w$}", text, w = clamp_width(width)),
            None => text,
        }
    }
}

/// Apply a format directive to a value; anything unsupported falls back
/// to the plain rendering.
pub fn format_value(value: &Value, directive: &str) -> String {
    match value {
        Value::Int(_) | Value::UInt(_) | Value::Float(_) => {
            format_number(value, directive).unwrap_or_else(|| value.to_string())
        }
        Value::DateTime(dt) => match directive {
            "d" => format_timestamp(dt, "MM/dd/yyyy"),
            "D" => format_timestamp(dt, "dddd, dd MMMM yyyy"),
            "t" => format_timestamp(dt, "HH:mm"),
            "T" => format_timestamp(dt, "HH:mm:ss"),
            "g" => format_timestamp(dt, "MM/dd/yyyy HH:mm"),
            "G" => format_timestamp(dt, "MM/dd/yyyy HH:mm:ss"),
            "s" => format_timestamp(dt, "yyyy-MM-dd'T'HH:mm:ss"),
            "o" | "O" => format_timestamp(dt, "yyyy-MM-dd'T'HH:mm:ss.fffffffzzz"),
            "u" => format_timestamp(&dt.with_timezone(&Utc), "yyyy-MM-dd HH:mm:ss'Z'"),
            custom => format_timestamp(dt, custom),
        },
        _ => value.to_string(),
    }
}

fn format_number(value: &Value, directive: &str) -> Option<String> {
    if directive.starts_with(['0', '#', '.', ',']) {
        return custom_number(value.as_f64()?, directive);
    }

    let mut chars = directive.chars();
    let kind = chars.next()?;
    let precision = chars.as_str();
    let digits: Option<usize> = if precision.is_empty() {
        None
    } else {
        Some(precision.parse::<usize>().ok()?)
    };
    let decimals = |default: usize| digits.unwrap_or(default).min(MAX_PRECISION);
    let pad = || digits.unwrap_or(0).min(MAX_WIDTH);
    let number = value.as_f64()?;

    let text = match kind {
        'C' | 'c' => {
            let body = group_fixed(number.abs(), decimals(2));
            if number < 0.0 {
                format!("-{}{}", CURRENCY_SYMBOL, body)
            } else {
                format!("{}{}", CURRENCY_SYMBOL, body)
            }
        }
        'N' | 'n' => sign(number, group_fixed(number.abs(), decimals(2))),
        'F' | 'f' => format!("{:.*}", decimals(2), number),
        'P' | 'p' => format!("{:.*} %", decimals(2), number * 100.0),
        'E' | 'e' => scientific(number, decimals(6), kind == 'E'),
        'D' | 'd' => {
            let width = pad();
            match value {
                Value::Int(v) if *v < 0 => format!("-{:0w$}", v.unsigned_abs(), w = width),
                Value::Int(v) => format!("{:0w$}", v, w = width),
                Value::UInt(v) => format!("{:0w$}", v, w = width),
                _ => return None,
            }
        }
        'X' | 'x' => {
            let width = pad();
            let hex = match value {
                Value::Int(v) => format!("{:0w$X}", v, w = width),
                Value::UInt(v) => format!("{:0w$X}", v, w = width),
                _ => return None,
            };
            if kind == 'x' {
                hex.to_lowercase()
            } else {
                hex
            }
        }
        'G' | 'g' if digits.is_none() => value.to_string(),
        _ => return None,
    };
    Some(text)
}

fn clamp_width(width: i32) -> usize {
    (width.unsigned_abs() as usize).min(MAX_WIDTH)
}

fn sign(number: f64, body: String) -> String {
    if number < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn group_fixed(number: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, number);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn scientific(number: f64, decimals: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", decimals, number);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exponent.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:03}", mantissa, marker, sign, exp.unsigned_abs())
}

/// Minimal custom numeric patterns: `0.00`, `#,##0.0`, `000`.
fn custom_number(number: f64, pattern: &str) -> Option<String> {
    if !pattern.chars().all(|c| matches!(c, '0' | '#' | '.' | ',')) {
        return None;
    }
    let (int_pattern, frac_pattern) = pattern.split_once('.').unwrap_or((pattern, ""));
    let decimals = frac_pattern
        .chars()
        .filter(|c| *c == '0' || *c == '#')
        .count()
        .min(MAX_PRECISION);
    let min_int = int_pattern.chars().filter(|c| *c == '0').count().min(MAX_WIDTH);
    let grouped = int_pattern.contains(',');

    let fixed = format!("{:.*}", decimals, number.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let int_part = int_part.trim_start_matches('0');
    let int_part = format!("{:0>w$}", int_part, w = min_int);
    let int_part = if grouped {
        group_thousands(&int_part)
    } else {
        int_part
    };

    let body = if frac_part.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac_part)
    };
    Some(sign(number, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_substitution() {
        let args = [Value::from("Alice"), Value::from("Login")];
        assert_eq!(
            render("User {UserName} performed {Action}", &args),
            "User Alice performed Login"
        );
    }

    #[test]
    fn missing_arguments_stay_verbatim() {
        assert_eq!(render("{A} and {B:N2}", &[Value::from(1)]), "1 and {B:N2}");
    }

    #[test]
    fn repeated_names_share_an_argument() {
        assert_eq!(render("{X}-{X}-{Y}", &[Value::from(1), Value::from(2)]), "1-1-2");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(render("{{literal}} {V}", &[Value::from(5)]), "{literal} 5");
        assert_eq!(render("unclosed {tail", &[]), "unclosed {tail");
    }

    #[test]
    fn numeric_directives() {
        assert_eq!(format_value(&Value::from(1234.5), "C"), "¤1,234.50");
        assert_eq!(format_value(&Value::from(-1234567), "N0"), "-1,234,567");
        assert_eq!(format_value(&Value::from(3.14159), "F3"), "3.142");
        assert_eq!(format_value(&Value::from(42), "D5"), "00042");
        assert_eq!(format_value(&Value::from(255u8), "x4"), "00ff");
        assert_eq!(format_value(&Value::from(0.125), "P1"), "12.5 %");
        assert_eq!(format_value(&Value::from(1234.5678), "E2"), "1.23E+003");
        assert_eq!(format_value(&Value::from(1234.5), "#,##0.00"), "1,234.50");
    }

    #[test]
    fn unknown_directive_falls_back() {
        assert_eq!(format_value(&Value::from(7), "Q"), "7");
        assert_eq!(format_value(&Value::from("text"), "N2"), "text");
        assert_eq!(format_value(&Value::from(2.5), "D"), "2.5");
    }

    #[test]
    fn alignment() {
        assert_eq!(render("[{V,5}]", &[Value::from(42)]), "[   42]");
        assert_eq!(render("[{V,-5}]", &[Value::from(42)]), "[42   ]");
    }

    #[test]
    fn oversized_widths_are_capped() {
        let aligned = render("{V,2000000000}", &[Value::from(1)]);
        assert_eq!(aligned.len(), MAX_WIDTH);
        assert!(aligned.ends_with('1'));

        let padded = format_value(&Value::from(7), "D999999999");
        assert_eq!(padded.len(), MAX_WIDTH);
        assert_eq!(format_value(&Value::from(1.5), "F1000000").len(), 2 + MAX_PRECISION);
    }

    #[test]
    fn date_directives() {
        use chrono::{FixedOffset, TimeZone};
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 12, 31, 23, 59, 1)
            .unwrap();
        let value = Value::from(dt);
        assert_eq!(format_value(&value, "d"), "12/31/2023");
        assert_eq!(format_value(&value, "s"), "2023-12-31T23:59:01");
        assert_eq!(format_value(&value, "yyyy/MM"), "2023/12");
    }
}
