use std::backtrace::BacktraceStatus;
use std::error::Error;
use std::{env, fmt, io, num, str, string, time};

/// ExceptionRecord is a read-only snapshot of an error and its causes,
/// outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRecord {
    pub type_name: String,
    pub message: String,
    pub stack_trace: Option<String>,
    pub cause: Option<Box<ExceptionRecord>>,
}

impl ExceptionRecord {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
            cause: None,
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn with_cause(mut self, cause: ExceptionRecord) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Snapshot a typed error. The outer type name comes from the static
    /// type; causes reached through `source()` are named from their
    /// `Debug` output unless they are well-known std errors.
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        let type_name = match std_type_name(error) {
            Some(name) => name.to_string(),
            None => short_type_name::<E>(),
        };
        let mut record = Self::new(type_name, error.to_string());
        record.cause = error.source().map(|source| Box::new(Self::from_dyn(source)));
        record
    }

    /// Snapshot a type-erased error and its source chain.
    pub fn from_dyn(error: &(dyn Error + 'static)) -> Self {
        let mut record = Self::new(debug_type_name(error), error.to_string());
        record.cause = error.source().map(|source| Box::new(Self::from_dyn(source)));
        record
    }

    /// Snapshot an `anyhow::Error`, keeping its backtrace when one was
    /// captured.
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let mut record = Self::from_dyn(error.as_ref());
        let backtrace = error.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            record.stack_trace = Some(backtrace.to_string());
        }
        record
    }

    /// Iterate the causes below this record, nearest first.
    pub fn causes(&self) -> impl Iterator<Item = &ExceptionRecord> {
        std::iter::successors(self.cause.as_deref(), |record| record.cause.as_deref())
    }
}

fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    // Drop generic arguments before taking the last path segment.
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Names for std errors whose `Debug` output starts with a variant
/// (`Os`, `Custom`, `NotPresent`, ...) rather than the type.
fn std_type_name(error: &(dyn Error + 'static)) -> Option<&'static str> {
    let name = if error.is::<io::Error>() {
        "IoError"
    } else if error.is::<fmt::Error>() {
        "FmtError"
    } else if error.is::<num::ParseIntError>() {
        "ParseIntError"
    } else if error.is::<num::ParseFloatError>() {
        "ParseFloatError"
    } else if error.is::<num::TryFromIntError>() {
        "TryFromIntError"
    } else if error.is::<str::ParseBoolError>() {
        "ParseBoolError"
    } else if error.is::<str::Utf8Error>() {
        "Utf8Error"
    } else if error.is::<string::FromUtf8Error>() {
        "FromUtf8Error"
    } else if error.is::<env::VarError>() {
        "VarError"
    } else if error.is::<time::SystemTimeError>() {
        "SystemTimeError"
    } else {
        return None;
    };
    Some(name)
}

fn debug_type_name(error: &(dyn Error + 'static)) -> String {
    if let Some(name) = std_type_name(error) {
        return name.to_string();
    }
    let rendered = format!("{:?}", error);
    let name: String = rendered
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    match name.chars().next() {
        Some(first) if first.is_uppercase() => name,
        _ => "Error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer {
        source: std::num::ParseIntError,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not read port")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn from_error_walks_source_chain() {
        let source = "x".parse::<u16>().unwrap_err();
        let record = ExceptionRecord::from_error(&Outer { source });

        assert_eq!(record.type_name, "Outer");
        assert_eq!(record.message, "could not read port");
        let cause = record.cause.as_deref().unwrap();
        assert_eq!(cause.type_name, "ParseIntError");
        assert!(cause.cause.is_none());
    }

    #[test]
    fn io_causes_are_named_by_type() {
        use anyhow::Context;

        let error = std::fs::read("/definitely/missing/settings.toml")
            .context("loading settings")
            .unwrap_err();
        let record = ExceptionRecord::from_anyhow(&error);

        assert_eq!(record.message, "loading settings");
        let names: Vec<_> = record.causes().map(|c| c.type_name.as_str()).collect();
        assert_eq!(names, vec!["IoError"]);
    }

    #[test]
    fn typed_std_error_uses_readable_name() {
        let error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(ExceptionRecord::from_error(&error).type_name, "IoError");
    }

    #[test]
    fn causes_iterates_nearest_first() {
        let record = ExceptionRecord::new("A", "a")
            .with_cause(ExceptionRecord::new("B", "b").with_cause(ExceptionRecord::new("C", "c")));
        let names: Vec<_> = record.causes().map(|c| c.type_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn unnamed_debug_output_falls_back() {
        let error = anyhow::anyhow!("plain message");
        let record = ExceptionRecord::from_anyhow(&error);
        assert_eq!(record.type_name, "Error");
        assert_eq!(record.message, "plain message");
    }
}
