use std::fmt::Write;

use crate::internal::models::ExceptionRecord;

/// Render an exception either as `Type: message` or as a block with the
/// outer stack trace followed by one `Inner Exception` entry per cause.
pub fn render(exception: &ExceptionRecord, single_line: bool) -> String {
    if single_line {
        return format!("{}: {}", exception.type_name, exception.message);
    }

    let mut block = String::new();
    let _ = writeln!(block, "Exception: {}", exception.type_name);
    let _ = writeln!(block, "Message: {}", exception.message);

    if let Some(trace) = exception.stack_trace.as_deref().filter(|t| !t.trim().is_empty()) {
        block.push_str("Stack Trace:\n");
        let _ = writeln!(block, "{}", trace);
    }

    for inner in exception.causes() {
        let _ = writeln!(block, "Inner Exception: {}", inner.type_name);
        let _ = writeln!(block, "Message: {}", inner.message);
    }

    block.truncate(block.trim_end().len());
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ExceptionRecord {
        ExceptionRecord::new("RequestError", "request failed")
            .with_stack_trace("   at client::send\n   at main")
            .with_cause(
                ExceptionRecord::new("IoError", "connection reset")
                    .with_stack_trace("   at socket::read")
                    .with_cause(ExceptionRecord::new("OsError", "errno 104")),
            )
    }

    #[test]
    fn single_line_has_outer_only() {
        assert_eq!(render(&chain(), true), "RequestError: request failed");
    }

    #[test]
    fn block_lists_each_cause_without_inner_traces() {
        let expected = "Exception: RequestError\n\
                        Message: request failed\n\
                        Stack Trace:\n   at client::send\n   at main\n\
                        Inner Exception: IoError\n\
                        Message: connection reset\n\
                        Inner Exception: OsError\n\
                        Message: errno 104";
        let rendered = render(&chain(), false);
        assert_eq!(rendered, expected);
        assert!(!rendered.contains("socket::read"));
    }

    #[test]
    fn empty_stack_trace_is_skipped() {
        let record = ExceptionRecord::new("E", "m").with_stack_trace("  ");
        assert_eq!(render(&record, false), "Exception: E\nMessage: m");
    }
}
