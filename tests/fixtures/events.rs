use console_ext::ExceptionRecord;

/// Three-level error chain; every level carries its own stack trace
pub fn nested_exception() -> ExceptionRecord {
    ExceptionRecord::new("InvalidOperation", "Test exception for logging")
        .with_stack_trace("   at demo::run (src/demo.rs:42)\n   at main (src/main.rs:10)")
        .with_cause(
            ExceptionRecord::new("IoError", "pipe closed")
                .with_stack_trace("   at io::write")
                .with_cause(
                    ExceptionRecord::new("OsError", "broken pipe (os error 32)")
                        .with_stack_trace("   at libc::write"),
                ),
        )
}
