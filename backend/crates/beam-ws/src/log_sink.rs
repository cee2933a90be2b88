use std::fmt;

/// Consumer of formatted diagnostic lines.
///
/// A beam without a sink writes no log lines at all.
pub trait LogSink: Send + Sync {
    fn log(&self, message: fmt::Arguments<'_>);
}

/// Default sink: forwards every line to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, message: fmt::Arguments<'_>) {
        log::info!(target: "beam_ws", "{message}");
    }
}

impl<F> LogSink for F
where
    F: Fn(fmt::Arguments<'_>) + Send + Sync,
{
    fn log(&self, message: fmt::Arguments<'_>) {
        self(message)
    }
}
