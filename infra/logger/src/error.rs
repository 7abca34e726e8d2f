use std::borrow::Cow;

/// Why logging could not be set up.
#[georeg_derive::georeg_error]
pub enum LoggerError {
    #[error("Host name for log files is blank{}", format_context(context))]
    BlankName { context: Option<Cow<'static, str>> },

    #[error("Unknown log level `{level}`{}", format_context(context))]
    Level { level: String, context: Option<Cow<'static, str>> },

    #[error("Invalid log filter `{filter}`{}: {reason}", format_context(context))]
    Filter { filter: String, reason: String, context: Option<Cow<'static, str>> },

    /// File logging was requested with `max_files = 0`.
    #[error("Log file retention must keep at least one file{}", format_context(context))]
    NoRetention { context: Option<Cow<'static, str>> },

    #[error("Log directory unavailable{}: {source}", format_context(context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rolling log file{}: {source}", format_context(context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// The process already has a global subscriber.
    #[error("Tracing subscriber already installed{}: {source}", format_context(context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },
}
