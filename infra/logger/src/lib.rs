//! # Logger
//!
//! Global `tracing` subscriber for registry hosts, driven by the `[logging]` configuration
//! section.
//!
//! * Console output is compact and goes to stderr, so a host's stdout carries only its results.
//!   Colours are used only when stderr is a terminal.
//! * A configured `directory` adds daily rolling files named after the host
//!   (`georeg.2026-10-19.log`), written by a non-blocking worker, as JSON lines when `json` is set.
//! * An explicit `env_filter` (e.g. `"georeg_kernel=debug,georeg_crs=trace"`) replaces
//!   `RUST_LOG`; without one, `RUST_LOG` directives refine `level`.
//!
//! Settings are checked by [`LogPlan::new`] before anything global is touched.
//!
//! ```rust,no_run
//! # use georeg_domain::config::LoggingConfig;
//! # use georeg_logger::Logger;
//! # fn main() -> Result<(), georeg_logger::LoggerError> {
//! let _logger = Logger::from_config("georeg", &LoggingConfig::default())?;
//! tracing::warn!("visible at the default level");
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use georeg_domain::config::LoggingConfig;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_SUFFIX: &str = "log";

/// Rolling file output.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileSink {
    directory: PathBuf,
    max_files: usize,
    json: bool,
}

/// Validated logging settings for one host.
#[derive(Debug)]
pub struct LogPlan {
    name: String,
    level: LevelFilter,
    filter: Option<String>,
    file: Option<FileSink>,
}

impl LogPlan {
    /// Checks `config` for the host `name`.
    ///
    /// # Errors
    /// Rejects a blank name, an unknown level, an unparsable filter, and file logging that
    /// would keep no files.
    pub fn new(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoggerError::BlankName { context: None });
        }

        let level = config.level.trim().parse::<LevelFilter>().map_err(|_| LoggerError::Level {
            level: config.level.clone(),
            context: None,
        })?;

        let file = match &config.directory {
            Some(_) if config.max_files == 0 => {
                return Err(LoggerError::NoRetention { context: None });
            },
            Some(directory) => Some(FileSink {
                directory: directory.clone(),
                max_files: config.max_files,
                json: config.json,
            }),
            None => None,
        };

        let plan = Self { name: name.to_owned(), level, filter: config.env_filter.clone(), file };
        plan.env_filter()?;
        Ok(plan)
    }

    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    /// Directory of the rolling log files, when file logging is on.
    #[must_use]
    pub fn file_directory(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.directory.as_path())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.filter {
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::Filter {
                filter: filter.clone(),
                reason: e.to_string(),
                context: None,
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }

    /// Installs the process-wide subscriber.
    ///
    /// # Errors
    /// Fails when the log directory cannot be created or opened, or when a global subscriber is
    /// already installed.
    pub fn install(self) -> Result<Logger, LoggerError> {
        let filter = self.env_filter()?;

        let mut layers = Vec::with_capacity(2);
        layers.push(
            fmt::layer()
                .compact()
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr)
                .boxed(),
        );

        let guard = match self.file {
            Some(file) => {
                fs::create_dir_all(&file.directory)
                    .context(format!("creating {}", file.directory.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let layer = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if file.json { layer.json().boxed() } else { layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        Ok(Logger { guard })
    }
}

/// Handle of the installed subscriber.
///
/// Keep it alive until the host exits: dropping it flushes and stops the file writer.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Checks `config` and installs the subscriber for the host `name`.
    ///
    /// # Errors
    /// Errors of [`LogPlan::new`] and [`LogPlan::install`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        LogPlan::new(name, config)?.install()
    }

    /// Whether log lines are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}
