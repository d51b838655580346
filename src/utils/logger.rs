//! Tracing setup: stdout plus an optional size-capped log file.
//!
//! The log file is not rotated. Once it reaches the configured size it is
//! truncated to zero and writing starts over.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Append-only file that empties itself once it grows past `max_bytes`.
///
/// The size check happens before each write, so a single record is never
/// split across a truncation. `max_bytes == 0` disables truncation.
#[derive(Debug)]
pub struct TruncatingFile {
    file: File,
    max_bytes: u64,
    written: u64,
}

impl TruncatingFile {
    pub fn open(path: impl AsRef<Path>, max_bytes: u64) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            file,
            max_bytes,
            written,
        })
    }
}

impl Write for TruncatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.file.set_len(0)?;
            self.written = 0;
        }

        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Initialize the global subscriber.
///
/// `verbose` forces the `debug` level; otherwise `RUST_LOG` applies. The
/// returned guard flushes the file writer on drop and must be held for the
/// life of the process.
pub fn init_tracing(verbose: bool, config: &Config) -> Option<WorkerGuard> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let opened = config
        .log_file
        .as_ref()
        .map(|path| (path, TruncatingFile::open(path, config.log_max_bytes)));

    let mut guard = None;
    let mut open_error = None;
    let file_layer = match opened {
        Some((_, Ok(file))) => {
            let (writer, worker_guard) = tracing_appender::non_blocking(file);
            guard = Some(worker_guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Some((path, Err(e))) => {
            open_error = Some(format!("{}: {}", path.display(), e));
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = open_error {
        tracing::warn!("Logging to stdout only, could not open log file {}", e);
    }

    guard
}
