use is_terminal::IsTerminal;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable naming an append-mode log file
pub const LOG_FILE_ENV: &str = "BACKLOG_MCP_LOG_FILE";

/// A thread-safe writer wrapper that flushes after every write.
///
/// stdout carries the MCP stream, so when logs go to a file they must be
/// visible to someone tailing it while the server is still running.
#[derive(Clone)]
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

/// Filter for the requested level, or `RUST_LOG`, or `info`
pub fn build_filter(level: Option<Level>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::default().add_directive(LevelFilter::from_level(level).into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Install the global tracing subscriber
///
/// Logs go to the file named by [`LOG_FILE_ENV`] when it is set and can be
/// opened, otherwise to stderr.
pub fn init_logging(level: Option<Level>) {
    let filter = build_filter(level);

    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                let guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(move || guard.clone())
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file {path}, using stderr: {e}");
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
