use crate::mount::MountRequest;

use tracing_subscriber::{fmt, EnvFilter};

/// A mount request which can be traced.
pub struct MountTrace {
    target: String,
    start: std::time::Instant,
}

impl MountTrace {
    /// Add new request and debug trace it.
    pub fn new_dbg(request: &MountRequest) -> Self {
        let trace = Self::new(request);
        tracing::debug!("[ MOUNT ] {} Request started", trace.target);
        trace
    }

    fn new(request: &MountRequest) -> Self {
        Self {
            target: request.target().display().to_string(),
            start: std::time::Instant::now(),
        }
    }

    /// Get completion log message.
    pub fn log_str(self) -> String {
        format!(
            "[ MOUNT ] {} Request completed successfully after {:?}",
            self.target,
            self.start.elapsed()
        )
    }

    /// Log completion info.
    pub fn info_ok(self) {
        tracing::info!("{}", self.log_str())
    }
}

/// Initialize tracing to stderr, but only when `RUST_LOG` is set.
/// Without it the only output is the usage text or the mount error.
pub fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize tracing: {error}");
    }
}
