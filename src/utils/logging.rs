use std::fmt;
use std::fmt::Write;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

use super::error::Result;

pub mod prelude {
    pub use tracing::{debug, error, info, trace, warn};
    pub use tracing::{debug_span, error_span, info_span, trace_span, warn_span};
    pub use tracing::{event, field::Empty, instrument, span};
}

/// This needs to be hold in main
pub struct GlobalLoggingContext {
    _worker_guard: WorkerGuard,
}

pub fn setup() -> Result<GlobalLoggingContext> {
    // stderr, so the actual command output (config dump etc.) stays clean
    // on stdout
    let (writer, guard) = tracing_appender::non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(std::io::stderr());

    let filter = EnvFilter::try_from_env("CPUSCHED_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(filter).with(
        FmtLayer::default()
            .with_target(false)
            .with_timer(ISOTimeFormat)
            .with_writer(writer),
    );
    subscriber.try_init()?;

    Ok(GlobalLoggingContext { _worker_guard: guard })
}

struct ISOTimeFormat;

impl FormatTime for ISOTimeFormat {
    fn format_time(&self, w: &mut dyn Write) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}
