//! Fire-and-forget diagnostic sink injected into the controller. Recording
//! must never block or fail the user-facing operation.

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagLevel {
    Info,
    Error,
}

/// Append-only log sink. The core only writes; no read interface.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, level: DiagLevel, message: &str);
}

/// Production sink routing diagnostics through the `tracing` macros; the
/// subscriber (stderr + log file) is installed by the application shell.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, level: DiagLevel, message: &str) {
        match level {
            DiagLevel::Info => info!("{message}"),
            DiagLevel::Error => error!("{message}"),
        }
    }
}
