use std::sync::{Arc, Mutex};

/// Destination for the informational, warning, and error messages produced
/// while scoring a batch. Passed explicitly so scoring code holds no global
/// logging state.
pub trait DiagnosticSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards diagnostics to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Keeps every diagnostic in memory, for callers that want to inspect or
/// replay them after a run.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|event| event.level == level)
            .map(|event| event.message.clone())
            .collect()
    }

    fn record(&self, level: DiagnosticLevel, message: &str) {
        self.lock().push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned buffer still holds valid diagnostics.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.record(DiagnosticLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(DiagnosticLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(DiagnosticLevel::Error, message);
    }
}
