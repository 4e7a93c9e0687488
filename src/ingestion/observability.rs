use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::error::ConvertError;

/// Which utility produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// WooCommerce -> Judge.me schema mapping.
    ConvertReviews,
    /// Header normalization and reordering.
    RearrangeHeaders,
    /// Chunked splitting.
    SplitCsv,
}

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RunSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the run failed).
    Error,
    /// Critical error (I/O failures: missing files, unwritable directories).
    Critical,
}

impl RunSeverity {
    /// Severity of a failed run.
    pub fn for_error(e: &ConvertError) -> Self {
        if e.is_io() {
            RunSeverity::Critical
        } else {
            RunSeverity::Error
        }
    }
}

/// Context about a single utility run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Utility that ran.
    pub tool: Tool,
    /// Input file.
    pub input: PathBuf,
}

/// Counters reported on a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Data rows written across all outputs.
    pub rows_written: usize,
    /// Output files created.
    pub files_written: usize,
}

/// Observer interface for run outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait RunObserver: Send + Sync {
    /// Called when a run succeeds.
    fn on_success(&self, _ctx: &RunContext, _stats: RunStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _ctx: &RunContext, _severity: RunSeverity, _error: &ConvertError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &ConvertError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Delivers run outcomes to the observers attached to a utility run.
///
/// Every observer sees each success and failure. Failures whose severity reaches the alert
/// threshold are also delivered through [`RunObserver::on_alert`]. A reporter with no observers
/// does nothing, which is what [`Default`] gives you.
#[derive(Clone)]
pub struct RunReporter {
    observers: Vec<Arc<dyn RunObserver>>,
    alert_at_or_above: RunSeverity,
}

impl RunReporter {
    /// Reporter without observers that alerts at `alert_at_or_above`.
    pub fn new(alert_at_or_above: RunSeverity) -> Self {
        Self {
            observers: Vec::new(),
            alert_at_or_above,
        }
    }

    /// Attach another observer.
    pub fn with_observer(mut self, observer: Arc<dyn RunObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Reporter used by the binaries: `tracing` events, plus a JSON-lines file when `event_log`
    /// is set. Only critical failures alert.
    pub fn for_cli(event_log: Option<&Path>) -> Self {
        let reporter = Self::default().with_observer(Arc::new(TracingObserver));
        match event_log {
            Some(path) => reporter.with_observer(Arc::new(FileObserver::new(path))),
            None => reporter,
        }
    }

    /// Severity at which failures alert.
    pub fn alert_at_or_above(&self) -> RunSeverity {
        self.alert_at_or_above
    }

    /// Report the outcome of one run. `stats` is only evaluated for a success, and only when
    /// someone is listening.
    pub fn report<T>(&self, ctx: &RunContext, result: &Result<T, ConvertError>, stats: impl FnOnce(&T) -> RunStats) {
        if self.observers.is_empty() {
            return;
        }
        match result {
            Ok(v) => {
                let stats = stats(v);
                for o in &self.observers {
                    o.on_success(ctx, stats);
                }
            }
            Err(e) => {
                let severity = RunSeverity::for_error(e);
                let alert = severity >= self.alert_at_or_above;
                for o in &self.observers {
                    o.on_failure(ctx, severity, e);
                    if alert {
                        o.on_alert(ctx, severity, e);
                    }
                }
            }
        }
    }
}

impl Default for RunReporter {
    fn default() -> Self {
        Self::new(RunSeverity::Critical)
    }
}

impl fmt::Debug for RunReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunReporter")
            .field("observers_len", &self.observers.len())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Forwards run events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        tracing::info!(
            tool = ?ctx.tool,
            input = %ctx.input.display(),
            rows_read = stats.rows_read,
            rows_written = stats.rows_written,
            files_written = stats.files_written,
            "run finished"
        );
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &ConvertError) {
        tracing::warn!(tool = ?ctx.tool, input = %ctx.input.display(), ?severity, %error, "run failed");
    }

    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &ConvertError) {
        tracing::error!(tool = ?ctx.tool, input = %ctx.input.display(), ?severity, %error, "run failed (alert)");
    }
}

/// Appends run events to a local log file, one JSON object per line.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: serde_json::Value) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{event}");
        }
    }

    fn failure_event(
        kind: &str,
        ctx: &RunContext,
        severity: RunSeverity,
        error: &ConvertError,
    ) -> serde_json::Value {
        serde_json::json!({
            "ts": chrono::Utc::now().to_rfc3339(),
            "event": kind,
            "tool": ctx.tool,
            "input": ctx.input.display().to_string(),
            "severity": severity,
            "error": error.to_string(),
        })
    }
}

impl RunObserver for FileObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        self.append(serde_json::json!({
            "ts": chrono::Utc::now().to_rfc3339(),
            "event": "ok",
            "tool": ctx.tool,
            "input": ctx.input.display().to_string(),
            "stats": stats,
        }));
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &ConvertError) {
        self.append(Self::failure_event("fail", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &ConvertError) {
        self.append(Self::failure_event("alert", ctx, severity, error));
    }
}
