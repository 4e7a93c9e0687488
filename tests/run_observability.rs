use std::sync::{Arc, Mutex};

use review_csv_tools::commands::convert::{convert_reviews, ConvertOptions};
use review_csv_tools::commands::split::{split_file, SplitOptions};
use review_csv_tools::ingestion::{FileObserver, RunContext, RunObserver, RunReporter, RunSeverity, RunStats, Tool};
use review_csv_tools::ConvertError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(Tool, RunStats)>>,
    failures: Mutex<Vec<RunSeverity>>,
    alerts: Mutex<Vec<RunSeverity>>,
}

impl RunObserver for RecordingObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        self.successes.lock().unwrap().push((ctx.tool, stats));
    }

    fn on_failure(&self, _ctx: &RunContext, severity: RunSeverity, _error: &ConvertError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &RunContext, severity: RunSeverity, _error: &ConvertError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn observer_receives_success_stats() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = ConvertOptions {
        input: "tests/fixtures/woocommerce_reviews.csv".into(),
        output_dir: dir.path().to_path_buf(),
        reporter: RunReporter::default().with_observer(obs.clone()),
        ..Default::default()
    };

    convert_reviews(&opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![(
            Tool::ConvertReviews,
            RunStats {
                rows_read: 3,
                rows_written: 3,
                files_written: 1
            }
        )]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = ConvertOptions {
        input: "tests/fixtures/does_not_exist.csv".into(),
        reporter: RunReporter::new(RunSeverity::Critical).with_observer(obs.clone()),
        ..Default::default()
    };

    let _ = convert_reviews(&opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![RunSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![RunSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reviews.csv");
    std::fs::write(&input, "id\n1\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let opts = SplitOptions {
        input,
        output_dir: dir.path().to_path_buf(),
        chunk_size: 0,
        reporter: RunReporter::default().with_observer(obs.clone()),
        ..Default::default()
    };

    let _ = split_file(&opts, |_, _| {}).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![RunSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn file_observer_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("events.jsonl");
    let opts = ConvertOptions {
        input: "tests/fixtures/woocommerce_reviews.csv".into(),
        output_dir: dir.path().to_path_buf(),
        reporter: RunReporter::default().with_observer(Arc::new(FileObserver::new(&log))),
        ..Default::default()
    };

    convert_reviews(&opts).unwrap();
    let _ = convert_reviews(&ConvertOptions {
        input: dir.path().join("absent.csv"),
        ..opts.clone()
    })
    .unwrap_err();

    let text = std::fs::read_to_string(&log).unwrap();
    let events: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "ok");
    assert_eq!(events[0]["tool"], "convert_reviews");
    assert_eq!(events[0]["stats"]["rows_read"], 3);
    assert_eq!(events[1]["event"], "fail");
    assert_eq!(events[1]["severity"], "Critical");
    assert_eq!(events[2]["event"], "alert");
}

#[test]
fn reporter_delivers_to_every_observer_and_respects_threshold() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let reporter = RunReporter::new(RunSeverity::Error)
        .with_observer(first.clone())
        .with_observer(second.clone());
    let ctx = RunContext {
        tool: Tool::RearrangeHeaders,
        input: "reviews.csv".into(),
    };

    let failed: Result<(), ConvertError> = Err(ConvertError::InvalidChunkSize);
    reporter.report(&ctx, &failed, |_| RunStats::default());
    let ok: Result<usize, ConvertError> = Ok(4);
    reporter.report(&ctx, &ok, |rows| RunStats {
        rows_read: *rows,
        rows_written: *rows,
        files_written: 1,
    });

    for obs in [&first, &second] {
        assert_eq!(*obs.failures.lock().unwrap(), vec![RunSeverity::Error]);
        assert_eq!(*obs.alerts.lock().unwrap(), vec![RunSeverity::Error]);
        assert_eq!(obs.successes.lock().unwrap()[0].1.rows_read, 4);
    }
}

#[test]
fn reporter_without_observers_skips_stats() {
    let reporter = RunReporter::default();
    let ctx = RunContext {
        tool: Tool::SplitCsv,
        input: "reviews.csv".into(),
    };
    let ok: Result<(), ConvertError> = Ok(());
    reporter.report(&ctx, &ok, |_| panic!("stats computed without observers"));
    assert_eq!(reporter.alert_at_or_above(), RunSeverity::Critical);
}
