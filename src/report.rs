//! Handing the final result to whoever displays it.
//!
//! The game returns a [`GameReport`] when the puzzle is solved. Each
//! configured [`ResultsReporter`] gets it exactly once. A reporter that
//! fails is logged and skipped; it never stops the game from exiting.

use derive_more::{Display, Error};
use std::io::Write;
use std::path::PathBuf;
use strictly_hanoi::GameReport;
use tracing::{error, info, instrument};

/// Receives the final report of a solved game.
pub trait ResultsReporter {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Delivers the report.
    fn report(&mut self, report: &GameReport) -> Result<(), ReportError>;
}

/// Logs the report as a structured tracing event.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ResultsReporter for TracingReporter {
    fn name(&self) -> &str {
        "tracing"
    }

    fn report(&mut self, report: &GameReport) -> Result<(), ReportError> {
        info!(
            player = %report.player_name(),
            disks = report.disk_count().get(),
            steps = report.steps(),
            minimum_steps = report.minimum_steps(),
            optimal = report.optimal(),
            "Game completed"
        );
        Ok(())
    }
}

/// Writes the report as pretty-printed JSON to a file.
#[derive(Debug)]
pub struct JsonReporter {
    path: PathBuf,
}

impl JsonReporter {
    /// Creates a reporter writing to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ResultsReporter for JsonReporter {
    fn name(&self) -> &str {
        "json"
    }

    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    fn report(&mut self, report: &GameReport) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::new(format!("Failed to serialize report: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            ReportError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        info!("Results written");
        Ok(())
    }
}

/// Prints a results summary to a writer, normally stdout after the game exits.
#[derive(Debug)]
pub struct SummaryReporter<W> {
    out: W,
}

impl<W: Write> SummaryReporter<W> {
    /// Creates a reporter printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultsReporter for SummaryReporter<W> {
    fn name(&self) -> &str {
        "summary"
    }

    fn report(&mut self, report: &GameReport) -> Result<(), ReportError> {
        let write = |out: &mut W| -> std::io::Result<()> {
            writeln!(out, "You Won, {}!", report.player_name())?;
            writeln!(out, "Disks:         {}", report.disk_count())?;
            writeln!(out, "Your Steps:    {}", report.steps())?;
            writeln!(out, "Minimum Steps: {}", report.minimum_steps())?;
            if *report.optimal() {
                writeln!(out, "You finished in minimum steps!")?;
            } else {
                writeln!(out, "{} steps over the minimum.", report.extra_steps())?;
            }
            out.flush()
        };
        write(&mut self.out)
            .map_err(|e| ReportError::new(format!("Failed to print summary: {}", e)))
    }
}

/// Delivers a report to every reporter, logging failures.
///
/// Returns how many reporters succeeded.
#[instrument(skip_all, fields(reporters = reporters.len()))]
pub fn deliver(report: &GameReport, reporters: &mut [Box<dyn ResultsReporter>]) -> usize {
    reporters
        .iter_mut()
        .map(|reporter| match reporter.report(report) {
            Ok(()) => true,
            Err(e) => {
                error!(reporter = reporter.name(), error = %e, "Failed to deliver results");
                false
            }
        })
        .filter(|delivered| *delivered)
        .count()
}

/// Report delivery error.
#[derive(Debug, Clone, Display, Error)]
#[display("Report error: {} at {}:{}", message, file, line)]
pub struct ReportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReportError {
    /// Creates a new report error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::{DiskCount, SessionStats};

    fn report(steps: u32) -> GameReport {
        GameReport::from_stats(SessionStats::new("Ada".to_string(), DiskCount::DEFAULT, steps))
    }

    struct FailingReporter;

    impl ResultsReporter for FailingReporter {
        fn name(&self) -> &str {
            "failing"
        }

        fn report(&mut self, _report: &GameReport) -> Result<(), ReportError> {
            Err(ReportError::new("unreachable page".to_string()))
        }
    }

    #[test]
    fn test_summary_for_optimal_game() {
        let mut reporter = SummaryReporter::new(Vec::new());
        reporter.report(&report(7)).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("You Won, Ada!"));
        assert!(text.contains("Your Steps:    7"));
        assert!(text.contains("Minimum Steps: 7"));
        assert!(text.contains("You finished in minimum steps!"));
    }

    #[test]
    fn test_summary_for_slow_game() {
        let mut reporter = SummaryReporter::new(Vec::new());
        reporter.report(&report(11)).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("4 steps over the minimum."));
        assert!(!text.contains("minimum steps!"));
    }

    #[test]
    fn test_failures_do_not_stop_other_reporters() {
        let mut reporters: Vec<Box<dyn ResultsReporter>> =
            vec![Box::new(FailingReporter), Box::new(TracingReporter)];
        assert_eq!(deliver(&report(7), &mut reporters), 1);
    }

    #[test]
    fn test_json_reporter_to_missing_directory_fails() {
        let mut reporter = JsonReporter::new(PathBuf::from("/nonexistent-dir/results.json"));
        let err = reporter.report(&report(7)).unwrap_err();
        assert!(err.message.starts_with("Failed to write"));
    }
}
