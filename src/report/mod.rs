//! Run orchestration
//!
//! Decodes the target list, probes every target in order, one at a time, and
//! prints the running report through a [`Console`].

pub mod console;

pub use console::Console;

use crate::{
    config::{self, ConfigError},
    ping::{self, ProbeOutcome},
    transport::HttpClient,
};
use chrono::Utc;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::info;

/// Aggregate counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            success: 0,
            failed: 0,
            total,
        }
    }

    pub fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Success(_) => self.success += 1,
            ProbeOutcome::Failure(_) => self.failed += 1,
        }
    }

    #[must_use]
    pub const fn all_reachable(&self) -> bool {
        self.failed == 0
    }
}

/// How a run ended
#[derive(Debug)]
pub enum Report {
    /// Every target was probed
    Completed(RunSummary),
    /// Configuration could not be loaded, nothing was probed
    Aborted(ConfigError),
}

impl Report {
    /// 0 when every target answered, 1 otherwise
    #[must_use]
    pub const fn status(&self) -> u8 {
        match self {
            Self::Completed(summary) if summary.all_reachable() => 0,
            Self::Completed(_) | Self::Aborted(_) => 1,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Probe every target described by `configs` and print the report
///
/// Configuration errors are reported on the console and returned as
/// [`Report::Aborted`], per-target failures only bump the failure counter.
///
/// # Errors
///
/// Returns an error only if writing to the console fails
pub async fn run<C, O, E>(
    configs: Option<&str>,
    client: &C,
    console: &mut Console<O, E>,
) -> io::Result<Report>
where
    C: HttpClient + ?Sized,
    O: Write,
    E: Write,
{
    let targets = match config::parse_targets(configs) {
        Ok(targets) => targets,
        Err(e) => {
            console.fatal(&e)?;
            return Ok(Report::Aborted(e));
        }
    };

    let total = targets.len();
    console.banner(total, Utc::now())?;

    let mut summary = RunSummary::new(total);
    for (index, target) in targets.iter().enumerate() {
        let outcome = ping::ping_target(client, target, index, total, console).await?;
        summary.record(&outcome);
    }

    info!(
        success = summary.success,
        failed = summary.failed,
        total = summary.total,
        "run finished"
    );
    console.summary(&summary)?;

    Ok(Report::Completed(summary))
}
