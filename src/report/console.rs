use super::RunSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use std::{
    fmt::Display,
    io::{self, Write},
    time::Duration,
};

const RULE_WIDTH: usize = 60;

const TROUBLESHOOTING: &[&str] = &[
    "   1. Make sure SUPABASE_CONFIGS is set in your .env file or environment",
    "   2. SUPABASE_CONFIGS should be a JSON array like:",
    r#"      [{"name":"My DB","url":"https://xxx.supabase.co","key":"your-key"}]"#,
    "   3. Check your Supabase credentials and permissions",
];

/// Human readable report: progress goes to `out`, failures and fatal errors to `err`
///
/// The line format is consumed by wrapping scripts, keep it stable.
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<io::Stdout, io::Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    #[must_use]
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Give back the underlying writers
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn rule() -> String {
        "═".repeat(RULE_WIDTH)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn banner(&mut self, total: usize, now: DateTime<Utc>) -> io::Result<()> {
        writeln!(self.out, "🚀 Starting to ping {total} database(s)...")?;
        writeln!(
            self.out,
            "⏰ Timestamp: {}",
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(self.out, "{}", Self::rule())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn target(
        &mut self,
        position: usize,
        total: usize,
        name: &str,
        url: Option<&str>,
    ) -> io::Result<()> {
        writeln!(self.out, "\n📊 [{position}/{total}] Pinging: {name}")?;
        writeln!(self.out, "📍 URL: {}", url.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn success(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "✅ Success! Response time: {}ms",
            elapsed.as_millis()
        )
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn failure(&mut self, reason: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "❌ Failed: {reason}")
    }

    /// Totals followed by the closing verdict
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "\n{}", Self::rule())?;
        writeln!(self.out, "📈 Summary:")?;
        writeln!(self.out, "   ✅ Successful: {}", summary.success)?;
        writeln!(self.out, "   ❌ Failed: {}", summary.failed)?;
        writeln!(self.out, "   📊 Total: {}", summary.total)?;
        self.out.flush()?;

        if summary.all_reachable() {
            writeln!(self.out, "\n🎉 All databases pinged successfully!")?;
        } else {
            writeln!(self.err, "\n⚠️  Some databases failed to ping")?;
        }

        self.flush()
    }

    /// Error that stopped the run before any probe, plus remediation hints
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn fatal(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "\n❌ Fatal error: {error}")?;
        writeln!(self.err, "\n💡 Troubleshooting tips:")?;
        for tip in TROUBLESHOOTING {
            writeln!(self.err, "{tip}")?;
        }
        self.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
