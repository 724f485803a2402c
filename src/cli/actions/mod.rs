mod run;

use std::process::ExitCode;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    /// Probe every target in the raw `SUPABASE_CONFIGS` value, if any
    Ping { configs: Option<String> },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if setup fails or the report cannot be written
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}
