use super::{commands, dispatch};
use crate::{config, telemetry};
use anyhow::Result;
use std::process::ExitCode;
use tracing::{debug, info};

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Handle `--help`/`--version`, reject unexpected arguments
/// 2. Initialize Telemetry: Set up structured logging on stderr
/// 3. Load `.env`: Best effort, a missing file is only logged
/// 4. Dispatch: Read the environment into a typed Action
/// 5. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any setup step fails
pub async fn start() -> Result<ExitCode> {
    // 1. Parse: Extract CLI arguments
    let _matches = commands::new().get_matches();

    // 2. Initialize Telemetry
    telemetry::init()?;

    // 3. Load .env, never fatal
    match config::load_dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) => info!("Note: .env not loaded ({e}), using environment variables from system"),
    }

    // 4. Dispatch: Convert the environment into a typed Action
    let action = dispatch::dispatch();

    // 5. Execute: Run the action's business logic
    action.execute().await
}
