use super::Action;
use crate::{
    report::{self, Console},
    transport::ReqwestClient,
};
use anyhow::Context;
use std::process::ExitCode;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<ExitCode> {
    match action {
        Action::Ping { configs } => {
            let client = ReqwestClient::new().context("Failed to build HTTP client")?;
            let mut console = Console::stdio();

            let report = report::run(configs.as_deref(), &client, &mut console)
                .await
                .context("Failed to write report")?;

            Ok(report.exit_code())
        }
    }
}
