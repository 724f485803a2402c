use std::process::ExitCode;
use supaping::{cli, report::Console};

#[tokio::main]
async fn main() -> ExitCode {
    match cli::start().await {
        Ok(code) => code,
        Err(e) => {
            // setup failed before any probe could run
            let _ = Console::stdio().fatal(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
