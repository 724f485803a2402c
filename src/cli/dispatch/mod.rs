use crate::{cli::actions::Action, config::CONFIGS_ENV};
use std::ffi::OsString;

/// Build the typed action from the process environment
///
/// A value that is not valid unicode is kept as lossy text so it still
/// reaches the decoder and fails there as malformed instead of as missing.
#[must_use]
pub fn dispatch() -> Action {
    from_env_value(std::env::var_os(CONFIGS_ENV))
}

fn from_env_value(value: Option<OsString>) -> Action {
    let configs = value.map(|v| {
        v.into_string()
            .unwrap_or_else(|v| v.to_string_lossy().into_owned())
    });

    Action::Ping { configs }
}
