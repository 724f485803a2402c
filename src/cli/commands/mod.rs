use crate::config::CONFIGS_ENV;
use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
///
/// The run takes no arguments, targets come from the environment.
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .after_help(format!(
            "Targets are read from the {CONFIGS_ENV} environment variable (a .env file is \
             loaded first if present):\n  \
             {CONFIGS_ENV}='[{{\"name\":\"My DB\",\"url\":\"https://xxx.supabase.co\",\"key\":\"your-key\"}}]'\n\n\
             Exits 0 when every database answered, 1 otherwise."
        ))
}
