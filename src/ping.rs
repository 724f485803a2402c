use crate::{
    config::TargetDescriptor,
    report::Console,
    transport::{HttpClient, TransportError},
};
use std::{
    io::{self, Write},
    time::Duration,
};
use thiserror::Error;
use tracing::debug;

/// Path appended to the target url for the reachability request
pub const REST_PATH: &str = "/rest/v1/";

/// Why a single target counts as unreachable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("Missing url or key for {0}")]
    MissingField(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success(Duration),
    Failure(ProbeError),
}

/// A status proves the server answered: any 2xx, or exactly 401 or 404
#[inline]
#[must_use]
pub const fn is_alive(status: u16) -> bool {
    matches!(status, 200..=299 | 401 | 404)
}

#[inline]
#[must_use]
pub fn rest_endpoint(url: &str) -> String {
    format!("{url}{REST_PATH}")
}

/// Check one target without printing anything
///
/// Never fails: validation and network errors become [`ProbeOutcome::Failure`].
pub async fn probe<C>(client: &C, target: &TargetDescriptor, name: &str) -> ProbeOutcome
where
    C: HttpClient + ?Sized,
{
    let (Some(url), Some(key)) = (target.url.as_deref(), target.key.as_deref()) else {
        return ProbeOutcome::Failure(ProbeError::MissingField(name.to_string()));
    };

    let endpoint = rest_endpoint(url);
    let bearer = format!("Bearer {key}");
    debug!(name, endpoint = %endpoint, "probing");

    match client
        .get(&endpoint, &[("apikey", key), ("Authorization", bearer.as_str())])
        .await
    {
        Ok(response) if is_alive(response.status) => ProbeOutcome::Success(response.elapsed),
        Ok(response) => ProbeOutcome::Failure(ProbeError::Status(response.status)),
        Err(e) => ProbeOutcome::Failure(e.into()),
    }
}

/// Probe the target at `index` and print its progress and outcome lines
///
/// # Errors
///
/// Returns an error if writing to the console fails
pub async fn ping_target<C, O, E>(
    client: &C,
    target: &TargetDescriptor,
    index: usize,
    total: usize,
    console: &mut Console<O, E>,
) -> io::Result<ProbeOutcome>
where
    C: HttpClient + ?Sized,
    O: Write,
    E: Write,
{
    let name = target.display_name(index);
    console.target(index + 1, total, &name, target.url.as_deref())?;

    let outcome = probe(client, target, &name).await;
    match &outcome {
        ProbeOutcome::Success(elapsed) => console.success(*elapsed)?,
        ProbeOutcome::Failure(reason) => console.failure(reason)?,
    }

    Ok(outcome)
}
