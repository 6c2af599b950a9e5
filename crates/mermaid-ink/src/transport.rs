//! Blocking HTTP calls to mermaid.ink.
//!
//! Each call is a single attempt: no retries, no redirects followed beyond
//! the agent defaults. HTTP status codes come back as values and are
//! classified here:
//!
//! - 200: success
//! - 400: [`ConvertError::InvalidSyntax`] with the response body
//! - 413: [`ConvertError::PayloadTooLarge`]
//! - other: [`ConvertError::Upstream`]

use std::io::ErrorKind;
use std::time::Duration;

use ureq::Agent;

use crate::error::ConvertError;

/// Create HTTP agent with the specified timeout.
///
/// Status codes are returned as responses rather than errors so they can be
/// classified by the caller.
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// GET a rendered diagram and return the response body.
///
/// # Errors
///
/// Returns the classified [`ConvertError`] for non-200 responses and
/// transport failures.
pub fn fetch_image(agent: &Agent, url: &str) -> Result<Vec<u8>, ConvertError> {
    let response = agent.get(url).call().map_err(classify_error)?;

    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status != 200 {
        let error_body = if status == 400 {
            body.read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"))
        } else {
            String::new()
        };
        return Err(classify_status(status, error_body));
    }

    // mermaid.ink responses have no size cap; ureq defaults to 10 MiB.
    body.with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(classify_error)
}

/// HEAD the svg endpoint to check that the diagram renders.
///
/// # Errors
///
/// Returns the classified [`ConvertError`]. A HEAD response has no body, so
/// [`ConvertError::InvalidSyntax`] carries an empty message.
pub fn check_syntax(agent: &Agent, url: &str) -> Result<(), ConvertError> {
    let response = agent.head(url).call().map_err(classify_error)?;

    match response.status().as_u16() {
        200 => Ok(()),
        status => Err(classify_status(status, String::new())),
    }
}

/// Map a non-200 status to its error.
fn classify_status(status: u16, body: String) -> ConvertError {
    match status {
        400 => ConvertError::InvalidSyntax(body),
        413 => ConvertError::PayloadTooLarge,
        other => ConvertError::Upstream(other),
    }
}

/// Map a transport failure to its error.
fn classify_error(err: ureq::Error) -> ConvertError {
    match err {
        ureq::Error::Timeout(_) => ConvertError::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => ConvertError::Connection,
        ureq::Error::Io(e) => match e.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => ConvertError::Timeout,
            ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::AddrNotAvailable => ConvertError::Connection,
            _ => ConvertError::Transport(e.to_string()),
        },
        ureq::Error::StatusCode(status) => classify_status(status, String::new()),
        other => ConvertError::Transport(other.to_string()),
    }
}
