//! Desktop notification dispatch
//!
//! Alerts leave the pipeline through the [`Notifier`] capability; the
//! default adapter shows a blocking zenity dialog. Message bodies are
//! sanitized to printable ASCII before they reach any adapter.

use crate::alerts::AlertMessage;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised by a notification adapter
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The notifier process could not be launched
    #[error("failed to launch notifier: {source}")]
    Spawn {
        #[from]
        source: std::io::Error,
    },

    /// The notifier ran but reported failure
    #[error("notifier exited with {status}")]
    Dispatch { status: ExitStatus },
}

/// Capability for delivering an alert to the user's desktop
pub trait Notifier {
    /// Display `title` and `body`, blocking until dismissed
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Notifier backed by a `zenity --info` dialog
#[derive(Debug, Default)]
pub struct ZenityNotifier;

impl Notifier for ZenityNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let status = Command::new("zenity")
            .arg("--info")
            .arg("--title")
            .arg(title)
            .arg("--text")
            .arg(body)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Dispatch { status })
        }
    }
}

/// Replace every character outside printable ASCII [32, 126] with a space.
///
/// Character count is preserved so positions in the message stay stable.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { ' ' })
        .collect()
}

/// Sanitize and deliver one alert. Delivery failure is logged, not fatal.
pub fn dispatch(notifier: &dyn Notifier, alert: &AlertMessage) {
    let body = sanitize_message(&alert.body);
    info!("{} message: {}", alert.title, body);

    if let Err(e) = notifier.notify(&alert.title, &body) {
        warn!("Failed to send notification: {e}");
    }
}
