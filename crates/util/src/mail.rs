//! Hands `mailto:` URLs to the platform's default opener.
//!
//! The contact action never sends mail itself; it asks the desktop to open
//! whatever composer the user has configured.

use std::{
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("refusing to open non-mailto URL '{0}'")]
    NotMailto(String),
    #[error("failed to launch {opener}: {source}")]
    Launch {
        opener: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Opener binary and leading arguments for the current platform.
fn platform_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Spawns the platform opener for `mailto_url` without waiting for it.
pub fn open_mail_composer(mailto_url: &str) -> Result<(), MailError> {
    let url = mailto_url.trim();
    if !url.starts_with("mailto:") {
        return Err(MailError::NotMailto(url.to_string()));
    }
    let (opener, args) = platform_opener();
    debug!(opener, url, "opening mail composer");
    Command::new(opener)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|child| {
            reap_in_background(child);
        })
        .map_err(|source| MailError::Launch { opener, source })
}

/// Waits for the opener on a detached thread so it never lingers as a zombie.
fn reap_in_background(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!(%status, "mail opener exited");
            Some(status)
        }
        Err(error) => {
            warn!(%error, "failed to wait for mail opener");
            None
        }
    })
}
