//! Mail clients for the hand-off.

use std::process::{Command, Stdio};

use orchard_commerce::checkout::MailClient;
use orchard_commerce::StoreError;
use tracing::debug;

/// Opens `mailto:` links with the desktop's default handler.
pub struct SystemMailClient;

impl SystemMailClient {
    fn command(uri: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        } else if cfg!(target_os = "windows") {
            // The empty string is the window title `start` expects first.
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl MailClient for SystemMailClient {
    fn open(&self, uri: &str) -> Result<(), StoreError> {
        let mut cmd = Self::command(uri);
        debug!(program = ?cmd.get_program(), "Opening mail client");

        // Fire and forget; the child is never waited on.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| StoreError::Dispatch(format!("could not launch mail client: {}", e)))?;
        Ok(())
    }
}

/// Prints the link instead of opening it.
pub struct StdoutMailClient;

impl MailClient for StdoutMailClient {
    fn open(&self, uri: &str) -> Result<(), StoreError> {
        println!("{}", uri);
        Ok(())
    }
}

/// Which client `--send` / `--print` selected.
pub enum HandOff {
    /// Open the system mail client.
    Send,
    /// Print the link.
    Print,
    /// Show the order only.
    Preview,
}

impl HandOff {
    pub fn from_flags(send: bool, print: bool) -> Self {
        match (send, print) {
            (true, _) => HandOff::Send,
            (false, true) => HandOff::Print,
            (false, false) => HandOff::Preview,
        }
    }

    /// The client to dispatch through, or `None` for preview only.
    pub fn client(&self) -> Option<Box<dyn MailClient>> {
        match self {
            HandOff::Send => Some(Box::new(SystemMailClient)),
            HandOff::Print => Some(Box::new(StdoutMailClient)),
            HandOff::Preview => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_off_flags() {
        assert!(matches!(HandOff::from_flags(true, false), HandOff::Send));
        assert!(matches!(HandOff::from_flags(false, true), HandOff::Print));
        assert!(matches!(HandOff::from_flags(false, false), HandOff::Preview));
        assert!(HandOff::Preview.client().is_none());
    }

    #[test]
    fn test_stdout_client_never_fails() {
        assert!(StdoutMailClient.open("mailto:a@b.c?subject=&body=").is_ok());
    }
}
