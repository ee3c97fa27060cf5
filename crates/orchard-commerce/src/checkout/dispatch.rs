//! Order hand-off through `mailto:` links.
//!
//! The storefront never sends mail itself. It builds a pre-filled compose
//! link and asks a [`MailClient`] to open it; whether the shopper actually
//! presses "send" is not observable.

use std::cell::RefCell;

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Build `mailto:{to}?subject={subject}&body={body}`.
///
/// Subject and body are percent-encoded as UTF-8; everything but RFC 3986
/// unreserved characters is escaped, so spaces become `%20` and newlines
/// `%0A`. The recipient is used verbatim.
pub fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Something that can open a `mailto:` link.
pub trait MailClient {
    /// Hand the link off. Returning `Ok` means the hand-off was issued, not
    /// that any mail was sent.
    fn open(&self, uri: &str) -> Result<(), StoreError>;
}

/// A completed hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dispatch {
    /// Recipient address.
    pub to: String,
    /// Unencoded subject.
    pub subject: String,
    /// Unencoded body.
    pub body: String,
    /// The link that was opened.
    pub uri: String,
}

impl Dispatch {
    /// Build the link and hand it to `mail`.
    pub fn send<M: MailClient + ?Sized>(
        mail: &M,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let to = to.into();
        let subject = subject.into();
        let body = body.into();
        let uri = mailto_uri(&to, &subject, &body);
        mail.open(&uri)?;
        Ok(Self {
            to,
            subject,
            body,
            uri,
        })
    }
}

/// Mail client that only remembers what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingMailClient {
    opened: RefCell<Vec<String>>,
}

impl RecordingMailClient {
    /// Links opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.opened.borrow().last().cloned()
    }
}

impl MailClient for RecordingMailClient {
    fn open(&self, uri: &str) -> Result<(), StoreError> {
        self.opened.borrow_mut().push(uri.to_string());
        Ok(())
    }
}
