use std::error::Error;
use std::fmt;

use crate::data::{Document, ErrorResponse};

/// Blocking HTTP client for the document endpoint. Both calls move the whole
/// document; there is no partial update on the wire.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug)]
pub enum SyncError {
    Http(reqwest::Error),
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Http(e) => write!(f, "request failed: {}", e),
            SyncError::Server { status, message } => {
                write!(f, "server rejected request ({}): {}", status, message)
            }
        }
    }
}

impl Error for SyncError {}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> SyncError {
        SyncError::Http(e)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        ApiClient {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/data", self.base_url)
    }

    /// Fetches the document currently persisted by the server.
    pub fn fetch_document(&self) -> Result<Document, SyncError> {
        let response = check(self.http.get(self.endpoint()).send()?)?;
        Ok(response.json()?)
    }

    /// Pushes the full document, superseding whatever the server holds. The
    /// success body carries no information and is ignored.
    pub fn push_document(&self, document: &Document) -> Result<(), SyncError> {
        check(self.http.post(self.endpoint()).json(document).send()?)?;
        Ok(())
    }
}

fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .map(|e| e.error)
        .unwrap_or_else(|_| status.to_string());

    Err(SyncError::Server { status, message })
}
