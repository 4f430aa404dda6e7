use std::error::Error;
use std::io;

use std::fmt;

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};

#[derive(Debug)]
pub struct InternalError {
    what: String,
}

impl Error for InternalError {}
impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generic internal error: {}", self.what)
    }
}

impl From<io::Error> for InternalError {
    fn from(e: io::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for InternalError {
    fn from(e: serde_json::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

/// Responds 500; the detail stays in the server log, not the response body.
impl<'r> Responder<'r, 'static> for InternalError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        log::error!("request failed: {}", self.what);
        Err(Status::InternalServerError)
    }
}

pub type InternalResult<T> = Result<T, InternalError>;
