use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::{get, post, State};

use serde_json::Value;

use crate::data::{Document, ErrorResponse, SaveResponse};
use crate::internal_error::InternalError;
use crate::storage::DocumentStore;

#[get("/data")]
pub fn get_data(store: &State<DocumentStore>) -> Json<Document> {
    Json(store.load())
}

#[post("/data", format = "json", data = "<body>")]
pub fn set_data(
    body: Json<Value>,
    store: &State<DocumentStore>,
) -> Result<Json<SaveResponse>, SaveError> {
    let document = Document::from_body(&body).ok_or(SaveError::InvalidDocument)?;
    store.replace(&document)?;

    Ok(Json(SaveResponse { success: true }))
}

#[derive(Debug)]
pub enum SaveError {
    InvalidDocument,
    Storage(InternalError),
}

impl From<InternalError> for SaveError {
    fn from(e: InternalError) -> SaveError {
        SaveError::Storage(e)
    }
}

impl<'r> Responder<'r, 'static> for SaveError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            SaveError::InvalidDocument => status::Custom(
                Status::BadRequest,
                Json(ErrorResponse {
                    error: "Invalid data structure".to_string(),
                }),
            )
            .respond_to(request),
            SaveError::Storage(e) => e.respond_to(request),
        }
    }
}
