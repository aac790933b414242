//! Whole-payload validators for the create and update operations.
//!
//! Bodies arrive as untyped JSON maps. These validators are the only place
//! that turns them into typed inputs; every field is checked even after an
//! earlier one failed, so the caller gets the full error list in one go.

use serde_json::{Map, Value};

use super::fields;
use super::FieldError;
use crate::resolution::Resolution;
use crate::types::Timestamp;

pub const TITLE_FIELD: &str = "title";
pub const AUTHOR_FIELD: &str = "author";
pub const CAN_BE_DOWNLOADED_FIELD: &str = "canBeDownloaded";
pub const PUBLICATION_DATE_FIELD: &str = "publicationDate";

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;

/// Validated body of `POST /videos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVideoInput {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated body of `PUT /videos/{id}`. Every mutable field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVideoInput {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub publication_date: Timestamp,
}

/// Accumulates field errors while keeping successfully parsed values.
#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn take<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }
}

pub fn validate_create_video(
    body: &Map<String, Value>,
) -> Result<CreateVideoInput, Vec<FieldError>> {
    let mut c = Collector::default();

    let title = c.take(fields::parse_required_string(
        TITLE_FIELD,
        body.get(TITLE_FIELD),
        Some(TITLE_MAX_LEN),
    ));
    let author = c.take(fields::parse_required_string(
        AUTHOR_FIELD,
        body.get(AUTHOR_FIELD),
        Some(AUTHOR_MAX_LEN),
    ));
    let available_resolutions =
        c.take(fields::parse_resolutions(body.get(fields::RESOLUTIONS_FIELD)));

    match (title, author, available_resolutions) {
        (Some(title), Some(author), Some(available_resolutions)) if c.errors.is_empty() => {
            Ok(CreateVideoInput {
                title,
                author,
                available_resolutions,
            })
        }
        _ => Err(c.errors),
    }
}

pub fn validate_update_video(
    body: &Map<String, Value>,
) -> Result<UpdateVideoInput, Vec<FieldError>> {
    let (base, mut errors) = match validate_create_video(body) {
        Ok(base) => (Some(base), Vec::new()),
        Err(errors) => (None, errors),
    };
    let mut c = Collector::default();

    let can_be_downloaded = c.take(fields::parse_boolean(
        CAN_BE_DOWNLOADED_FIELD,
        body.get(CAN_BE_DOWNLOADED_FIELD),
    ));
    let min_age_restriction =
        c.take(fields::parse_age_restriction(body.get(fields::AGE_RESTRICTION_FIELD)));
    let publication_date = c.take(fields::parse_iso_date_time(
        PUBLICATION_DATE_FIELD,
        body.get(PUBLICATION_DATE_FIELD),
    ));

    errors.append(&mut c.errors);

    match (base, can_be_downloaded, min_age_restriction, publication_date) {
        (Some(base), Some(can_be_downloaded), Some(min_age_restriction), Some(publication_date))
            if errors.is_empty() =>
        {
            Ok(UpdateVideoInput {
                title: base.title,
                author: base.author,
                available_resolutions: base.available_resolutions,
                can_be_downloaded,
                min_age_restriction,
                publication_date,
            })
        }
        _ => Err(errors),
    }
}

/// Errors for a create body; empty iff the body is acceptable.
pub fn create_input_errors(body: &Map<String, Value>) -> Vec<FieldError> {
    validate_create_video(body).err().unwrap_or_default()
}

/// Errors for an update body; empty iff the body is acceptable.
pub fn update_input_errors(body: &Map<String, Value>) -> Vec<FieldError> {
    validate_update_video(body).err().unwrap_or_default()
}

/// View a request body as a field map. Anything but a JSON object has no
/// fields, so every required field reports as missing.
pub fn body_fields(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
