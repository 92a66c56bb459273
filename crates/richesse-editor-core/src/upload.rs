//! Image upload bookkeeping.
//!
//! The transport itself lives in the browser crate. This module decides what
//! may be uploaded, interprets the endpoint's answer, and guards against a
//! second upload starting while one is in flight.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::EditorCommand;

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

impl Attachment {
    /// Command inserting this image with a resize handle, alt text being the
    /// file name.
    pub fn resizable_command(&self) -> EditorCommand {
        EditorCommand::InsertResizableImage {
            url: self.url.clone(),
            alt: self.name.clone(),
        }
    }

    /// Command inserting this image inline with a fixed alt text.
    pub fn inline_command(&self, alt: &str) -> EditorCommand {
        EditorCommand::InsertImage {
            url: self.url.clone(),
            alt: alt.to_string(),
        }
    }
}

/// Success body of the upload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("an upload is already in progress")]
    Busy,

    #[error("{0} is not an image")]
    NotAnImage(String),

    #[error("upload request failed: {0}")]
    Transport(String),

    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("invalid upload response: {0}")]
    InvalidResponse(String),

    #[error("the server did not return an image URL")]
    MissingUrl,
}

/// Whether a file's MIME type is an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Interpret the endpoint's status and body.
///
/// Non-2xx answers use the body's `detail` string as the message, falling
/// back to the status line.
pub fn parse_upload_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<String, UploadError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("Erreur {status}: {status_text}"));
        return Err(UploadError::Server { status, detail });
    }

    let response: UploadResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
    response
        .url
        .filter(|url| !url.is_empty())
        .ok_or(UploadError::MissingUrl)
}

/// Allows one upload batch at a time.
#[derive(Debug, Clone, Default)]
pub struct UploadTracker {
    busy: Rc<Cell<bool>>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_uploading(&self) -> bool {
        self.busy.get()
    }

    /// Mark an upload as started. The returned ticket releases the tracker
    /// when dropped, whether the upload succeeded or not.
    pub fn begin(&self) -> Result<UploadTicket, UploadError> {
        if self.busy.replace(true) {
            return Err(UploadError::Busy);
        }
        Ok(UploadTicket {
            busy: self.busy.clone(),
        })
    }
}

/// Held for the duration of an upload batch.
#[derive(Debug)]
pub struct UploadTicket {
    busy: Rc<Cell<bool>>,
}

impl Drop for UploadTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
