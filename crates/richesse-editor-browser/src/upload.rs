//! Image upload transport.
//!
//! Posts one file as `multipart/form-data` (field `file`) with the session
//! cookie and, when the host stored one, a bearer token.

use gloo_net::http::Request;
use richesse_editor_core::upload::{is_image_mime, parse_upload_response};
use richesse_editor_core::{Attachment, UploadError};
use web_sys::{File, FileList, FormData, RequestCredentials};

/// `localStorage` key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "token";

fn auth_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

fn js_error(e: wasm_bindgen::JsValue) -> UploadError {
    UploadError::Transport(format!("{e:?}"))
}

/// Upload one image and return where it is served from.
pub async fn upload_image(endpoint: &str, file: &File) -> Result<Attachment, UploadError> {
    let name = file.name();
    if !is_image_mime(&file.type_()) {
        return Err(UploadError::NotAnImage(name));
    }
    tracing::debug!(name = %name, size = file.size(), "uploading image");

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &name)
        .map_err(js_error)?;

    let mut request = Request::post(endpoint).credentials(RequestCredentials::Include);
    if let Some(token) = auth_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }

    let response = request
        .body(form)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let url = parse_upload_response(status, &response.status_text(), &body)?;

    tracing::debug!(name = %name, url = %url, "image uploaded");
    Ok(Attachment { name, url })
}

/// Files of a list, in order.
pub fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Split files into images and everything else.
pub fn partition_images(files: Vec<File>) -> (Vec<File>, Vec<File>) {
    files.into_iter().partition(|f| is_image_mime(&f.type_()))
}
